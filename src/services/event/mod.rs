//! Event construction service.
//!
//! Used the same way by agent code and by test fixtures.

mod factory;

pub use factory::{
	make_block_event, make_transaction_event, BlockEventFields, TransactionEventFields,
};
