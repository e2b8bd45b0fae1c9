//! Domain events delivered to agents.
//!
//! Events are immutable once constructed. Build them with the factories in
//! `services::event`, which fill in the rarely varied fields.

mod block;
mod transaction;

pub use block::BlockEvent;
pub use transaction::TransactionEvent;
