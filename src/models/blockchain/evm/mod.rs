//! Ethereum Virtual Machine (EVM) record shapes.
//!
//! This module contains the blocks, transactions, receipts and traces that events carry.
//! They are plain data records deserialized from the scanner and handed to agents unchanged.

mod block;
mod receipt;
mod trace;
mod transaction;

pub use block::{Block as EVMBlock, TxEventBlock as EVMTxEventBlock};
pub use receipt::{Log as EVMReceiptLog, Receipt as EVMReceipt};
pub use trace::{Trace as EVMTrace, TraceAction as EVMTraceAction, TraceResult as EVMTraceResult};
pub use transaction::Transaction as EVMTransaction;
