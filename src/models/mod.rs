//! Domain models and data structures for Forta agents.
//!
//! This module contains all the core data structures used throughout the crate:
//!
//! - `blockchain`: EVM records carried by events (blocks, transactions, receipts, traces)
//! - `config`: Agent configuration document and loading
//! - `core`: Closed enumerations (EventType, Network)
//! - `event`: Block and transaction events handed to agents

mod blockchain;
mod config;
mod core;
mod event;

pub use blockchain::evm::{
	EVMBlock, EVMReceipt, EVMReceiptLog, EVMTrace, EVMTraceAction, EVMTraceResult,
	EVMTransaction, EVMTxEventBlock,
};

pub use config::{AgentConfig, ConfigError, ConfigLoader};

pub use core::{EnumMember, EventType, Network};

pub use event::{BlockEvent, TransactionEvent};
