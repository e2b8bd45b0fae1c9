//! Event factories.
//!
//! Build events from the fields that actually vary and default the rest: the event type
//! defaults to [`EventType::Block`], the network to [`Network::Mainnet`], traces and addresses to
//! empty collections. No validation runs here; see `utils::validation` for opt-in guards.

use std::collections::HashMap;

use crate::models::{
	BlockEvent, EVMBlock, EVMReceipt, EVMTrace, EVMTransaction, EVMTxEventBlock, EventType,
	Network, TransactionEvent,
};

/// Inputs for [`make_block_event`]
#[derive(Debug, Clone)]
pub struct BlockEventFields {
	pub event_type: Option<EventType>,
	pub network: Option<Network>,
	pub block_hash: String,
	pub block_number: u64,
	pub block: EVMBlock,
}

impl BlockEventFields {
	/// Required fields only; optional ones start unset
	pub fn new(block_hash: impl Into<String>, block_number: u64, block: EVMBlock) -> Self {
		Self {
			event_type: None,
			network: None,
			block_hash: block_hash.into(),
			block_number,
			block,
		}
	}
}

/// Inputs for [`make_transaction_event`]
#[derive(Debug, Clone)]
pub struct TransactionEventFields {
	pub event_type: Option<EventType>,
	pub network: Option<Network>,
	pub transaction: EVMTransaction,
	pub receipt: EVMReceipt,
	pub traces: Option<Vec<EVMTrace>>,
	pub addresses: Option<HashMap<String, bool>>,
	pub block: EVMTxEventBlock,
}

impl TransactionEventFields {
	/// Required fields only; optional ones start unset
	pub fn new(transaction: EVMTransaction, receipt: EVMReceipt, block: EVMTxEventBlock) -> Self {
		Self {
			event_type: None,
			network: None,
			transaction,
			receipt,
			traces: None,
			addresses: None,
			block,
		}
	}
}

/// Builds a [`BlockEvent`], defaulting unset optional fields
pub fn make_block_event(fields: BlockEventFields) -> BlockEvent {
	BlockEvent::new(
		fields.event_type.unwrap_or_default(),
		fields.network.unwrap_or_default(),
		fields.block_hash,
		fields.block_number,
		fields.block,
	)
}

/// Builds a [`TransactionEvent`], defaulting unset optional fields
pub fn make_transaction_event(fields: TransactionEventFields) -> TransactionEvent {
	TransactionEvent::new(
		fields.event_type.unwrap_or_default(),
		fields.network.unwrap_or_default(),
		fields.transaction,
		fields.receipt,
		fields.traces.unwrap_or_default(),
		fields.addresses.unwrap_or_default(),
		fields.block,
	)
}
