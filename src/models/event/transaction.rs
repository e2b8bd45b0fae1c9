use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{
	EVMReceipt, EVMReceiptLog, EVMTrace, EVMTransaction, EVMTxEventBlock, EventType, Network,
};

/// Event handed to an agent for each transaction of an observed block
///
/// `addresses` maps every address the transaction touched (lowercase hex) to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEvent {
	#[serde(rename = "type")]
	event_type: EventType,
	network: Network,
	transaction: EVMTransaction,
	receipt: EVMReceipt,
	traces: Vec<EVMTrace>,
	addresses: HashMap<String, bool>,
	block: EVMTxEventBlock,
}

impl TransactionEvent {
	pub fn new(
		event_type: EventType,
		network: Network,
		transaction: EVMTransaction,
		receipt: EVMReceipt,
		traces: Vec<EVMTrace>,
		addresses: HashMap<String, bool>,
		block: EVMTxEventBlock,
	) -> Self {
		Self {
			event_type,
			network,
			transaction,
			receipt,
			traces,
			addresses,
			block,
		}
	}

	pub fn event_type(&self) -> EventType {
		self.event_type
	}

	pub fn network(&self) -> Network {
		self.network
	}

	pub fn transaction(&self) -> &EVMTransaction {
		&self.transaction
	}

	pub fn receipt(&self) -> &EVMReceipt {
		&self.receipt
	}

	pub fn traces(&self) -> &[EVMTrace] {
		&self.traces
	}

	pub fn addresses(&self) -> &HashMap<String, bool> {
		&self.addresses
	}

	pub fn block(&self) -> &EVMTxEventBlock {
		&self.block
	}

	pub fn hash(&self) -> &B256 {
		&self.transaction.hash
	}

	pub fn from(&self) -> &Address {
		&self.transaction.from
	}

	pub fn to(&self) -> Option<&Address> {
		self.transaction.to.as_ref()
	}

	pub fn gas_price(&self) -> &U256 {
		&self.transaction.gas_price
	}

	pub fn timestamp(&self) -> u64 {
		self.block.timestamp
	}

	pub fn block_number(&self) -> u64 {
		self.block.number
	}

	pub fn block_hash(&self) -> &B256 {
		&self.block.hash
	}

	pub fn logs(&self) -> &[EVMReceiptLog] {
		&self.receipt.logs
	}

	/// Whether the transaction touched `address`. Matching ignores hex case.
	pub fn contains_address(&self, address: &str) -> bool {
		self.addresses
			.get(&address.to_lowercase())
			.copied()
			.unwrap_or(false)
	}
}
