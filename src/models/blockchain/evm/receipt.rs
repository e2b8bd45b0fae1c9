//! EVM receipt data structures.

use alloy::primitives::{Address, Bloom, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// Receipt of an executed transaction
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
	/// Whether execution succeeded
	pub status: bool,
	/// State root (pre-Byzantium receipts only)
	#[serde(default)]
	pub root: Option<B256>,
	/// Gas used by this transaction alone
	pub gas_used: U256,
	/// Cumulative gas used within the block after this was executed
	pub cumulative_gas_used: U256,
	/// Logs bloom
	pub logs_bloom: Bloom,
	/// Logs generated within this transaction
	#[serde(default)]
	pub logs: Vec<Log>,
	/// Contract address created, or `None` if not a deployment
	pub contract_address: Option<Address>,
	/// Number of the block this transaction was included within
	pub block_number: u64,
	/// Hash of the block this transaction was included within
	pub block_hash: B256,
	/// Index within the block
	pub transaction_index: u64,
	/// Transaction hash
	pub transaction_hash: B256,
}

/// Event log emitted during execution
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
	/// Emitting contract
	pub address: Address,
	/// Indexed topics, event selector first
	pub topics: Vec<B256>,
	/// Non-indexed data
	pub data: Bytes,
	/// Index of the log within the block
	pub log_index: u64,
	pub block_number: u64,
	pub block_hash: B256,
	pub transaction_index: u64,
	pub transaction_hash: B256,
	/// Set when the log was dropped by a reorg
	#[serde(default)]
	pub removed: bool,
}

impl Receipt {
	/// Logs emitted by the given contract
	pub fn logs_from(&self, address: &Address) -> impl Iterator<Item = &Log> {
		let address = *address;
		self.logs.iter().filter(move |log| log.address == address)
	}
}
