//! EVM block data structures.

use alloy::primitives::{Address, Bloom, Bytes, B256, B64, U256};
use serde::{Deserialize, Serialize};

/// Full block header as delivered with a block event
///
/// Transactions are carried as hashes only; the transaction bodies arrive with their own
/// transaction events.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
	/// Hash of the block
	pub hash: B256,
	/// Hash of the parent
	pub parent_hash: B256,
	/// Block number
	pub number: u64,
	/// Unix timestamp in seconds
	pub timestamp: u64,
	/// Proof-of-work nonce
	pub nonce: B64,
	/// Difficulty
	#[serde(default)]
	pub difficulty: U256,
	/// Total difficulty of the chain up to this block
	#[serde(default)]
	pub total_difficulty: U256,
	/// Gas Limit
	pub gas_limit: U256,
	/// Gas Used
	pub gas_used: U256,
	/// Miner/author's address
	pub miner: Address,
	/// Extra data
	pub extra_data: Bytes,
	/// Logs bloom
	pub logs_bloom: Bloom,
	/// Mix Hash
	#[serde(default)]
	pub mix_hash: B256,
	/// State root hash
	pub state_root: B256,
	/// Transactions root hash
	pub transactions_root: B256,
	/// Transactions receipts root hash
	pub receipts_root: B256,
	/// Hash of the uncles
	#[serde(rename = "sha3Uncles")]
	pub uncles_hash: B256,
	/// Size in bytes
	#[serde(default)]
	pub size: U256,
	/// Uncles' hashes
	#[serde(default)]
	pub uncles: Vec<B256>,
	/// Hashes of the transactions included in the block
	#[serde(default)]
	pub transactions: Vec<B256>,
}

/// Slim view of the enclosing block carried by a transaction event
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TxEventBlock {
	/// Hash of the block
	pub hash: B256,
	/// Block number
	pub number: u64,
	/// Unix timestamp in seconds
	pub timestamp: u64,
}

impl From<&Block> for TxEventBlock {
	fn from(block: &Block) -> Self {
		Self {
			hash: block.hash,
			number: block.number,
			timestamp: block.timestamp,
		}
	}
}
