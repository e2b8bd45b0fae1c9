//! EVM transaction data structures.

use alloy::primitives::{Address, Bytes, B256, U256, U64};
use serde::{Deserialize, Serialize};

/// Transaction as delivered with a transaction event
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	/// Transaction hash
	pub hash: B256,
	/// Sender
	pub from: Address,
	/// Recipient (None when contract creation)
	pub to: Option<Address>,
	/// Sender nonce
	pub nonce: u64,
	/// Gas limit
	pub gas: U256,
	/// Gas price in wei
	pub gas_price: U256,
	/// Transferred value in wei
	pub value: U256,
	/// Call data
	pub data: Bytes,
	/// ECDSA signature r
	pub r: B256,
	/// ECDSA signature s
	pub s: B256,
	/// ECDSA recovery id
	pub v: U64,
}

impl Transaction {
	/// Whether the transaction deploys a contract
	pub fn is_contract_creation(&self) -> bool {
		self.to.is_none()
	}
}
