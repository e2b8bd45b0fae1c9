//! EVM call trace data structures (parity `trace_*` format).

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// One frame of a transaction's call trace
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
	pub action: TraceAction,
	pub block_hash: B256,
	pub block_number: u64,
	/// Absent when the frame reverted
	#[serde(default)]
	pub result: Option<TraceResult>,
	/// Number of child frames
	pub subtraces: u64,
	/// Position of the frame in the call tree
	pub trace_address: Vec<u64>,
	pub transaction_hash: B256,
	pub transaction_position: u64,
	/// `call`, `create`, `suicide` or `reward`
	#[serde(rename = "type")]
	pub trace_type: String,
	#[serde(default)]
	pub error: Option<String>,
}

/// Action performed by a trace frame
///
/// Which fields are populated depends on the frame type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceAction {
	#[serde(default)]
	pub call_type: Option<String>,
	#[serde(default)]
	pub to: Option<Address>,
	#[serde(default)]
	pub input: Option<Bytes>,
	#[serde(default)]
	pub from: Option<Address>,
	#[serde(default)]
	pub value: Option<U256>,
	/// Init code of a `create` frame
	#[serde(default)]
	pub init: Option<Bytes>,
	/// Self-destructed contract of a `suicide` frame
	#[serde(default)]
	pub address: Option<Address>,
	#[serde(default)]
	pub balance: Option<U256>,
	#[serde(default)]
	pub refund_address: Option<Address>,
}

/// Outcome of a successful trace frame
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceResult {
	pub gas_used: U256,
	/// Deployed contract of a `create` frame
	#[serde(default)]
	pub address: Option<Address>,
	#[serde(default)]
	pub code: Option<Bytes>,
	#[serde(default)]
	pub output: Option<Bytes>,
}

impl Trace {
	/// Whether the frame reverted
	pub fn is_error(&self) -> bool {
		self.error.is_some()
	}
}
