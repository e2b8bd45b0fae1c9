use serde::{Deserialize, Serialize};

use crate::models::{EVMBlock, EventType, Network};

/// Event handed to an agent for each observed block
///
/// Fields are private so the event cannot be altered once built; read them through the
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockEvent {
	#[serde(rename = "type")]
	event_type: EventType,
	network: Network,
	block_hash: String,
	block_number: u64,
	block: EVMBlock,
}

impl BlockEvent {
	pub fn new(
		event_type: EventType,
		network: Network,
		block_hash: impl Into<String>,
		block_number: u64,
		block: EVMBlock,
	) -> Self {
		Self {
			event_type,
			network,
			block_hash: block_hash.into(),
			block_number,
			block,
		}
	}

	pub fn event_type(&self) -> EventType {
		self.event_type
	}

	pub fn network(&self) -> Network {
		self.network
	}

	pub fn block_hash(&self) -> &str {
		&self.block_hash
	}

	pub fn block_number(&self) -> u64 {
		self.block_number
	}

	pub fn block(&self) -> &EVMBlock {
		&self.block
	}

	/// Timestamp of the block in seconds
	pub fn timestamp(&self) -> u64 {
		self.block.timestamp
	}
}
