use alloy::primitives::{Address, B256, U256};

use crate::models::{EVMBlock, EVMTxEventBlock};

/// A builder for creating test EVM blocks with default values.
#[derive(Debug, Default)]
pub struct BlockBuilder {
	block: EVMBlock,
}

impl BlockBuilder {
	/// Creates a new BlockBuilder instance.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the hash of the block.
	pub fn hash(mut self, hash: B256) -> Self {
		self.block.hash = hash;
		self
	}

	/// Sets the parent hash of the block.
	pub fn parent_hash(mut self, parent_hash: B256) -> Self {
		self.block.parent_hash = parent_hash;
		self
	}

	/// Sets the number of the block.
	pub fn number(mut self, number: u64) -> Self {
		self.block.number = number;
		self
	}

	/// Sets the timestamp of the block.
	pub fn timestamp(mut self, timestamp: u64) -> Self {
		self.block.timestamp = timestamp;
		self
	}

	/// Sets the miner of the block.
	pub fn miner(mut self, miner: Address) -> Self {
		self.block.miner = miner;
		self
	}

	/// Sets the gas used by the block.
	pub fn gas_used(mut self, gas_used: U256) -> Self {
		self.block.gas_used = gas_used;
		self
	}

	/// Adds a transaction hash to the block.
	pub fn add_transaction(mut self, hash: B256) -> Self {
		self.block.transactions.push(hash);
		self
	}

	/// Builds the Block instance.
	pub fn build(self) -> EVMBlock {
		self.block
	}

	/// Builds the slim block view carried by transaction events.
	pub fn build_tx_event_block(self) -> EVMTxEventBlock {
		EVMTxEventBlock::from(&self.block)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder_default() {
		let block = BlockBuilder::new().build();
		assert_eq!(block.number, 0);
		assert_eq!(block.hash, B256::ZERO);
		assert!(block.transactions.is_empty());
	}

	#[test]
	fn test_builder_with_fields() {
		let block = BlockBuilder::new()
			.hash(B256::repeat_byte(0x01))
			.parent_hash(B256::repeat_byte(0x02))
			.number(100)
			.timestamp(1_700_000_000)
			.miner(Address::repeat_byte(0x03))
			.gas_used(U256::from(21000))
			.add_transaction(B256::repeat_byte(0x04))
			.build();

		assert_eq!(block.hash, B256::repeat_byte(0x01));
		assert_eq!(block.parent_hash, B256::repeat_byte(0x02));
		assert_eq!(block.number, 100);
		assert_eq!(block.timestamp, 1_700_000_000);
		assert_eq!(block.miner, Address::repeat_byte(0x03));
		assert_eq!(block.gas_used, U256::from(21000));
		assert_eq!(block.transactions, vec![B256::repeat_byte(0x04)]);
	}

	#[test]
	fn test_build_tx_event_block() {
		let block = BlockBuilder::new()
			.hash(B256::repeat_byte(0x0a))
			.number(12)
			.timestamp(99)
			.build_tx_event_block();

		assert_eq!(block.hash, B256::repeat_byte(0x0a));
		assert_eq!(block.number, 12);
		assert_eq!(block.timestamp, 99);
	}
}
