//! Blockchain-specific model implementations.
//!
//! Agents currently only run against EVM chains, so `evm` is the sole platform module.

pub mod evm;
