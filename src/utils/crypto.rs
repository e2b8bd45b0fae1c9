//! Hashing helpers for agents.

use alloy::primitives::keccak256;

/// Keccak-256 of the UTF-8 bytes of `text`, as `0x`-prefixed lowercase hex
pub fn keccak_hex(text: &str) -> String {
	format!("0x{}", hex::encode(keccak256(text.as_bytes())))
}
