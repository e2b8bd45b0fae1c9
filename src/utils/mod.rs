//! Utility modules for common functionality.
//!
//! - constants: Flag names, environment variables and defaults
//! - crypto: Keccak-256 hex digests
//! - logging: Logging setup
//! - validation: Opt-in guards for untyped values
//! - tests: Fixture builders for event records

mod crypto;
mod validation;

pub mod constants;
pub mod logging;
pub mod tests;

pub use constants::*;
pub use crypto::keccak_hex;
pub use validation::{assert_is_enum_member, assert_non_empty_string, ValidationError};
