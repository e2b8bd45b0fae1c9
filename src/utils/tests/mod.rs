//! Test helper utilities
//!
//! This module contains test helper utilities for the crate.
//!
//! - `builders`: Test helper utilities for creating test instances of event records

pub mod builders {
	pub mod evm {
		pub mod block;
		pub mod receipt;
		pub mod trace;
		pub mod transaction;
	}
}

pub use builders::*;
