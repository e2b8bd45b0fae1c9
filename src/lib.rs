//! Configuration resolution and event construction for Forta agents.
//!
//! This library provides the pieces an agent needs around its detection logic:
//!
//! - JSON-RPC endpoint resolution (environment first, then `forta.config.json`)
//! - Immutable block and transaction events with defaulting factories
//! - Opt-in validators for untyped input
//! - Keccak-256 hex digests
//!
//! # Module Structure
//!
//! - `bootstrap`: Command-line interface of the `forta-agent` binary
//! - `models`: Events, EVM records, enums and the config document
//! - `services`: Config resolution and event factories
//! - `utils`: Constants, hashing, logging, validation and test builders

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
