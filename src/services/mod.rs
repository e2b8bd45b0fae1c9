//! Core services.
//!
//! - `config`: Config file loading and JSON-RPC endpoint resolution
//! - `event`: Block and transaction event factories

pub mod config;
pub mod event;
