//! Configuration resolution service.
//!
//! Locates and loads the agent config file and resolves the JSON-RPC endpoint, with the
//! environment taking precedence over the file.

mod resolver;

pub use resolver::{config_path, load_agent_config, resolve_rpc_endpoint, ConfigResolver};
