//! Constants shared across the crate

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "forta.config.json";

/// Command-line flag whose following argument names the config file
pub const CONFIG_FLAG: &str = "--config";

/// Host of the JSON-RPC endpoint injected by the scanner
pub const JSON_RPC_HOST_ENV: &str = "JSON_RPC_HOST";

/// Port of the JSON-RPC endpoint injected by the scanner
pub const JSON_RPC_PORT_ENV: &str = "JSON_RPC_PORT";

/// Config file key holding the full JSON-RPC URL
pub const JSON_RPC_URL_KEY: &str = "jsonRpcUrl";

/// Log filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";
