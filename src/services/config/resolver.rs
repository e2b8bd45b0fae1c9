//! Resolution of the agent configuration and JSON-RPC endpoint.
//!
//! Sources are consulted in a fixed order:
//! 1. `JSON_RPC_HOST` / `JSON_RPC_PORT` from the environment (set by the scanner in production)
//! 2. `jsonRpcUrl` from the config file (local development)
//!
//! The config file is `forta.config.json` in the working directory unless the argument list
//! carries `--config <file>`. Every call re-reads its inputs; nothing is cached.

use std::{
	collections::HashMap,
	path::{Component, Path, PathBuf},
};

use tracing::{debug, instrument};

use crate::{
	models::{AgentConfig, ConfigError, ConfigLoader},
	utils::constants::{CONFIG_FLAG, DEFAULT_CONFIG_FILE, JSON_RPC_HOST_ENV, JSON_RPC_PORT_ENV},
};

/// Snapshot of the process inputs configuration is resolved from
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
	args: Vec<String>,
	env: HashMap<String, String>,
	cwd: PathBuf,
}

impl ConfigResolver {
	/// Creates a resolver over explicit inputs
	pub fn new<A, E, K, V>(args: A, env: E, cwd: impl Into<PathBuf>) -> Self
	where
		A: IntoIterator,
		A::Item: Into<String>,
		E: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			args: args.into_iter().map(Into::into).collect(),
			env: env
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
			cwd: cwd.into(),
		}
	}

	/// Creates a resolver over the current process arguments, environment and working directory
	///
	/// Non UTF-8 arguments and variables are converted lossily.
	pub fn from_process() -> Result<Self, ConfigError> {
		let cwd = std::env::current_dir().map_err(ConfigError::working_dir_error)?;
		let args = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
		let env = std::env::vars_os().map(|(k, v)| {
			(
				k.to_string_lossy().into_owned(),
				v.to_string_lossy().into_owned(),
			)
		});
		Ok(Self::new(args, env, cwd))
	}

	pub fn args(&self) -> &[String] {
		&self.args
	}

	pub fn env(&self) -> &HashMap<String, String> {
		&self.env
	}

	pub fn cwd(&self) -> &Path {
		&self.cwd
	}

	/// Path of the config file this resolver reads
	pub fn config_path(&self) -> PathBuf {
		config_path(&self.args, &self.cwd)
	}

	/// Loads the agent configuration file
	pub fn load_agent_config(&self) -> Result<AgentConfig, ConfigError> {
		load_agent_config(&self.args, &self.cwd)
	}

	/// Resolves the JSON-RPC endpoint
	pub fn resolve_rpc_endpoint(&self) -> Result<String, ConfigError> {
		resolve_rpc_endpoint(&self.args, &self.env, &self.cwd)
	}
}

/// Path of the config file named by `args`, relative to `cwd`
///
/// The argument following the first `--config` names the file. When the flag is missing, is
/// the last argument, or is followed by an empty string, the default file name is used.
/// The file is always placed under `cwd`; a leading root is dropped, so `/etc/x.json` becomes
/// `<cwd>/etc/x.json`.
pub fn config_path(args: &[String], cwd: &Path) -> PathBuf {
	let file = args
		.iter()
		.position(|arg| arg == CONFIG_FLAG)
		.and_then(|i| args.get(i + 1))
		.map(String::as_str)
		.filter(|name| !name.is_empty())
		.unwrap_or(DEFAULT_CONFIG_FILE);
	let relative: PathBuf = Path::new(file)
		.components()
		.filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
		.collect();
	cwd.join(relative)
}

/// Reads and parses the config file named by `args`
#[instrument(skip_all)]
pub fn load_agent_config(args: &[String], cwd: &Path) -> Result<AgentConfig, ConfigError> {
	let path = config_path(args, cwd);
	debug!(path = %path.display(), "Loading agent config");
	AgentConfig::load_from_path(&path)
}

/// Resolves the JSON-RPC endpoint
///
/// A non-empty `JSON_RPC_HOST` wins and yields `http://<host>[:<port>]` without touching the
/// config file. Otherwise `jsonRpcUrl` from the config file is returned verbatim.
#[instrument(skip_all)]
pub fn resolve_rpc_endpoint(
	args: &[String],
	env: &HashMap<String, String>,
	cwd: &Path,
) -> Result<String, ConfigError> {
	if let Some(host) = non_empty_var(env, JSON_RPC_HOST_ENV) {
		let url = match non_empty_var(env, JSON_RPC_PORT_ENV) {
			Some(port) => format!("http://{}:{}", host, port),
			None => format!("http://{}", host),
		};
		debug!(url, "Using JSON-RPC endpoint from environment");
		return Ok(url);
	}

	let config = load_agent_config(args, cwd)?;
	match config.json_rpc_url() {
		Some(url) => {
			debug!(url, "Using JSON-RPC endpoint from config file");
			Ok(url.to_string())
		}
		None => Err(ConfigError::missing_rpc_url()),
	}
}

fn non_empty_var<'a>(env: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
	env.get(key).map(String::as_str).filter(|v| !v.is_empty())
}
