//! Bootstrap module for the `forta-agent` command-line tool.
//!
//! This module builds the command-line interface and runs its subcommands against a
//! [`ConfigResolver`], which keeps the binary a thin wrapper that tests can drive without
//! spawning a process.
//!
//! # Commands
//! - `rpc-url`: Prints the resolved JSON-RPC endpoint
//! - `config`: Prints the parsed agent configuration as JSON
//! - `keccak <TEXT>`: Prints the Keccak-256 digest of `TEXT`

use clap::{crate_version, Arg, ArgMatches, Command};
use std::{collections::HashMap, error::Error, path::PathBuf};
use tracing::instrument;

use crate::{
	services::config::ConfigResolver,
	utils::{constants::CONFIG_FLAG, keccak_hex},
};

/// Type alias for command results
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Builds the command-line interface
pub fn build_cli() -> Command {
	Command::new("forta-agent")
		.version(crate_version!())
		.about("Resolves Forta agent configuration and computes agent helper values")
		.subcommand_required(true)
		.arg(
			Arg::new("config")
				.long("config")
				.value_name("FILE")
				.global(true)
				.help("Config file, relative to the working directory [default: forta.config.json]"),
		)
		.subcommand(Command::new("rpc-url").about("Print the resolved JSON-RPC endpoint"))
		.subcommand(Command::new("config").about("Print the parsed agent configuration"))
		.subcommand(
			Command::new("keccak")
				.about("Print the Keccak-256 digest of a string")
				.arg(Arg::new("text").required(true).help("Text to hash")),
		)
}

/// Creates the resolver for a parsed command line
///
/// The `--config` value parsed by clap is handed to the resolver as a plain argument list, so
/// both `--config FILE` and `--config=FILE` reach it.
pub fn resolver_for(
	matches: &ArgMatches,
	env: HashMap<String, String>,
	cwd: impl Into<PathBuf>,
) -> ConfigResolver {
	let args: Vec<String> = match matches.get_one::<String>("config") {
		Some(file) => vec![CONFIG_FLAG.to_string(), file.clone()],
		None => Vec::new(),
	};
	ConfigResolver::new(args, env, cwd)
}

/// Runs the selected subcommand and returns the text to print
#[instrument(skip_all)]
pub fn execute(matches: &ArgMatches, resolver: &ConfigResolver) -> Result<String> {
	match matches.subcommand() {
		Some(("rpc-url", _)) => Ok(resolver.resolve_rpc_endpoint()?),
		Some(("config", _)) => {
			let config = resolver.load_agent_config()?;
			Ok(serde_json::to_string_pretty(&config)?)
		}
		Some(("keccak", sub)) => {
			let text = sub
				.get_one::<String>("text")
				.ok_or("missing text to hash")?;
			Ok(keccak_hex(text))
		}
		Some((name, _)) => Err(format!("unknown command: {}", name).into()),
		None => Err("no command given".into()),
	}
}
