//! Forta agent tooling entry point.
//!
//! Loads `.env`, sets up logging, then runs one command against the agent configuration:
//! print the resolved JSON-RPC endpoint, print the parsed config file, or hash a string.

use dotenvy::dotenv;
use forta_agent::{
	bootstrap::{build_cli, execute, resolver_for},
	utils::logging::setup_logging,
};
use tracing::{error, info};

fn main() {
	let dotenv_loaded = dotenv().is_ok();

	if let Err(e) = setup_logging() {
		eprintln!("Failed to setup logging: {}", e);
	}
	if dotenv_loaded {
		info!("Loaded environment from .env");
	}

	let matches = build_cli().get_matches();

	let cwd = match std::env::current_dir() {
		Ok(cwd) => cwd,
		Err(e) => {
			error!(error = %e, "Unable to determine working directory");
			std::process::exit(1);
		}
	};
	let resolver = resolver_for(&matches, std::env::vars().collect(), cwd);

	match execute(&matches, &resolver) {
		Ok(output) => println!("{}", output),
		Err(e) => {
			error!(error = %e, "Command failed");
			std::process::exit(1);
		}
	}
}
