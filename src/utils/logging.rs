//! Logging setup for the agent tooling.
//!
//! `setup_logging` installs a global `tracing_subscriber` registry writing compact lines to
//! stderr, so stdout stays free for command output. The level filter comes from `RUST_LOG`
//! and falls back to [`DEFAULT_LOG_FILTER`]. Records emitted through the `log` facade (error
//! constructors use it) are forwarded to the same subscriber.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use crate::utils::constants::DEFAULT_LOG_FILTER;

/// Setup logging to stderr
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(std::io::stderr)
}

/// Setup logging with a custom writer
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer().with_writer(writer).event_format(
				fmt::format()
					.with_level(true)
					.with_target(false)
					.with_ansi(false)
					.compact(),
			),
		)
		.try_init()?;
	Ok(())
}
