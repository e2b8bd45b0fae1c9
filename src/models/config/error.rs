//! Configuration error types.
//!
//! This module defines the error types that can occur while locating and loading the agent
//! configuration and resolving the JSON-RPC endpoint from it.

use log::error;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Errors that can occur during configuration operations
#[derive(ThisError, Debug)]
pub enum ConfigError {
	/// The config file could not be read
	#[error("File error: {}: {source}", .path.display())]
	FileError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The config file is not a commented JSON object
	#[error("Parse error: {}: {source}", .path.display())]
	ParseError {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// The working directory the config path is resolved against is unavailable
	#[error("File error: unable to determine working directory: {0}")]
	WorkingDirError(#[source] std::io::Error),

	/// Neither the environment nor the config file names an RPC endpoint
	#[error("no RPC URL found")]
	MissingRpcUrl,
}

impl ConfigError {
	/// Create a new file error and log it
	pub fn file_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		let error = Self::FileError {
			path: path.into(),
			source,
		};
		error!("{}", error);
		error
	}

	/// Create a new parse error and log it
	pub fn parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
		let error = Self::ParseError {
			path: path.into(),
			source,
		};
		error!("{}", error);
		error
	}

	/// Create a new working directory error and log it
	pub fn working_dir_error(source: std::io::Error) -> Self {
		let error = Self::WorkingDirError(source);
		error!("{}", error);
		error
	}

	/// Create a new missing RPC URL error and log it
	pub fn missing_rpc_url() -> Self {
		let error = Self::MissingRpcUrl;
		error!("{}", error);
		error
	}
}
