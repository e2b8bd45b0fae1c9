//! Agent configuration document.
//!
//! The config file is a JSON object that may contain `//` and `/* */` comments; `#` lines are
//! not comments and fail to parse. Only
//! `jsonRpcUrl` has a meaning here; every other key is carried through untouched for agent
//! code to read.

use json_comments::{CommentSettings, StripComments};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::utils::constants::JSON_RPC_URL_KEY;

mod error;

pub use error::ConfigError;

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Parses configuration text
	fn load_from_str(text: &str) -> Result<Self, serde_json::Error>;

	/// Reads and parses the configuration file at `path`
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		let text =
			std::fs::read_to_string(path).map_err(|e| ConfigError::file_error(path, e))?;
		Self::load_from_str(&text).map_err(|e| ConfigError::parse_error(path, e))
	}
}

/// Loosely structured agent configuration
///
/// No schema is enforced beyond the document being a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AgentConfig(Map<String, Value>);

impl AgentConfig {
	pub fn new(values: Map<String, Value>) -> Self {
		Self(values)
	}

	/// Raw value stored under `key`
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}

	/// String value stored under `key`, `None` when absent or not a string
	pub fn get_string(&self, key: &str) -> Option<&str> {
		self.get(key).and_then(Value::as_str)
	}

	/// The configured JSON-RPC URL
	///
	/// Only a non-empty string counts; a missing key, `null`, `false`, `0` or `""` all yield
	/// `None`.
	pub fn json_rpc_url(&self) -> Option<&str> {
		self.get_string(JSON_RPC_URL_KEY).filter(|url| !url.is_empty())
	}

	pub fn keys(&self) -> impl Iterator<Item = &String> {
		self.0.keys()
	}

	pub fn as_map(&self) -> &Map<String, Value> {
		&self.0
	}

	pub fn into_inner(self) -> Map<String, Value> {
		self.0
	}
}

impl ConfigLoader for AgentConfig {
	fn load_from_str(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_reader(StripComments::with_settings(
			CommentSettings::c_style(),
			text.as_bytes(),
		))
	}
}
