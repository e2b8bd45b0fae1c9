use serde::{Deserialize, Serialize};
use std::fmt;

use super::EnumMember;

/// Kind of chain event an agent is handed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
	/// Event produced for a newly observed block
	#[default]
	Block,
	/// Event replayed after a chain reorganisation
	Reorg,
}

impl EnumMember for EventType {
	const VARIANTS: &'static [Self] = &[Self::Block, Self::Reorg];

	fn name(self) -> &'static str {
		match self {
			Self::Block => "BLOCK",
			Self::Reorg => "REORG",
		}
	}

	fn tag(self) -> u64 {
		match self {
			Self::Block => 0,
			Self::Reorg => 1,
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
