use serde::{Deserialize, Serialize};
use std::fmt;

use super::EnumMember;

/// Chains an agent can be deployed against, tagged with their chain id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Network {
	#[default]
	Mainnet,
	Ropsten,
	Rinkeby,
	Goerli,
	Optimism,
	Bsc,
	Polygon,
	Fantom,
	Arbitrum,
	Avalanche,
}

impl Network {
	/// EIP-155 chain id of the network
	pub fn chain_id(self) -> u64 {
		self.tag()
	}
}

impl EnumMember for Network {
	const VARIANTS: &'static [Self] = &[
		Self::Mainnet,
		Self::Ropsten,
		Self::Rinkeby,
		Self::Goerli,
		Self::Optimism,
		Self::Bsc,
		Self::Polygon,
		Self::Fantom,
		Self::Arbitrum,
		Self::Avalanche,
	];

	fn name(self) -> &'static str {
		match self {
			Self::Mainnet => "MAINNET",
			Self::Ropsten => "ROPSTEN",
			Self::Rinkeby => "RINKEBY",
			Self::Goerli => "GOERLI",
			Self::Optimism => "OPTIMISM",
			Self::Bsc => "BSC",
			Self::Polygon => "POLYGON",
			Self::Fantom => "FANTOM",
			Self::Arbitrum => "ARBITRUM",
			Self::Avalanche => "AVALANCHE",
		}
	}

	fn tag(self) -> u64 {
		match self {
			Self::Mainnet => 1,
			Self::Ropsten => 3,
			Self::Rinkeby => 4,
			Self::Goerli => 5,
			Self::Optimism => 10,
			Self::Bsc => 56,
			Self::Polygon => 137,
			Self::Fantom => 250,
			Self::Arbitrum => 42161,
			Self::Avalanche => 43114,
		}
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
