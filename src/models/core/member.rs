//! Closed enumerations with a runtime membership check.

/// A closed set of named, numbered variants.
///
/// Implementors list every declared variant in [`EnumMember::VARIANTS`], which lets untyped
/// input (a wire name such as `"MAINNET"` or a numeric tag such as `1`) be checked against the
/// set and turned back into the typed variant.
pub trait EnumMember: Copy + Sized + 'static {
	/// Every declared variant, in declaration order
	const VARIANTS: &'static [Self];

	/// Wire name of the variant
	fn name(self) -> &'static str;

	/// Numeric tag of the variant
	fn tag(self) -> u64;

	/// Looks up a variant by its wire name
	fn from_name(name: &str) -> Option<Self> {
		Self::VARIANTS.iter().copied().find(|v| v.name() == name)
	}

	/// Looks up a variant by its numeric tag
	fn from_tag(tag: u64) -> Option<Self> {
		Self::VARIANTS.iter().copied().find(|v| v.tag() == tag)
	}
}
