//! Opt-in guards for untyped input.
//!
//! Nothing in the crate calls these implicitly. Event factories accept whatever they are given,
//! so callers that receive values from outside (fixtures, JSON payloads) check them here first.

use serde_json::Value;
use thiserror::Error as ThisError;

use crate::models::EnumMember;

/// A value failed one of the guards. The message names the offending field.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	#[error("{field} must be non-empty string")]
	EmptyString { field: String },

	#[error("{field} must be valid enum value")]
	NotEnumMember { field: String },
}

impl ValidationError {
	/// Create an empty string error
	pub fn empty_string(field: impl Into<String>) -> Self {
		let error = Self::EmptyString {
			field: field.into(),
		};
		log::error!("{}", error);
		error
	}

	/// Create an enum membership error
	pub fn not_enum_member(field: impl Into<String>) -> Self {
		let error = Self::NotEnumMember {
			field: field.into(),
		};
		log::error!("{}", error);
		error
	}
}

/// Checks that `value` is a JSON string with at least one character
pub fn assert_non_empty_string<'a>(
	value: &'a Value,
	field_name: &str,
) -> Result<&'a str, ValidationError> {
	match value.as_str() {
		Some(s) if !s.is_empty() => Ok(s),
		_ => Err(ValidationError::empty_string(field_name)),
	}
}

/// Checks that `value` is one of `E`'s declared values and returns the typed variant
///
/// Both the wire name (`"BLOCK"`) and the numeric tag (`0`, or an integral float like `0.0`)
/// identify a variant.
pub fn assert_is_enum_member<E: EnumMember>(
	value: &Value,
	field_name: &str,
) -> Result<E, ValidationError> {
	let member = match value {
		Value::String(name) => E::from_name(name),
		Value::Number(tag) => tag
			.as_u64()
			.or_else(|| {
				tag.as_f64()
					.filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
					.map(|f| f as u64)
			})
			.and_then(E::from_tag),
		_ => None,
	};

	member.ok_or_else(|| ValidationError::not_enum_member(field_name))
}
