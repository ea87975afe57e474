//! Optional numeric request fields that also accept numbers sent as strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
	Number(f64),
	Text(String),
}

/// `7`, `7.5`, `"7"`, and `" 7 "` all read as numbers. Strings that do not parse, and `null`, read
/// as absent so the field's default applies.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = Option::<RawNumber>::deserialize(deserializer)?;

	Ok(match raw {
		Some(RawNumber::Number(value)) => Some(value),
		Some(RawNumber::Text(text)) => text.trim().parse().ok(),
		None => None,
	})
}
