use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAngle {
	pub angle: String,
	/// Model-estimated likelihood of success, 0-100.
	#[serde(deserialize_with = "likelihood_score")]
	pub likelihood: u8,
}

/// Parses a model reply into angles, highest likelihood first.
///
/// Prose around the array is ignored: the slice from the first `[` to the last `]` is parsed when
/// present, otherwise the whole reply.
pub fn parse_angles(reply: &str) -> serde_json::Result<Vec<GeneratedAngle>> {
	let candidate = json_array_slice(reply).unwrap_or(reply);
	let mut angles: Vec<GeneratedAngle> = serde_json::from_str(candidate)?;

	sort_by_likelihood(&mut angles);

	Ok(angles)
}

/// Stable, so equal scores keep the model's order.
pub fn sort_by_likelihood(angles: &mut [GeneratedAngle]) {
	angles.sort_by(|a, b| b.likelihood.cmp(&a.likelihood));
}

fn json_array_slice(reply: &str) -> Option<&str> {
	let start = reply.find('[')?;
	let end = reply.rfind(']')?;

	(end > start).then(|| &reply[start..=end])
}

fn likelihood_score<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = f64::deserialize(deserializer)?;

	if !raw.is_finite() {
		return Err(D::Error::custom("likelihood must be a finite number"));
	}

	Ok(raw.round().clamp(0.0, 100.0) as u8)
}
