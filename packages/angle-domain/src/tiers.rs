pub const DEFAULT_LEVEL: u8 = 5;
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

#[derive(Debug, PartialEq, Eq)]
pub struct Tier {
	/// Highest aggressiveness level, inclusive, served by this tier.
	pub max_level: u8,
	pub angle_count: usize,
	pub angle_tone: &'static str,
	pub script_tone: &'static str,
}

/// Ordered by `max_level`; the first tier whose bound covers the level wins.
pub static TIERS: [Tier; 4] = [
	Tier {
		max_level: 3,
		angle_count: 5,
		angle_tone: "Focus on subtle, educational, and informative angles that gently persuade without being pushy.",
		script_tone: "subtle and informative, focusing on education and gentle persuasion",
	},
	Tier {
		max_level: 6,
		angle_count: 7,
		angle_tone: "Include a mix of moderate angles with emotional hooks and clear benefits.",
		script_tone: "moderately persuasive with emotional hooks and clear benefits",
	},
	Tier {
		max_level: 8,
		angle_count: 9,
		angle_tone: "Prioritize highly persuasive angles with strong emotional appeals, urgency, and compelling narratives.",
		script_tone: "highly persuasive with strong emotional appeals, urgency, and compelling calls-to-action",
	},
	Tier {
		max_level: u8::MAX,
		angle_count: 10,
		angle_tone: "Focus on very aggressive angles with intense urgency, strong fear/appeal triggers, and hard-hitting approaches.",
		script_tone: "very aggressive with intense urgency, strong fear/appeal triggers, and hard-hitting calls-to-action",
	},
];

/// Maps the optional request value onto `MIN_LEVEL..=MAX_LEVEL`.
///
/// Absent, zero, and non-finite values select [`DEFAULT_LEVEL`]; fractional values round to the
/// nearest level.
pub fn resolve_level(raw: Option<f64>) -> u8 {
	match raw {
		Some(value) if value.is_finite() && value != 0.0 => {
			value.round().clamp(f64::from(MIN_LEVEL), f64::from(MAX_LEVEL)) as u8
		},
		_ => DEFAULT_LEVEL,
	}
}

pub fn tier_for(level: u8) -> &'static Tier {
	TIERS.iter().find(|tier| level <= tier.max_level).unwrap_or(&TIERS[TIERS.len() - 1])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tiers_are_ordered_by_bound() {
		assert!(TIERS.windows(2).all(|pair| pair[0].max_level < pair[1].max_level));
	}

	#[test]
	fn tier_edges_select_expected_counts() {
		for (level, count) in [(1, 5), (3, 5), (4, 7), (6, 7), (7, 9), (8, 9), (9, 10), (10, 10)] {
			assert_eq!(tier_for(level).angle_count, count, "level {level}");
		}
	}

	#[test]
	fn tier_edges_select_expected_tones() {
		assert!(tier_for(3).script_tone.starts_with("subtle"));
		assert!(tier_for(4).script_tone.starts_with("moderately"));
		assert!(tier_for(7).script_tone.starts_with("highly"));
		assert!(tier_for(9).script_tone.starts_with("very aggressive"));
	}

	#[test]
	fn level_defaults_and_clamps() {
		assert_eq!(resolve_level(None), DEFAULT_LEVEL);
		assert_eq!(resolve_level(Some(0.0)), DEFAULT_LEVEL);
		assert_eq!(resolve_level(Some(f64::NAN)), DEFAULT_LEVEL);
		assert_eq!(resolve_level(Some(-4.0)), MIN_LEVEL);
		assert_eq!(resolve_level(Some(42.0)), MAX_LEVEL);
		assert_eq!(resolve_level(Some(6.4)), 6);
		assert_eq!(resolve_level(Some(8.0)), 8);
	}
}
