pub const DEFAULT_MINUTES: f64 = 2.0;

/// Target spoken length of a generated script.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoLength {
	minutes: f64,
}
impl VideoLength {
	/// Absent, zero, negative, and non-finite values fall back to [`DEFAULT_MINUTES`].
	pub fn from_request(raw: Option<f64>) -> Self {
		let minutes =
			raw.filter(|value| value.is_finite() && *value > 0.0).unwrap_or(DEFAULT_MINUTES);

		Self { minutes }
	}

	pub fn minutes(&self) -> f64 {
		self.minutes
	}

	pub fn seconds(&self) -> f64 {
		self.minutes * 60.0
	}

	/// One decimal place, e.g. `2.0`.
	pub fn minutes_label(&self) -> String {
		format!("{:.1}", self.minutes)
	}

	/// Whole numbers print without a fraction, e.g. `120`.
	pub fn seconds_label(&self) -> String {
		format!("{}", self.seconds())
	}

	/// `m:ss` mark the last timestamped line should land near.
	pub fn final_timestamp(&self) -> String {
		let total = self.seconds().floor() as u64;

		format!("{}:{:02}", total / 60, total % 60)
	}
}
impl Default for VideoLength {
	fn default() -> Self {
		Self { minutes: DEFAULT_MINUTES }
	}
}
