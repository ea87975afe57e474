use serde::{Deserialize, Serialize};

/// Upper bound on hits gathered across every scope for one request.
pub const MAX_COMBINED_HITS: usize = 20;

/// Site-restricted search scope a hit was found in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSource {
	Forum,
	Retail,
}
impl ReviewSource {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Forum => "forum",
			Self::Retail => "retail",
		}
	}

	pub fn site_clause(self) -> &'static str {
		match self {
			Self::Forum => "site:reddit.com",
			Self::Retail => "site:amazon.com reviews",
		}
	}

	/// Tag shown next to each hit in prompts.
	pub fn label(self) -> &'static str {
		match self {
			Self::Forum => "REDDIT",
			Self::Retail => "AMAZON",
		}
	}

	pub fn query(self, product_name: &str, brand_name: &str) -> String {
		format!("{product_name} {brand_name} {}", self.site_clause())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
	pub title: String,
	pub url: String,
	pub snippet: String,
	pub source: ReviewSource,
}
