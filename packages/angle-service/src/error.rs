use std::fmt::{self, Display, Formatter};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Generation workflow a failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
	Angles,
	Script,
	Variation,
}
impl Action {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Angles => "angles",
			Self::Script => "script",
			Self::Variation => "variation",
		}
	}
}
impl Display for Action {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{message}")]
	MissingField { field: &'static str, message: &'static str },
	#[error("API key not configured")]
	MissingApiKey,
	#[error("Generation provider {provider_id} rejected the {action} request with status {status}.")]
	Upstream { action: Action, provider_id: String, status: u16, body: String },
	#[error("Failed to parse {action} response.")]
	Parse { action: Action, raw: String },
	#[error("Generation provider {provider_id} failed the {action} request: {message}")]
	Provider { action: Action, provider_id: String, message: String },
}
