use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use angle_config::{CompletionProfile, GenerationProviderConfig};

use crate::{Error, Result};

/// Sends one chat-completion request and returns the first choice's text, if any.
///
/// A non-success status becomes [`Error::Upstream`] carrying the raw response body.
pub async fn complete(
	cfg: &GenerationProviderConfig,
	api_key: &str,
	profile: &CompletionProfile,
	messages: &[Value],
) -> Result<Option<String>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": profile.model,
		"messages": messages,
		"temperature": profile.temperature,
		"max_tokens": profile.max_tokens,
	});
	let res = client
		.post(&url)
		.headers(crate::auth_headers(api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let status = res.status();

	if !status.is_success() {
		let body = res.text().await.unwrap_or_default();

		return Err(Error::Upstream { status: status.as_u16(), body });
	}

	let json: Value = res.json().await?;

	Ok(parse_completion_content(&json))
}

pub fn parse_completion_content(json: &Value) -> Option<String> {
	json.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
		.filter(|content| !content.is_empty())
		.map(str::to_string)
}
