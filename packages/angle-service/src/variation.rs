use serde::Deserialize;

use angle_domain::{pacing::VideoLength, tiers};

use crate::{Action, AngleService, Result, ScriptResponse, prompts};

const EMPTY_VARIATION: &str = "No variation generated";

/// Body of `POST /api/variation`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVariationRequest {
	pub script: Option<String>,
	#[serde(default, deserialize_with = "crate::number_serde::deserialize")]
	pub video_length: Option<f64>,
	#[serde(default, deserialize_with = "crate::number_serde::deserialize")]
	pub aggressiveness: Option<f64>,
}

impl AngleService {
	pub async fn generate_variation(&self, req: GenerateVariationRequest) -> Result<ScriptResponse> {
		let script = crate::required(req.script.as_deref(), "script", "Script is required")?;
		let api_key = self.api_key()?;
		let length = VideoLength::from_request(req.video_length);
		let level = tiers::resolve_level(req.aggressiveness);
		let tier = tiers::tier_for(level);
		let reference_context = self.reference_context().await;
		let messages = vec![
			serde_json::json!({
				"role": "system",
				"content": prompts::variation_system_prompt(&reference_context),
			}),
			serde_json::json!({
				"role": "user",
				"content": prompts::variation_user_prompt(script, length, level, tier),
			}),
		];

		tracing::info!(
			source_chars = script.chars().count(),
			minutes = length.minutes(),
			level,
			"Generating script variation."
		);

		let script = self
			.complete(Action::Variation, api_key, &self.cfg.generation.variation, &messages)
			.await?
			.unwrap_or_else(|| EMPTY_VARIATION.to_string());

		Ok(ScriptResponse { script })
	}
}
