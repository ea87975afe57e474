use serde::{Deserialize, Serialize};

use angle_domain::{pacing::VideoLength, tiers};

use crate::{
	Action, AngleService, Result,
	prompts::{self, ScriptBrief},
};

const EMPTY_SCRIPT: &str = "No script generated";

/// Body of `POST /api/generate`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScriptRequest {
	pub brand_name: Option<String>,
	pub benefit: Option<String>,
	pub angle: Option<String>,
	#[serde(default, deserialize_with = "crate::number_serde::deserialize")]
	pub video_length: Option<f64>,
	#[serde(default, deserialize_with = "crate::number_serde::deserialize")]
	pub aggressiveness: Option<f64>,
}

/// Response of both script endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScriptResponse {
	pub script: String,
}

impl AngleService {
	pub async fn generate_script(&self, req: GenerateScriptRequest) -> Result<ScriptResponse> {
		let brand_name =
			crate::required(req.brand_name.as_deref(), "brandName", "Brand name is required")?;
		let benefit = crate::required(req.benefit.as_deref(), "benefit", "Benefit is required")?;
		let angle = crate::required(req.angle.as_deref(), "angle", "Angle is required")?;
		let api_key = self.api_key()?;
		let length = VideoLength::from_request(req.video_length);
		let level = tiers::resolve_level(req.aggressiveness);
		let brief = ScriptBrief {
			brand_name,
			benefit,
			angle,
			length,
			level,
			tier: tiers::tier_for(level),
		};
		let reference_context = self.reference_context().await;
		let messages = vec![
			serde_json::json!({
				"role": "system",
				"content": prompts::script_system_prompt(&reference_context),
			}),
			serde_json::json!({ "role": "user", "content": prompts::script_user_prompt(&brief) }),
		];

		tracing::info!(brand_name, minutes = length.minutes(), level, "Generating script.");

		let script = self
			.complete(Action::Script, api_key, &self.cfg.generation.script, &messages)
			.await?
			.unwrap_or_else(|| EMPTY_SCRIPT.to_string());

		Ok(ScriptResponse { script })
	}
}
