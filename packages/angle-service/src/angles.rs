use serde::{Deserialize, Serialize};

use angle_domain::{
	angles::{self, GeneratedAngle},
	tiers,
};

use crate::{Action, AngleService, Error, Result, prompts};

/// Body of `POST /api/angles`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAnglesRequest {
	pub brand_name: Option<String>,
	pub product_name: Option<String>,
	#[serde(default, deserialize_with = "crate::number_serde::deserialize")]
	pub aggressiveness: Option<f64>,
}

#[derive(Clone, Debug, Serialize)]
pub struct GenerateAnglesResponse {
	pub angles: Vec<GeneratedAngle>,
}

impl AngleService {
	pub async fn generate_angles(&self, req: GenerateAnglesRequest) -> Result<GenerateAnglesResponse> {
		let brand_name =
			crate::required(req.brand_name.as_deref(), "brandName", "Brand name is required")?;
		let product_name =
			crate::required(req.product_name.as_deref(), "productName", "Product name is required")?;
		let api_key = self.api_key()?;
		let level = tiers::resolve_level(req.aggressiveness);
		let tier = tiers::tier_for(level);
		let reference_context = self.reference_context().await;
		let hits = self.gather_reviews(product_name, brand_name).await;
		let review_context = prompts::review_context(&hits);
		let messages = vec![
			serde_json::json!({
				"role": "system",
				"content": prompts::angle_system_prompt(&reference_context, &review_context),
			}),
			serde_json::json!({
				"role": "user",
				"content": prompts::angle_user_prompt(brand_name, product_name, level, tier),
			}),
		];

		tracing::info!(
			brand_name,
			product_name,
			level,
			review_hits = hits.len(),
			"Generating marketing angles."
		);

		let reply = self
			.complete(Action::Angles, api_key, &self.cfg.generation.angles, &messages)
			.await?
			.unwrap_or_else(|| "[]".to_string());
		let angles = angles::parse_angles(&reply).map_err(|err| {
			tracing::error!(error = %err, "Failed to parse angles reply.");

			Error::Parse { action: Action::Angles, raw: reply.clone() }
		})?;

		Ok(GenerateAnglesResponse { angles })
	}
}
