pub mod angles;
pub mod error;
pub mod number_serde;
pub mod prompts;
pub mod reviews;
pub mod script;
pub mod variation;

pub use angles::{GenerateAnglesRequest, GenerateAnglesResponse};
pub use error::{Action, Error, Result};
pub use script::{GenerateScriptRequest, ScriptResponse};
pub use variation::GenerateVariationRequest;

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

use angle_config::{CompletionProfile, Config, GenerationProviderConfig, Search, SearchBackend};
use angle_domain::{
	references,
	review::{ReviewSource, SearchHit},
};
use angle_providers::{generation, search};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait GenerationProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a GenerationProviderConfig,
		api_key: &'a str,
		profile: &'a CompletionProfile,
		messages: &'a [Value],
	) -> BoxFuture<'a, angle_providers::Result<Option<String>>>;
}

/// Runs one scoped review query. Implementations may fail; the service treats a failed scope as
/// having no hits.
pub trait SearchProvider
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		cfg: &'a Search,
		query: &'a str,
		source: ReviewSource,
	) -> BoxFuture<'a, angle_providers::Result<Vec<SearchHit>>>;
}

#[derive(Clone)]
pub struct Providers {
	pub generation: Arc<dyn GenerationProvider>,
	pub search: Arc<dyn SearchProvider>,
}

pub struct AngleService {
	pub cfg: Config,
	pub providers: Providers,
}

struct DefaultProviders;

impl GenerationProvider for DefaultProviders {
	fn complete<'a>(
		&'a self,
		cfg: &'a GenerationProviderConfig,
		api_key: &'a str,
		profile: &'a CompletionProfile,
		messages: &'a [Value],
	) -> BoxFuture<'a, angle_providers::Result<Option<String>>> {
		Box::pin(generation::complete(cfg, api_key, profile, messages))
	}
}

impl SearchProvider for DefaultProviders {
	fn search<'a>(
		&'a self,
		cfg: &'a Search,
		query: &'a str,
		source: ReviewSource,
	) -> BoxFuture<'a, angle_providers::Result<Vec<SearchHit>>> {
		match cfg.backend {
			SearchBackend::DuckduckgoHtml => Box::pin(search::html::search(cfg, query, source)),
			SearchBackend::Serpapi => Box::pin(search::serpapi::search(cfg, query, source)),
		}
	}
}

impl Providers {
	pub fn new(generation: Arc<dyn GenerationProvider>, search: Arc<dyn SearchProvider>) -> Self {
		Self { generation, search }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { generation: provider.clone(), search: provider }
	}
}

impl AngleService {
	pub fn new(cfg: Config) -> Self {
		Self { cfg, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		Self { cfg, providers }
	}

	fn api_key(&self) -> Result<&str> {
		self.cfg.providers.generation.api_key.as_deref().ok_or(Error::MissingApiKey)
	}

	/// Re-reads the reference directory off the async workers and renders it within the configured
	/// budget.
	async fn reference_context(&self) -> String {
		let dir = self.cfg.references.dir.clone();
		let docs = match tokio::task::spawn_blocking(move || references::load_dir(&dir)).await {
			Ok(docs) => docs,
			Err(err) => {
				tracing::warn!(error = %err, "Reference loading task failed.");

				Vec::new()
			},
		};

		references::format_for_context(&docs, self.cfg.references.max_chars)
	}

	async fn complete(
		&self,
		action: Action,
		api_key: &str,
		profile: &CompletionProfile,
		messages: &[Value],
	) -> Result<Option<String>> {
		let provider = &self.cfg.providers.generation;
		let provider_id = provider.provider_id.as_str();

		tracing::debug!(%action, provider_id, model = %profile.model, "Calling generation API.");

		self.providers.generation.complete(provider, api_key, profile, messages).await.map_err(
			|err| match err {
				angle_providers::Error::Upstream { status, body } => {
					tracing::error!(
						%action,
						provider_id,
						status,
						body = %body,
						"Generation API returned an error."
					);

					Error::Upstream { action, provider_id: provider_id.to_string(), status, body }
				},
				other => {
					tracing::error!(
						%action,
						provider_id,
						error = %other,
						"Generation API call failed."
					);

					Error::Provider {
						action,
						provider_id: provider_id.to_string(),
						message: other.to_string(),
					}
				},
			},
		)
	}
}

/// Rejects absent and blank values with `message`.
pub(crate) fn required<'a>(
	value: Option<&'a str>,
	field: &'static str,
	message: &'static str,
) -> Result<&'a str> {
	value.filter(|value| !value.trim().is_empty()).ok_or(Error::MissingField { field, message })
}
