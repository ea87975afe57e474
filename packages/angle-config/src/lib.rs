mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	CompletionProfile, Config, Generation, GenerationProviderConfig, Providers, References, Search,
	SearchBackend, Service,
};

use std::{env, fs, net::SocketAddr, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	resolve_api_key(&mut cfg);

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::Validation {
			message: "service.http_bind must be a socket address such as 127.0.0.1:3000."
				.to_string(),
		});
	}
	if cfg.references.max_chars == 0 {
		return Err(Error::Validation {
			message: "references.max_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.search.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "search.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.search.backend == SearchBackend::Serpapi && cfg.search.serpapi_key.is_none() {
		return Err(Error::Validation {
			message: "search.serpapi_key must be non-empty when search.backend is serpapi."
				.to_string(),
		});
	}

	let provider = &cfg.providers.generation;

	if provider.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.generation.api_base must be non-empty.".to_string(),
		});
	}
	if provider.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.generation.timeout_ms must be greater than zero.".to_string(),
		});
	}

	for (key, value) in &provider.default_headers {
		if !value.is_string() {
			return Err(Error::Validation {
				message: format!("providers.generation.default_headers.{key} must be a string."),
			});
		}
	}

	for (label, profile) in [
		("generation.angles", &cfg.generation.angles),
		("generation.script", &cfg.generation.script),
		("generation.variation", &cfg.generation.variation),
	] {
		if profile.model.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label}.model must be non-empty.") });
		}
		if !profile.temperature.is_finite() {
			return Err(Error::Validation {
				message: format!("{label}.temperature must be a finite number."),
			});
		}
		if !(0.0..=2.0).contains(&profile.temperature) {
			return Err(Error::Validation {
				message: format!("{label}.temperature must be in the range 0.0-2.0."),
			});
		}
		if profile.max_tokens == 0 {
			return Err(Error::Validation {
				message: format!("{label}.max_tokens must be greater than zero."),
			});
		}
	}

	Ok(())
}

/// Fills `providers.generation.api_key` from the environment when the file leaves it empty.
///
/// A key that is still missing afterwards is not a load error; every generation request reports it
/// instead.
pub fn resolve_api_key(cfg: &mut Config) {
	let provider = &mut cfg.providers.generation;

	if provider.api_key.is_some() {
		return;
	}

	provider.api_key =
		env::var(&provider.api_key_env).ok().filter(|key| !key.trim().is_empty());
}

fn normalize(cfg: &mut Config) {
	let provider = &mut cfg.providers.generation;

	if provider.api_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		provider.api_key = None;
	}
	if provider.api_base.ends_with('/') && provider.path.starts_with('/') {
		provider.api_base.truncate(provider.api_base.trim_end_matches('/').len());
	}
	if cfg.search.serpapi_key.as_deref().map(|key| key.trim().is_empty()).unwrap_or(false) {
		cfg.search.serpapi_key = None;
	}
}
