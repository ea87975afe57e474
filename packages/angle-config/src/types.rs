use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub references: References,
	#[serde(default)]
	pub search: Search,
	pub providers: Providers,
	#[serde(default)]
	pub generation: Generation,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct References {
	/// Directory holding the reference scripts. Relative paths resolve against the working
	/// directory of the process.
	#[serde(default = "default_references_dir")]
	pub dir: PathBuf,
	/// Character budget for the assembled reference block.
	#[serde(default = "default_references_max_chars")]
	pub max_chars: usize,
}
impl Default for References {
	fn default() -> Self {
		Self { dir: default_references_dir(), max_chars: default_references_max_chars() }
	}
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SearchBackend {
	#[default]
	DuckduckgoHtml,
	Serpapi,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Search {
	#[serde(default)]
	pub backend: SearchBackend,
	#[serde(default = "default_search_endpoint")]
	pub endpoint: String,
	#[serde(default = "default_search_user_agent")]
	pub user_agent: String,
	#[serde(default = "default_search_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default = "default_serpapi_endpoint")]
	pub serpapi_endpoint: String,
	/// Only read when `backend = "serpapi"`.
	#[serde(default)]
	pub serpapi_key: Option<String>,
}
impl Default for Search {
	fn default() -> Self {
		Self {
			backend: SearchBackend::default(),
			endpoint: default_search_endpoint(),
			user_agent: default_search_user_agent(),
			timeout_ms: default_search_timeout_ms(),
			serpapi_endpoint: default_serpapi_endpoint(),
			serpapi_key: None,
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct Providers {
	pub generation: GenerationProviderConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GenerationProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub path: String,
	/// Empty or absent falls back to the environment variable named by `api_key_env`.
	#[serde(default)]
	pub api_key: Option<String>,
	#[serde(default = "default_api_key_env")]
	pub api_key_env: String,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Generation {
	#[serde(default = "default_angles_profile")]
	pub angles: CompletionProfile,
	#[serde(default = "default_script_profile")]
	pub script: CompletionProfile,
	#[serde(default = "default_variation_profile")]
	pub variation: CompletionProfile,
}
impl Default for Generation {
	fn default() -> Self {
		Self {
			angles: default_angles_profile(),
			script: default_script_profile(),
			variation: default_variation_profile(),
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct CompletionProfile {
	pub model: String,
	pub temperature: f32,
	pub max_tokens: u32,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_references_dir() -> PathBuf {
	PathBuf::from("scripts")
}

fn default_references_max_chars() -> usize {
	40_000
}

fn default_search_endpoint() -> String {
	"https://html.duckduckgo.com/html/".to_string()
}

fn default_search_user_agent() -> String {
	"Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

fn default_search_timeout_ms() -> u64 {
	10_000
}

fn default_serpapi_endpoint() -> String {
	"https://serpapi.com/search.json".to_string()
}

fn default_api_key_env() -> String {
	"XAI_API_KEY".to_string()
}

fn default_angles_profile() -> CompletionProfile {
	CompletionProfile { model: "grok-2-1212".to_string(), temperature: 0.5, max_tokens: 2_000 }
}

fn default_script_profile() -> CompletionProfile {
	CompletionProfile { model: "grok-2-1212".to_string(), temperature: 0.7, max_tokens: 3_000 }
}

fn default_variation_profile() -> CompletionProfile {
	CompletionProfile {
		model: "grok-4-fast-reasoning".to_string(),
		temperature: 0.8,
		max_tokens: 3_000,
	}
}
