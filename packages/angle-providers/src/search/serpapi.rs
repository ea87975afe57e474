use serde_json::Value;

use angle_config::Search;
use angle_domain::review::{ReviewSource, SearchHit};

use crate::{Error, Result, search::MAX_MATCHES_PER_PASS};

/// Runs `query` through the SerpAPI Google engine and maps its organic results to hits.
pub async fn search(cfg: &Search, query: &str, source: ReviewSource) -> Result<Vec<SearchHit>> {
	let Some(api_key) = cfg.serpapi_key.as_deref() else {
		return Err(Error::InvalidConfig {
			message: "search.serpapi_key is required for the serpapi backend.".to_string(),
		});
	};
	let res = super::client(cfg)?
		.get(&cfg.serpapi_endpoint)
		.query(&[("engine", "google"), ("q", query), ("api_key", api_key)])
		.send()
		.await?;
	let status = res.status();

	if !status.is_success() {
		let body = res.text().await.unwrap_or_default();

		return Err(Error::Upstream { status: status.as_u16(), body });
	}

	let json: Value = res.json().await?;

	Ok(parse_organic_results(&json, source))
}

/// Results without a title or link are skipped; a missing snippet becomes empty text.
pub fn parse_organic_results(json: &Value, source: ReviewSource) -> Vec<SearchHit> {
	let Some(results) = json.get("organic_results").and_then(|v| v.as_array()) else {
		return Vec::new();
	};

	results
		.iter()
		.take(MAX_MATCHES_PER_PASS)
		.filter_map(|item| {
			let title = item.get("title").and_then(|v| v.as_str())?;
			let url = item.get("link").and_then(|v| v.as_str())?;
			let snippet = item.get("snippet").and_then(|v| v.as_str()).unwrap_or_default();

			Some(SearchHit {
				title: title.to_string(),
				url: url.to_string(),
				snippet: snippet.to_string(),
				source,
			})
		})
		.collect()
}
