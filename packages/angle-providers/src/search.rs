//! Search backends that turn one scoped query into review hits.
//!
//! Backends report transport and status failures as errors; callers decide whether a failed scope
//! is fatal.

pub mod html;
pub mod serpapi;

use std::time::Duration;

use reqwest::Client;

use angle_config::Search;

use crate::Result;

/// Links and snippets read from one result page, per extraction pass.
pub const MAX_MATCHES_PER_PASS: usize = 10;

fn client(cfg: &Search) -> Result<Client> {
	let client = Client::builder()
		.timeout(Duration::from_millis(cfg.timeout_ms))
		.user_agent(cfg.user_agent.as_str())
		.build()?;

	Ok(client)
}
