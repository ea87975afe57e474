use regex::Regex;

use angle_config::Search;
use angle_domain::review::{ReviewSource, SearchHit};

use crate::{Error, Result, search::MAX_MATCHES_PER_PASS};

const LINK_PATTERN: &str = r#"<a[^>]*class="result__a"[^>]*href="([^"]*)"[^>]*>([^<]*)</a>"#;
const SNIPPET_PATTERN: &str = r#"<a[^>]*class="result__snippet"[^>]*>([^<]*)</a>"#;

/// Fetches the HTML result page for `query` and extracts hits tagged with `source`.
pub async fn search(cfg: &Search, query: &str, source: ReviewSource) -> Result<Vec<SearchHit>> {
	let res = super::client(cfg)?.get(&cfg.endpoint).query(&[("q", query)]).send().await?;
	let status = res.status();

	if !status.is_success() {
		return Err(Error::Upstream { status: status.as_u16(), body: String::new() });
	}

	let html = res.text().await?;

	Ok(extract_hits(&html, source))
}

/// Scans raw result markup for links and snippets and pairs them by position.
///
/// Each pass keeps its first [`MAX_MATCHES_PER_PASS`] matches. The Nth link is paired with the
/// Nth snippet and unmatched leftovers are dropped. Markup that matches neither pattern yields no
/// hits.
pub fn extract_hits(html: &str, source: ReviewSource) -> Vec<SearchHit> {
	let (Ok(link_re), Ok(snippet_re)) = (Regex::new(LINK_PATTERN), Regex::new(SNIPPET_PATTERN))
	else {
		return Vec::new();
	};
	let links: Vec<(&str, &str)> = link_re
		.captures_iter(html)
		.take(MAX_MATCHES_PER_PASS)
		.filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
		.collect();
	let snippets: Vec<&str> = snippet_re
		.captures_iter(html)
		.take(MAX_MATCHES_PER_PASS)
		.filter_map(|caps| caps.get(1).map(|m| m.as_str()))
		.collect();

	links
		.into_iter()
		.zip(snippets)
		.map(|((url, title), snippet)| SearchHit {
			title: title.to_string(),
			url: url.to_string(),
			snippet: snippet.to_string(),
			source,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn result_block(index: usize) -> String {
		format!(
			r#"<div class="result results_links">
  <h2 class="result__title">
    <a rel="nofollow" class="result__a" href="https://www.reddit.com/r/supplements/{index}">Thread {index}</a>
  </h2>
  <a class="result__snippet" href="https://www.reddit.com/r/supplements/{index}">Snippet {index}</a>
</div>"#
		)
	}

	#[test]
	fn pairs_links_and_snippets_in_document_order() {
		let html = format!("<html><body>{}{}</body></html>", result_block(0), result_block(1));
		let hits = extract_hits(&html, ReviewSource::Forum);

		assert_eq!(hits.len(), 2);
		assert_eq!(hits[0].title, "Thread 0");
		assert_eq!(hits[0].url, "https://www.reddit.com/r/supplements/0");
		assert_eq!(hits[0].snippet, "Snippet 0");
		assert_eq!(hits[1].title, "Thread 1");
		assert!(hits.iter().all(|hit| hit.source == ReviewSource::Forum));
	}

	#[test]
	fn each_pass_is_capped_at_ten() {
		let html: String = (0..15).map(result_block).collect();
		let hits = extract_hits(&html, ReviewSource::Retail);

		assert_eq!(hits.len(), MAX_MATCHES_PER_PASS);
		assert_eq!(hits[9].title, "Thread 9");
	}

	#[test]
	fn unmatched_leftovers_are_dropped() {
		let html = format!(
			"{}{}<a class=\"result__a\" href=\"https://example.com/x\">Orphan</a>",
			result_block(0),
			result_block(1)
		);
		let hits = extract_hits(&html, ReviewSource::Forum);

		assert_eq!(hits.len(), 2);
		assert!(hits.iter().all(|hit| hit.title != "Orphan"));
	}

	#[test]
	fn malformed_markup_yields_nothing() {
		for html in [
			"",
			"not html at all",
			"<a class=\"result__a\" href=\"unterminated",
			"<div class=\"result\"><a class=\"result__snippet\">only a snippet</a></div>",
			"<<<>>><a><b></a>",
		] {
			assert!(extract_hits(html, ReviewSource::Forum).is_empty(), "input {html:?}");
		}
	}

	#[test]
	fn snippets_with_nested_tags_are_skipped() {
		let html = r#"<a class="result__a" href="https://a.example">A</a>
<a class="result__snippet" href="https://a.example">Great <b>product</b></a>"#;

		assert!(extract_hits(html, ReviewSource::Retail).is_empty());
	}
}
