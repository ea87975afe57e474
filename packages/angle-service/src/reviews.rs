use angle_domain::review::{MAX_COMBINED_HITS, ReviewSource, SearchHit};

use crate::AngleService;

impl AngleService {
	/// Searches both review scopes concurrently and returns at most [`MAX_COMBINED_HITS`] hits,
	/// forum hits first.
	///
	/// A failing scope contributes nothing; this never fails.
	pub async fn gather_reviews(&self, product_name: &str, brand_name: &str) -> Vec<SearchHit> {
		let forum_query = ReviewSource::Forum.query(product_name, brand_name);
		let retail_query = ReviewSource::Retail.query(product_name, brand_name);
		let (forum, retail) = tokio::join!(
			self.search_scope(ReviewSource::Forum, &forum_query),
			self.search_scope(ReviewSource::Retail, &retail_query),
		);
		let mut hits = forum;

		hits.extend(retail);
		hits.truncate(MAX_COMBINED_HITS);

		tracing::debug!(count = hits.len(), "Gathered review hits.");

		hits
	}

	async fn search_scope(&self, source: ReviewSource, query: &str) -> Vec<SearchHit> {
		match self.providers.search.search(&self.cfg.search, query, source).await {
			Ok(hits) => hits.into_iter().map(|hit| SearchHit { source, ..hit }).collect(),
			Err(err) => {
				tracing::warn!(source = source.as_str(), error = %err, "Review search failed.");

				Vec::new()
			},
		}
	}
}
