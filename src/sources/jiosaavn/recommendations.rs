use tracing::debug;

use super::JioSaavnSource;
use crate::{api::models::RecommendResponse, common::errors::ApiError, merge::merge};

impl JioSaavnSource {
    /// Trending songs. Always fetched fresh; the listing changes too often to
    /// serve from cache.
    pub async fn recommendations(&self) -> Result<RecommendResponse, ApiError> {
        let raw = self
            .fetcher
            .fetch_uncached(&self.locators.trending())
            .await
            .map_err(ApiError::upstream("Recommend failed"))?;

        let outcome = self.parser.trending(&raw);
        let results = merge(outcome.records, self.recommendations_limit);
        debug!("JioSaavn trending produced {} recommendations", results.len());

        Ok(RecommendResponse {
            count: results.len(),
            results,
        })
    }
}
