use tracing::debug;

use super::{JioSaavnSource, manager::required};
use crate::{api::models::SearchResponse, common::errors::ApiError, merge::merge};

impl JioSaavnSource {
    pub async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        let query = required(query, "q is required")?;
        debug!("JioSaavn searching: {}", query);

        let raw = self
            .fetcher
            .fetch(&self.locators.search(query))
            .await
            .map_err(ApiError::upstream("Search failed"))?;

        let outcome = self.parser.search_results(&raw);
        debug!(
            "JioSaavn search for '{}' matched {:?} with {} candidates",
            query,
            outcome.matched,
            outcome.records.len()
        );

        let results = merge(outcome.records, self.search_limit);
        Ok(SearchResponse {
            query: query.to_string(),
            count: results.len(),
            results,
        })
    }
}
