//! Registry image search
//!
//! Queries `<base>/v1/search?q=<query>`. The query is passed through as-is,
//! so callers must quote wildcard patterns themselves (`"\"*-apb\""`).

use apb_registry_core::{Result, SearchResult};
use tracing::{debug, instrument};

use crate::client::RegistryClient;

/// Path and query of a search request
pub fn search_path(query: &str) -> String {
    format!("/v1/search?q={}", query)
}

impl RegistryClient {
    /// Run a single search; no pagination is performed
    #[instrument(skip(self), fields(base_url = %self.base_url()))]
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        debug!("Searching registry for images");

        let result: SearchResult = self.get_json(&search_path(query)).await?;

        debug!(
            num_results = result.num_results,
            returned = result.results.len(),
            "Decoded search response"
        );
        Ok(result)
    }
}
