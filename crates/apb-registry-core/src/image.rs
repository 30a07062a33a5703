//! Registry search result types
//!
//! These mirror the JSON returned by a registry's `/v1/search` endpoint.

use serde::{Deserialize, Serialize};

/// One row of a registry search response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSummary {
    /// Repository name, e.g. `openshift3/mediawiki-apb`
    #[serde(default)]
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Whether the image is flagged as official
    #[serde(default)]
    pub is_official: bool,

    /// Whether the image is flagged as trusted
    #[serde(default)]
    pub is_trusted: bool,

    #[serde(default)]
    pub should_filter: bool,

    /// Popularity count
    #[serde(default)]
    pub star_count: i64,
}

impl ImageSummary {
    /// Create a summary carrying only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Response body of a registry search
///
/// `num_results` is the registry's reported match count and may be larger
/// than `results.len()`; the two are never assumed to agree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matches reported by the registry
    #[serde(default)]
    pub num_results: i64,

    /// Query echoed back by the registry
    #[serde(default)]
    pub query: String,

    /// Returned image summaries, in registry order
    #[serde(default)]
    pub results: Vec<ImageSummary>,
}

impl SearchResult {
    /// Reported match count, with negative counts read as zero
    pub fn total(&self) -> usize {
        usize::try_from(self.num_results).unwrap_or(0)
    }

    /// Names of the returned images, in order
    pub fn image_names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|image| image.name.as_str())
    }
}
