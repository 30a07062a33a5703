//! Registry endpoint configuration

use serde::{Deserialize, Serialize};

/// Search query used when none is configured: every image whose name ends
/// in `-apb`. The quote characters are part of the query.
pub const DEFAULT_QUERY: &str = "\"*-apb\"";

/// Connection settings for one registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Name of this registry instance, used in logs
    #[serde(default = "default_name")]
    pub name: String,

    /// Base URL; `http://` is assumed when no scheme is given
    #[serde(default)]
    pub url: String,

    /// Search query override
    #[serde(default)]
    pub query: Option<String>,

    /// Per-request timeout in seconds (0 disables the timeout)
    #[serde(default)]
    pub timeout_seconds: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_name() -> String {
    "rhcc".to_string()
}

fn default_user_agent() -> String {
    format!("apb-registry/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            url: String::new(),
            query: None,
            timeout_seconds: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl RegistryConfig {
    /// Create a configuration for the given base URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the registry name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the search query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The query to search with
    pub fn search_query(&self) -> &str {
        self.query
            .as_deref()
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_QUERY)
    }
}
