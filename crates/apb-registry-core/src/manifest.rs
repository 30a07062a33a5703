//! Legacy (schema 1) image manifest types
//!
//! A schema 1 manifest embeds the image configuration as a JSON document
//! serialized into a string under `history[].v1Compatibility`. Decoding it
//! takes two independent passes: [`ManifestHistory`] for the outer body and
//! [`V1Compatibility`] for the string held by the first history entry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label holding the base64-encoded APB spec document
pub const SPEC_LABEL: &str = "com.redhat.apb.spec";

/// Label holding the APB spec version
pub const VERSION_LABEL: &str = "com.redhat.apb.version";

/// History key holding the stringified v1 image configuration
pub const V1_COMPATIBILITY_KEY: &str = "v1Compatibility";

/// One entry of a schema 1 manifest history
pub type ManifestHistoryEntry = HashMap<String, String>;

/// Outer manifest body; only `history` is read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestHistory {
    /// `None` when the registry served a manifest without history, which is
    /// the case for every schema 2 / OCI manifest.
    #[serde(default)]
    pub history: Option<Vec<ManifestHistoryEntry>>,
}

impl ManifestHistory {
    /// The `v1Compatibility` string of the first history entry
    ///
    /// Returns `None` if there is no history or it is empty. A first entry
    /// without the key yields an empty string.
    pub fn first_v1_compatibility(&self) -> Option<&str> {
        let first = self.history.as_ref()?.first()?;
        Some(
            first
                .get(V1_COMPATIBILITY_KEY)
                .map(String::as_str)
                .unwrap_or_default(),
        )
    }
}

/// Decoded `v1Compatibility` document; only `config` is read
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V1Compatibility {
    #[serde(default)]
    pub config: Option<ImageConfig>,
}

/// Container configuration recovered from a legacy manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(rename = "Labels", default)]
    pub labels: Option<ApbLabels>,
}

/// The APB labels of an image; all other labels are ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApbLabels {
    #[serde(rename = "com.redhat.apb.spec", default)]
    pub spec: Option<String>,

    #[serde(rename = "com.redhat.apb.version", default)]
    pub version: Option<String>,
}

impl ImageConfig {
    /// Base64-encoded spec label, if present and non-empty
    pub fn encoded_spec(&self) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.spec.as_deref())
            .filter(|spec| !spec.is_empty())
    }

    /// Value of the APB version label, if present and non-empty
    pub fn apb_version(&self) -> Option<&str> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.version.as_deref())
            .filter(|version| !version.is_empty())
    }
}
