//! Legacy manifest decoding
//!
//! Fetches `<base>/v2/<image>/manifests/latest` and recovers the image
//! configuration from the schema 1 `v1Compatibility` history entry. The outer
//! body and the embedded string are decoded in two separate passes, each with
//! its own failure reason.

use apb_registry_core::{ImageConfig, ManifestHistory, RegistryError, SkipReason, V1Compatibility};
use tracing::debug;

use crate::client::RegistryClient;

/// Path of the `latest` manifest of an image
pub fn manifest_path(image_name: &str) -> String {
    format!("/v2/{}/manifests/latest", image_name)
}

/// First pass: the outer manifest body, down to the `v1Compatibility` string
pub fn decode_history(body: &[u8]) -> Result<String, SkipReason> {
    let manifest: ManifestHistory =
        serde_json::from_slice(body).map_err(|e| SkipReason::ManifestBody(e.to_string()))?;

    manifest
        .first_v1_compatibility()
        .map(str::to_owned)
        .ok_or(SkipReason::MissingHistory)
}

/// Second pass: the stringified v1 configuration, down to the image config
pub fn decode_v1_compatibility(v1_compatibility: &str) -> Result<ImageConfig, SkipReason> {
    let compat: V1Compatibility = serde_json::from_str(v1_compatibility)
        .map_err(|e| SkipReason::V1Compatibility(e.to_string()))?;

    compat.config.ok_or(SkipReason::MissingConfig)
}

/// Decode a full manifest body into an image config carrying a spec label
pub fn decode_manifest_body(body: &[u8]) -> Result<ImageConfig, SkipReason> {
    let v1_compatibility = decode_history(body)?;
    let config = decode_v1_compatibility(&v1_compatibility)?;

    if config.encoded_spec().is_none() {
        return Err(SkipReason::MissingSpecLabel);
    }
    Ok(config)
}

impl RegistryClient {
    /// Fetch an image's manifest and recover its APB-labelled config
    pub async fn decode_manifest(&self, image_name: &str) -> Result<ImageConfig, SkipReason> {
        let body = self
            .get_bytes(&manifest_path(image_name), true)
            .await
            .map_err(|e| match e {
                RegistryError::InvalidUrl(msg) => SkipReason::InvalidRequest(msg),
                other => SkipReason::Transport(other.to_string()),
            })?;

        debug!(image = image_name, "Fetched manifest");
        decode_manifest_body(&body)
    }
}
