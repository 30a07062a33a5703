//! Common test utilities and helpers
//!
//! This module provides a mock registry built on `wiremock` and helpers for
//! mounting search and manifest responses on it.

#![allow(dead_code)]

use apb_registry_client::{RegistryConfig, RhccRegistry};
use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub mod fixtures;

/// A mock registry and a pipeline pointed at it
pub struct TestRegistry {
    pub server: MockServer,
}

impl TestRegistry {
    /// Start a new mock registry
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL without scheme, as an operator would usually configure it
    pub fn host(&self) -> String {
        self.server
            .uri()
            .trim_start_matches("http://")
            .to_string()
    }

    /// Pipeline configured for this registry
    pub fn registry(&self) -> RhccRegistry {
        RhccRegistry::new(RegistryConfig::new(self.host()).with_name("test"))
            .expect("Failed to create registry")
    }

    /// Answer the default `"*-apb"` search with `body`, exactly once
    pub async fn mount_search(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("q", "\"*-apb\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Answer the manifest request for `image` with `body`
    ///
    /// Only requests sending `Accept: application/json` match.
    pub async fn mount_manifest(&self, image: &str, body: Value) {
        self.mount_manifest_response(image, ResponseTemplate::new(200).set_body_json(body))
            .await;
    }

    /// Answer the manifest request for `image` with an arbitrary response
    pub async fn mount_manifest_response(&self, image: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/v2/{}/manifests/latest", image)))
            .and(header("Accept", "application/json"))
            .respond_with(response)
            .expect(1)
            .mount(&self.server)
            .await;
    }
}
