//! Image-to-spec pipeline
//!
//! [`RhccRegistry`] searches a registry once, then resolves each returned
//! image into a spec, one image at a time and in search order. A failing
//! image is logged and skipped; only a failed search aborts the load.

use apb_registry_core::{ImageOutcome, ImageSummary, Result, SkipReason, Spec};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::client::RegistryClient;
use crate::config::RegistryConfig;
use crate::extract::extract_spec;

/// Specs loaded from a registry together with its reported match count
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadedSpecs {
    /// Specs in search-result order
    pub specs: Vec<Spec>,

    /// `num_results` as reported by the registry search, independent of how
    /// many specs were produced
    pub total: usize,
}

/// Per-image outcomes of a load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedOutcomes {
    /// `(image name, outcome)` in search-result order
    pub outcomes: Vec<(String, ImageOutcome)>,

    /// `num_results` as reported by the registry search
    pub total: usize,
}

impl LoadedOutcomes {
    /// Keep the produced specs, dropping skipped images
    pub fn into_specs(self) -> LoadedSpecs {
        LoadedSpecs {
            specs: self
                .outcomes
                .into_iter()
                .filter_map(|(_, outcome)| outcome.into_spec())
                .collect(),
            total: self.total,
        }
    }

    /// Number of skipped images
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.skip_reason().is_some())
            .count()
    }
}

/// A source of APB specs
#[async_trait]
pub trait SpecRegistry: Send + Sync {
    /// Name of this registry instance
    fn name(&self) -> &str;

    /// Load every spec the registry advertises
    async fn load_specs(&self) -> Result<LoadedSpecs>;
}

/// Registry adapter for catalogs serving `/v1/search` and schema 1 manifests
#[derive(Debug, Clone)]
pub struct RhccRegistry {
    config: RegistryConfig,
    client: RegistryClient,
}

impl RhccRegistry {
    /// Create a registry with its own HTTP client
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let client = RegistryClient::new(&config)?;
        Ok(Self { config, client })
    }

    /// Create a registry sharing an existing HTTP client
    pub fn with_http_client(config: RegistryConfig, http: reqwest::Client) -> Self {
        let client = RegistryClient::with_http_client(http, &config.url);
        Self { config, client }
    }

    /// Configuration this registry was built from
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Underlying registry client
    pub fn client(&self) -> &RegistryClient {
        &self.client
    }

    /// Resolve one image into a spec
    pub async fn resolve_image(&self, image: &ImageSummary) -> std::result::Result<Spec, SkipReason> {
        let config = self.client.decode_manifest(&image.name).await?;

        // decode_manifest only returns configs carrying a spec label
        let encoded = config.encoded_spec().ok_or(SkipReason::MissingSpecLabel)?;
        let spec = extract_spec(encoded)?;

        debug!(
            image = %image.name,
            spec = %spec.name,
            apb_version = config.apb_version().unwrap_or("unknown"),
            "Converted image into spec"
        );
        Ok(spec)
    }

    /// Search once and resolve every returned image, keeping skip reasons
    #[instrument(skip(self), fields(registry = %self.config.name))]
    pub async fn load_outcomes(&self) -> Result<LoadedOutcomes> {
        let query = self.config.search_query();
        debug!(url = %self.client.base_url(), query, "Sourcing APB images");

        let search = self.client.search(query).await?;
        debug!("Found {} images in registry", search.num_results);

        let mut outcomes = Vec::with_capacity(search.results.len());
        for image in &search.results {
            let outcome = ImageOutcome::from(self.resolve_image(image).await);

            if let ImageOutcome::Skipped(reason) = &outcome {
                info!(
                    image = %image.name,
                    stage = reason.stage(),
                    "Skipping image [{}]: {}",
                    image.name,
                    reason
                );
            }
            outcomes.push((image.name.clone(), outcome));
        }

        Ok(LoadedOutcomes {
            outcomes,
            total: search.total(),
        })
    }
}

#[async_trait]
impl SpecRegistry for RhccRegistry {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn load_specs(&self) -> Result<LoadedSpecs> {
        let loaded = self.load_outcomes().await?.into_specs();
        debug!(
            registry = %self.config.name,
            produced = loaded.specs.len(),
            total = loaded.total,
            "Loaded specs"
        );
        Ok(loaded)
    }
}
