//! Registry client for APB images
//!
//! This crate discovers Automation Playbook Bundle images in a container
//! registry and turns each into a [`Spec`](apb_registry_core::Spec).
//!
//! # Architecture
//!
//! - **RegistryClient**: GET requests against a normalized base URL
//! - **search**: `/v1/search` query into a `SearchResult`
//! - **manifest**: schema 1 manifest into an `ImageConfig`, in two JSON passes
//! - **extract**: base64 spec label into a `Spec`
//! - **RhccRegistry**: the pipeline tying these together
//!
//! # Example
//!
//! ```rust,no_run
//! use apb_registry_client::{RegistryConfig, RhccRegistry, SpecRegistry};
//!
//! # async fn example() -> apb_registry_core::Result<()> {
//! let registry = RhccRegistry::new(RegistryConfig::new("registry.access.redhat.com"))?;
//! let loaded = registry.load_specs().await?;
//! println!("{} of {} images are APBs", loaded.specs.len(), loaded.total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod extract;
pub mod manifest;
pub mod pipeline;
pub mod search;

// Re-export main types for convenience
pub use client::{build_http_client, normalize_url, RegistryClient};
pub use config::{RegistryConfig, DEFAULT_QUERY};
pub use extract::{encode_spec, extract_spec};
pub use manifest::decode_manifest_body;
pub use pipeline::{LoadedOutcomes, LoadedSpecs, RhccRegistry, SpecRegistry};
