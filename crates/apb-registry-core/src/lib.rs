//! Core domain models and types for the APB Registry
//!
//! This crate contains the data structures exchanged with a container
//! registry (search results, legacy manifests) and the APB spec documents
//! recovered from image labels.

pub mod error;
pub mod image;
pub mod manifest;
pub mod outcome;
pub mod spec;

// Re-exports for convenience
pub use error::{RegistryError, Result};
pub use image::{ImageSummary, SearchResult};
pub use manifest::{
    ApbLabels, ImageConfig, ManifestHistory, ManifestHistoryEntry, V1Compatibility, SPEC_LABEL,
    V1_COMPATIBILITY_KEY, VERSION_LABEL,
};
pub use outcome::{ImageOutcome, SkipReason};
pub use spec::{ParameterDescriptor, Spec, SpecMetadata};
