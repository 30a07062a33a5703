//! Per-image resolution outcomes
//!
//! Resolving an image into a spec never fails the batch. Each image ends in
//! an [`ImageOutcome`]: either a produced [`Spec`] or a [`SkipReason`] that
//! names the failing stage and its cause.

use thiserror::Error;

use crate::spec::Spec;

/// Why an image did not yield a spec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The manifest request could not be formed
    #[error("could not form manifest request: {0}")]
    InvalidRequest(String),

    /// The manifest request could not be sent or its body read
    #[error("could not send manifest request: {0}")]
    Transport(String),

    /// The manifest body was not a JSON object with a string-map history
    #[error("error grabbing JSON body from manifest response: {0}")]
    ManifestBody(String),

    /// No schema 1 history in the manifest
    #[error("v1 schema manifest history does not exist in registry")]
    MissingHistory,

    /// The first history entry's `v1Compatibility` string is not JSON
    #[error("error unmarshalling v1Compatibility JSON: {0}")]
    V1Compatibility(String),

    /// The `v1Compatibility` document has no `config`
    #[error("did not find v1 manifest config in image history")]
    MissingConfig,

    /// No (or empty) spec label; the image is not an APB
    #[error("no encoded spec label, assuming image is not an APB")]
    MissingSpecLabel,

    /// The spec label is not valid standard base64
    #[error("could not decode spec label from base64: {0}")]
    Base64(String),

    /// The decoded label is not a valid spec document
    #[error("could not load decoded spec YAML: {0}")]
    SpecDocument(String),
}

impl SkipReason {
    /// Short stage name used as a structured log field
    pub fn stage(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) | Self::Transport(_) => "fetch_manifest",
            Self::ManifestBody(_) | Self::MissingHistory => "decode_manifest",
            Self::V1Compatibility(_) | Self::MissingConfig => "decode_v1_compatibility",
            Self::MissingSpecLabel => "read_labels",
            Self::Base64(_) => "decode_label",
            Self::SpecDocument(_) => "parse_spec",
        }
    }
}

/// Result of resolving a single image
#[derive(Debug, Clone, PartialEq)]
pub enum ImageOutcome {
    /// The image carried a valid spec
    Produced(Spec),
    /// The image was skipped
    Skipped(SkipReason),
}

impl ImageOutcome {
    /// The produced spec, if any
    pub fn spec(&self) -> Option<&Spec> {
        match self {
            Self::Produced(spec) => Some(spec),
            Self::Skipped(_) => None,
        }
    }

    /// Consume the outcome, keeping only a produced spec
    pub fn into_spec(self) -> Option<Spec> {
        match self {
            Self::Produced(spec) => Some(spec),
            Self::Skipped(_) => None,
        }
    }

    /// The skip reason, if any
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Produced(_) => None,
            Self::Skipped(reason) => Some(reason),
        }
    }
}

impl From<std::result::Result<Spec, SkipReason>> for ImageOutcome {
    fn from(result: std::result::Result<Spec, SkipReason>) -> Self {
        match result {
            Ok(spec) => Self::Produced(spec),
            Err(reason) => Self::Skipped(reason),
        }
    }
}
