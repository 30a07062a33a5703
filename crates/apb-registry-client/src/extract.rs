//! Spec extraction from image labels

use apb_registry_core::{SkipReason, Spec};
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, PAD};
use base64::Engine;

/// Standard alphabet with padding, tolerating non-zero trailing bits
const LABEL_ENGINE: GeneralPurpose =
    GeneralPurpose::new(&alphabet::STANDARD, PAD.with_decode_allow_trailing_bits(true));

/// Decode a base64 spec label into a [`Spec`]
///
/// The label must use the standard base64 alphabet with padding. Line breaks
/// (`\r`, `\n`) are ignored, so labels written by line-wrapping encoders
/// decode unchanged. The decoded bytes are parsed as a YAML spec document.
pub fn extract_spec(encoded_label: &str) -> Result<Spec, SkipReason> {
    let unwrapped: String = encoded_label
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();

    let document = LABEL_ENGINE
        .decode(unwrapped)
        .map_err(|e| SkipReason::Base64(e.to_string()))?;

    serde_yaml::from_slice(&document).map_err(|e| SkipReason::SpecDocument(e.to_string()))
}

/// Encode a spec as a label value; the inverse of [`extract_spec`]
pub fn encode_spec(spec: &Spec) -> Result<String, serde_yaml::Error> {
    let document = serde_yaml::to_string(spec)?;
    Ok(LABEL_ENGINE.encode(document))
}
