//! APB spec document
//!
//! The spec is the YAML document an APB image carries (base64-encoded) in its
//! `com.redhat.apb.spec` label. Every field is optional in the document and
//! falls back to its default; unknown keys are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Type alias for free-form spec metadata
pub type SpecMetadata = BTreeMap<String, Value>;

/// A playbook bundle specification
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spec {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Bundle name, e.g. `mediawiki123-apb`
    #[serde(default)]
    pub name: String,

    /// Image the bundle runs from
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Catalog tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Whether the bundle supports bind/unbind
    #[serde(default)]
    pub bindable: bool,

    /// Async provisioning mode (`optional`, `required`, `unsupported`)
    #[serde(rename = "async", default, skip_serializing_if = "String::is_empty")]
    pub async_mode: String,

    /// Display metadata such as `displayName` or `imageUrl`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: SpecMetadata,

    /// Provisioning parameters, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDescriptor>,
}

/// A single provisioning parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Parameter type (`string`, `int`, `bool`, `enum`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub param_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<u32>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,

    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,

    #[serde(default)]
    pub required: bool,
}

impl Spec {
    /// Create a spec with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Look up a parameter by name
    pub fn parameter(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.image.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.image)
        }
    }
}
