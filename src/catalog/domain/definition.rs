use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Reference from an artifact definition into the license catalog
///
/// Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseKey {
    pub value: String,
}

impl LicenseKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// A canonical or synthesized license record of the license catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainLicense {
    pub name: String,
    pub url: String,
    pub key: String,
}

impl PlainLicense {
    pub fn new(name: impl Into<String>, url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            key: key.into(),
        }
    }
}

/// Per-dependency record emitted into the artifact catalog
///
/// `key` is `group:name` in the flat catalog and just `name` in the
/// grouped ones. Natural order is `(display_name, key)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDefinition {
    pub key: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub copyright_holders: Vec<String>,
    #[serde(default)]
    pub licenses: Vec<LicenseKey>,
}

impl ArtifactDefinition {
    /// Same definition under another key
    pub fn with_key(self, key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..self
        }
    }
}

impl Ord for ArtifactDefinition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.display_name
            .cmp(&other.display_name)
            .then_with(|| self.key.cmp(&other.key))
            .then_with(|| self.url.cmp(&other.url))
            .then_with(|| self.copyright_holders.cmp(&other.copyright_holders))
            .then_with(|| self.licenses.cmp(&other.licenses))
    }
}

impl PartialOrd for ArtifactDefinition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
