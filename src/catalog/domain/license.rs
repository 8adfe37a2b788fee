use crate::catalog::domain::{LicenseKey, PlainLicense};
use std::collections::BTreeMap;

/// A license the classifier identified with confidence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalLicense {
    pub name: String,
    pub url: String,
    pub key: String,
}

impl CanonicalLicense {
    pub fn new(name: impl Into<String>, url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            key: key.into(),
        }
    }
}

/// Outcome of classifying a raw license name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseGuess {
    Known(CanonicalLicense),
    /// No confident match. The fallbacks fill in whatever the seed lacks.
    Undetermined {
        fallback_name: String,
        fallback_url: String,
    },
}

/// Licenses captured while assembling one catalog
///
/// Deduplicated by key; the first record stored under a key wins.
/// One capture belongs to exactly one assembly pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LicenseCapture {
    licenses: BTreeMap<String, PlainLicense>,
}

impl LicenseCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the license unless its key is already known and returns its key
    pub fn capture(&mut self, license: PlainLicense) -> LicenseKey {
        let key = LicenseKey::new(license.key.clone());
        self.licenses.entry(license.key.clone()).or_insert(license);
        key
    }

    pub fn get(&self, key: &str) -> Option<&PlainLicense> {
        self.licenses.get(key)
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }

    /// Captured licenses sorted by name, ties broken by key
    pub fn sorted_by_name(&self) -> Vec<PlainLicense> {
        let mut licenses: Vec<PlainLicense> = self.licenses.values().cloned().collect();
        licenses.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.key.cmp(&b.key)));
        licenses
    }
}
