use license_catalog::prelude::*;
use std::collections::HashMap;

/// Mock LicenseClassifier matching raw names exactly
#[derive(Default, Clone)]
pub struct MockLicenseClassifier {
    pub known: HashMap<String, CanonicalLicense>,
}

impl MockLicenseClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, raw_name: &str, name: &str, url: &str, key: &str) -> Self {
        self.known
            .insert(raw_name.to_string(), CanonicalLicense::new(name, url, key));
        self
    }
}

impl LicenseClassifier for MockLicenseClassifier {
    fn classify(&self, raw_name: Option<&str>) -> LicenseGuess {
        match raw_name.and_then(|name| self.known.get(name)) {
            Some(license) => LicenseGuess::Known(license.clone()),
            None => LicenseGuess::Undetermined {
                fallback_name: "Undetermined".to_string(),
                fallback_url: String::new(),
            },
        }
    }
}
