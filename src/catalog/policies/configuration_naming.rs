use crate::catalog::domain::ResolveScope;
use std::collections::BTreeSet;

/// Configuration names searched when the caller configures none
pub const DEFAULT_CONFIGURATION_NAMES: [&str; 6] = [
    "compileOnly",
    "implementation",
    "api",
    "compile",
    "annotationProcessor",
    "kapt",
];

/// ConfigurationNaming policy mapping a scope to candidate configuration names
///
/// Names are joined camel-case: the prefix is decapitalized and the suffix
/// capitalized, e.g. `Release` + `implementation` → `releaseImplementation`.
///
/// - variant `release`: `implementation`, `releaseImplementation`, ...
/// - addition `test` under variant `release`: `testImplementation`,
///   `releaseTestImplementation`, ...
#[derive(Debug, Clone)]
pub struct ConfigurationNaming {
    configuration_names: BTreeSet<String>,
}

impl ConfigurationNaming {
    pub fn new<I>(configuration_names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            configuration_names: configuration_names.into_iter().collect(),
        }
    }

    /// Candidate configuration names for `scope`, sorted and without duplicates
    ///
    /// `Unknown` has no configurations.
    pub fn candidates(&self, variant: &ResolveScope, scope: &ResolveScope) -> Vec<String> {
        let suffixes: Vec<String> = match scope {
            ResolveScope::Variant(_) => self.configuration_names.iter().cloned().collect(),
            ResolveScope::Addition(addition) => self
                .configuration_names
                .iter()
                .map(|name| join(addition, name))
                .collect(),
            ResolveScope::Unknown => return Vec::new(),
        };

        let prefixed: Vec<String> = suffixes
            .iter()
            .map(|suffix| join(variant.name(), suffix))
            .collect();

        suffixes
            .into_iter()
            .chain(prefixed)
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }
}

impl Default for ConfigurationNaming {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIGURATION_NAMES.iter().map(|s| s.to_string()))
    }
}

fn join(prefix: &str, suffix: &str) -> String {
    format!("{}{}", decapitalize(prefix), capitalize(suffix))
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn decapitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
