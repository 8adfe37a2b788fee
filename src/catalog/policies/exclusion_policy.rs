use crate::shared::error::CatalogError;
use crate::shared::Result;
use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Artifact types that contribute to the catalog
pub const ACCEPTED_ARTIFACT_TYPES: [&str; 2] = ["aar", "jar"];

/// Maximum number of exclusion entries
const MAX_EXCLUSIONS: usize = 1024;

/// ExclusionPolicy decides which resolved dependencies enter the catalog
///
/// Rules, applied before deduplication:
/// 1. only archive types in `ACCEPTED_ARTIFACT_TYPES` are kept
/// 2. `exclude_groups` removes every module of a group
/// 3. `exclude_artifacts` removes exact `group:name` modules
#[derive(Debug, Default)]
pub struct ExclusionPolicy {
    exclude_groups: BTreeSet<String>,
    exclude_artifacts: BTreeSet<String>,
    matched: Mutex<BTreeSet<String>>,
}

impl ExclusionPolicy {
    /// # Errors
    /// - Too many entries
    /// - An artifact entry that is not of the form `group:name`
    pub fn new<G, A>(exclude_groups: G, exclude_artifacts: A) -> Result<Self>
    where
        G: IntoIterator<Item = String>,
        A: IntoIterator<Item = String>,
    {
        let exclude_groups: BTreeSet<String> = exclude_groups.into_iter().collect();
        let exclude_artifacts: BTreeSet<String> = exclude_artifacts.into_iter().collect();

        if exclude_groups.len() + exclude_artifacts.len() > MAX_EXCLUSIONS {
            return Err(CatalogError::Validation {
                message: format!(
                    "Too many exclusions: {} (maximum: {})",
                    exclude_groups.len() + exclude_artifacts.len(),
                    MAX_EXCLUSIONS
                ),
            }
            .into());
        }

        for group in &exclude_groups {
            if group.trim().is_empty() {
                return Err(CatalogError::Validation {
                    message: "Excluded group cannot be blank".to_string(),
                }
                .into());
            }
        }

        for artifact in &exclude_artifacts {
            validate_artifact_notation(artifact)?;
        }

        Ok(Self {
            exclude_groups,
            exclude_artifacts,
            matched: Mutex::new(BTreeSet::new()),
        })
    }

    /// Whether a dependency of the given coordinates and type is kept
    pub fn admits(&self, group: &str, name: &str, artifact_type: &str) -> bool {
        if !ACCEPTED_ARTIFACT_TYPES.contains(&artifact_type) {
            return false;
        }

        if self.exclude_groups.contains(group) {
            self.matched().insert(group.to_string());
            return false;
        }

        let notation = format!("{}:{}", group, name);
        if self.exclude_artifacts.contains(&notation) {
            self.matched().insert(notation);
            return false;
        }

        true
    }

    /// Exclusions that did not match any dependency so far
    pub fn unmatched_exclusions(&self) -> Vec<String> {
        let matched = self.matched();
        self.exclude_groups
            .iter()
            .chain(self.exclude_artifacts.iter())
            .filter(|entry| !matched.contains(*entry))
            .cloned()
            .collect()
    }

    fn matched(&self) -> MutexGuard<'_, BTreeSet<String>> {
        self.matched.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn validate_artifact_notation(artifact: &str) -> Result<()> {
    let mut parts = artifact.split(':');
    let valid = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(group), Some(name), None) if !group.trim().is_empty() && !name.trim().is_empty()
    );

    if !valid {
        return Err(CatalogError::Validation {
            message: format!(
                "Excluded artifact '{}' must be written as group:name",
                artifact
            ),
        }
        .into());
    }

    Ok(())
}
