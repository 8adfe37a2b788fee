use crate::catalog::domain::{ResolveScope, ResolvedModuleIdentifier, ResolvedPomFile};

/// A resolved module joined with its parsed manifest
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArtifact {
    pub id: ResolvedModuleIdentifier,
    pub pom_file: ResolvedPomFile,
}

impl ResolvedArtifact {
    pub fn new(id: ResolvedModuleIdentifier, pom_file: ResolvedPomFile) -> Self {
        Self { id, pom_file }
    }
}

/// Resolved artifacts grouped by scope, in scope precedence order
///
/// Within a scope, artifacts keep the order in which their manifests were joined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopedArtifacts {
    entries: Vec<(ResolveScope, Vec<ResolvedArtifact>)>,
}

impl ScopedArtifacts {
    pub fn new(entries: Vec<(ResolveScope, Vec<ResolvedArtifact>)>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResolveScope, &[ResolvedArtifact])> {
        self.entries
            .iter()
            .map(|(scope, artifacts)| (scope, artifacts.as_slice()))
    }

    pub fn scopes(&self) -> impl Iterator<Item = &ResolveScope> {
        self.entries.iter().map(|(scope, _)| scope)
    }

    pub fn get(&self, scope: &ResolveScope) -> Option<&[ResolvedArtifact]> {
        self.entries
            .iter()
            .find(|(s, _)| s == scope)
            .map(|(_, artifacts)| artifacts.as_slice())
    }

    /// Number of scopes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of artifacts across all scopes
    pub fn artifact_count(&self) -> usize {
        self.entries.iter().map(|(_, artifacts)| artifacts.len()).sum()
    }
}
