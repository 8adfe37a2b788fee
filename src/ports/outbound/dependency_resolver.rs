use crate::catalog::domain::{ComponentRef, ResolvedModuleIdentifier};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// A dependency configuration known to the host build
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConfigurationHandle {
    pub name: String,
}

impl ConfigurationHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One module a configuration resolved to, with its declared artifact type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub id: ResolvedModuleIdentifier,
    pub artifact_type: String,
}

impl ResolvedDependency {
    pub fn new(id: ResolvedModuleIdentifier, artifact_type: impl Into<String>) -> Self {
        Self {
            id,
            artifact_type: artifact_type.into(),
        }
    }
}

/// A manifest the resolver materialized on local disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedManifest {
    pub component: ComponentRef,
    /// Resolver display name of the owning component, usually `group:name:version`
    pub display_name: String,
    pub path: PathBuf,
}

impl FetchedManifest {
    pub fn new(
        component: ComponentRef,
        display_name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            component,
            display_name: display_name.into(),
            path: path.into(),
        }
    }
}

/// DependencyResolver port for the host build's dependency graph
///
/// This port abstracts the build system that knows which configurations
/// exist, what they resolve to, and where module manifests live.
///
/// # Async Support
/// Implementations must be `Send + Sync`; the batched manifest fetch may
/// run its lookups concurrently.
#[async_trait]
pub trait DependencyResolver: Send + Sync {
    /// Returns the configurations among `candidate_names` that exist
    ///
    /// Unknown names are skipped, not reported as errors.
    async fn find_configurations(
        &self,
        candidate_names: &[String],
    ) -> Result<Vec<ConfigurationHandle>>;

    /// Resolves one configuration to its transitive modules
    ///
    /// # Errors
    /// Returns `CatalogError::ResolutionFailure` if the configuration cannot be resolved
    async fn resolve_modules(
        &self,
        configuration: &ConfigurationHandle,
    ) -> Result<Vec<ResolvedDependency>>;

    /// Locates the manifests of `components` in one batch
    ///
    /// Components without a manifest are absent from the result; the result
    /// may also carry manifests of components that were not requested.
    async fn fetch_manifests(&self, components: &[ComponentRef]) -> Result<Vec<FetchedManifest>>;
}
