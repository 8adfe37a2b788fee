//! license-catalog - license catalogs from resolved dependency graphs
//!
//! This library builds a canonical, deduplicated catalog of third-party
//! licenses from the dependency configurations of a project, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`catalog`): value types, policies and pure services
//! - **Application Layer** (`application`): use cases, DTOs and factories
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types, result alias and file safety checks
//!
//! # Example
//!
//! ```no_run
//! use license_catalog::prelude::*;
//! use std::path::Path;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let resolver = SnapshotDependencyResolver::load(Path::new("resolution.json"), None)?;
//! let use_case = GenerateCatalogUseCase::new(
//!     resolver,
//!     FileSystemReader::new(),
//!     KnownLicenseClassifier::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = CatalogRequest::new(ResolveScope::variant("release")?, vec![]);
//! let response = use_case.execute(request).await?;
//! if let Some(text) = response.artifacts_text {
//!     println!("{}", text);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::classifier::KnownLicenseClassifier;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formats::{JsonCatalogFormat, YamlCatalogFormat};
    pub use crate::adapters::outbound::resolver::SnapshotDependencyResolver;
    pub use crate::application::dto::{CatalogRequest, CatalogResponse, OutputFormat};
    pub use crate::application::factories::FormatFactory;
    pub use crate::application::use_cases::{
        ArtifactAssembler, AssembledCatalog, CatalogDisassembler, GenerateCatalogUseCase,
        ScopeResolver,
    };
    pub use crate::catalog::domain::{
        ArtifactDefinition, AssemblyStyle, CanonicalLicense, Catalog, ComponentRef,
        LicenseCapture, LicenseGuess, LicenseKey, LicenseSeed, PlainLicense, ResolveScope,
        ResolvedArtifact, ResolvedModuleIdentifier, ResolvedPomFile, ScopedArtifacts,
        VersionString,
    };
    pub use crate::catalog::policies::{ConfigurationNaming, ExclusionPolicy};
    pub use crate::catalog::services::{ModuleDeduplicator, PomParser};
    pub use crate::ports::outbound::{
        CatalogFormat, ConfigurationHandle, DependencyResolver, FetchedManifest,
        LicenseClassifier, ManifestReader, OutputPresenter, ProgressReporter, RenderedFile,
        ResolvedDependency,
    };
    pub use crate::shared::error::CatalogError;
    pub use crate::shared::Result;
}
