pub mod artifact;
pub mod catalog;
pub mod definition;
pub mod license;
pub mod module_identifier;
pub mod pom_file;
pub mod resolve_scope;

pub use artifact::{ResolvedArtifact, ScopedArtifacts};
pub use catalog::{AssemblyStyle, Catalog, GroupedDefinitions, ScopedDefinitions};
pub use definition::{ArtifactDefinition, LicenseKey, PlainLicense};
pub use license::{CanonicalLicense, LicenseCapture, LicenseGuess};
pub use module_identifier::{ComponentRef, ResolvedModuleIdentifier, VersionString};
pub use pom_file::{LicenseSeed, ResolvedPomFile};
pub use resolve_scope::ResolveScope;
