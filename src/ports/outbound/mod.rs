/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (build graph, file system, console).
pub mod catalog_format;
pub mod dependency_resolver;
pub mod license_classifier;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use catalog_format::CatalogFormat;
pub use dependency_resolver::{
    ConfigurationHandle, DependencyResolver, FetchedManifest, ResolvedDependency,
};
pub use license_classifier::LicenseClassifier;
pub use manifest_reader::ManifestReader;
pub use output_presenter::{OutputPresenter, RenderedFile};
pub use progress_reporter::ProgressReporter;
