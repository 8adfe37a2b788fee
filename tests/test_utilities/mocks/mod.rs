/// Mock implementations for testing
mod mock_dependency_resolver;
mod mock_license_classifier;
mod mock_manifest_reader;
mod mock_progress_reporter;

pub use mock_dependency_resolver::{manifest_path, MockDependencyResolver};
pub use mock_license_classifier::MockLicenseClassifier;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::{MockProgressReporter, Report};
