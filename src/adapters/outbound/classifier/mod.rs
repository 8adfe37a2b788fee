/// License classification adapters
mod known_license_classifier;

pub use known_license_classifier::{KnownLicenseClassifier, UNDETERMINED_NAME};
