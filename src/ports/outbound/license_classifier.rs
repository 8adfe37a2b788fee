use crate::catalog::domain::LicenseGuess;

/// LicenseClassifier port mapping a raw license name to a canonical license
///
/// Classification never fails: a name that cannot be matched with
/// confidence yields `LicenseGuess::Undetermined`.
pub trait LicenseClassifier {
    fn classify(&self, raw_name: Option<&str>) -> LicenseGuess;
}
