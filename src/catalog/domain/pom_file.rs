use crate::shared::error::CatalogError;
use crate::shared::Result;

/// A raw, unvalidated license declaration as found in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LicenseSeed {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl LicenseSeed {
    pub fn new(name: Option<String>, url: Option<String>) -> Self {
        Self { name, url }
    }
}

/// Normalized metadata extracted from one package manifest
///
/// Invariant: `display_name_candidates` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPomFile {
    display_name_candidates: Vec<String>,
    associated_url: Option<String>,
    copyright_holders: Vec<String>,
    licenses: Vec<LicenseSeed>,
}

impl ResolvedPomFile {
    pub fn new(
        display_name_candidates: Vec<String>,
        associated_url: Option<String>,
        copyright_holders: Vec<String>,
        licenses: Vec<LicenseSeed>,
    ) -> Result<Self> {
        if display_name_candidates.is_empty() {
            return Err(CatalogError::Validation {
                message: "A manifest needs at least one display name candidate".to_string(),
            }
            .into());
        }

        Ok(Self {
            display_name_candidates,
            associated_url,
            copyright_holders,
            licenses,
        })
    }

    /// The first candidate in `name`, `description`, `artifactId` priority order
    pub fn display_name(&self) -> &str {
        &self.display_name_candidates[0]
    }

    pub fn display_name_candidates(&self) -> &[String] {
        &self.display_name_candidates
    }

    pub fn associated_url(&self) -> Option<&str> {
        self.associated_url.as_deref()
    }

    pub fn copyright_holders(&self) -> &[String] {
        &self.copyright_holders
    }

    pub fn licenses(&self) -> &[LicenseSeed] {
        &self.licenses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_is_first_candidate() {
        let pom = ResolvedPomFile::new(
            vec!["Example1".to_string(), "example".to_string()],
            None,
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(pom.display_name(), "Example1");
        assert_eq!(pom.display_name_candidates().len(), 2);
    }

    #[test]
    fn test_empty_candidates_rejected() {
        let result = ResolvedPomFile::new(vec![], Some("https://example.com".to_string()), vec![], vec![]);
        assert!(result.is_err());
    }
}
