use license_catalog::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestReader serving manifest text from memory
#[derive(Default, Clone)]
pub struct MockManifestReader {
    pub manifests: HashMap<PathBuf, String>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.manifests.insert(path.into(), content.into());
        self
    }

    /// Registers a minimal POM with one license
    pub fn with_pom(
        self,
        path: impl Into<PathBuf>,
        name: &str,
        license_name: &str,
        license_url: &str,
    ) -> Self {
        let content = format!(
            r#"<project>
  <name>{}</name>
  <url>https://example.com/{}</url>
  <licenses>
    <license>
      <name>{}</name>
      <url>{}</url>
    </license>
  </licenses>
  <developers>
    <developer><name>{} Authors</name></developer>
  </developers>
</project>"#,
            name, name, license_name, license_url, name
        );
        self.with_manifest(path, content)
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        self.manifests.get(path).cloned().ok_or_else(|| {
            CatalogError::FileReadError {
                path: path.to_path_buf(),
                details: "Mock manifest not registered".to_string(),
            }
            .into()
        })
    }
}
