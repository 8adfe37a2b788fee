use crate::ports::outbound::ManifestReader;
use crate::shared::error::CatalogError;
use crate::shared::security::{safe_read_to_string, MAX_MANIFEST_SIZE};
use crate::shared::Result;
use std::path::Path;

/// FileSystemReader adapter for reading manifests from the file system
///
/// Symbolic links and non-regular files are rejected, and manifests larger
/// than `MAX_MANIFEST_SIZE` are refused before anything is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CatalogError::FileReadError {
                path: path.to_path_buf(),
                details: "Manifest does not exist".to_string(),
            }
            .into());
        }

        safe_read_to_string(path, "manifest", MAX_MANIFEST_SIZE)
    }
}
