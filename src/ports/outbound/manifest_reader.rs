use crate::shared::Result;
use std::path::Path;

/// ManifestReader port for reading a materialized manifest
pub trait ManifestReader {
    /// Reads the manifest at `path` to text
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or not a
    /// regular file within the size limit
    fn read_manifest(&self, path: &Path) -> Result<String>;
}
