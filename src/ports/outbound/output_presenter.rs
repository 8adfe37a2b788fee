use crate::shared::Result;
use std::path::PathBuf;

/// A rendered file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

impl RenderedFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination where the rendered
/// catalogs are written.
pub trait OutputPresenter {
    /// Writes every file, or fails before writing any if a destination is invalid
    ///
    /// # Errors
    /// Returns an error if:
    /// - A destination is a symbolic link or not writable
    /// - Writing fails
    fn present(&self, files: &[RenderedFile]) -> Result<()>;
}
