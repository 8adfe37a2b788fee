use crate::ports::outbound::{OutputPresenter, RenderedFile};
use crate::shared::error::CatalogError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemWriter adapter for writing rendered catalogs to files
///
/// This adapter implements the OutputPresenter port for file output. All
/// destinations are validated before the first file is written.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if parent != Path::new("") && !parent.is_dir() {
                return Err(CatalogError::FileWriteError {
                    path: path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Rejects an existing destination that is a symbolic link or a directory
    fn validate_output_security(path: &Path) -> Result<()> {
        if fs::symlink_metadata(path).is_err() {
            return Ok(());
        }

        validate_not_symlink(path, "write")?;
        if path.is_dir() {
            return Err(CatalogError::FileWriteError {
                path: path.to_path_buf(),
                details: "Output path is a directory".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, files: &[RenderedFile]) -> Result<()> {
        for file in files {
            Self::validate_parent_directory(&file.path)?;
            Self::validate_output_security(&file.path)?;
        }

        for file in files {
            fs::write(&file.path, &file.content).map_err(|e| CatalogError::FileWriteError {
                path: file.path.clone(),
                details: e.to_string(),
            })?;
            eprintln!("✅ Output complete: {}", file.path.display());
        }

        Ok(())
    }
}
