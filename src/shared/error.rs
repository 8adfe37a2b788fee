use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the catalog was assembled (and written unless dry-run)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed manifest, resolution failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license catalog generation.
///
/// Every variant carries enough context (module coordinates, file path)
/// to locate the offending dependency or file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed manifest for {module}: {path}\nReason: {reason}\n\n💡 Hint: The POM file must be well-formed XML and declare at least one of name, description or artifactId")]
    MalformedManifest {
        path: PathBuf,
        module: String,
        reason: String,
    },

    #[error("Failed to resolve {subject}\nDetails: {details}\n\n💡 Hint: Re-export the resolution snapshot and verify that every manifest has been downloaded")]
    ResolutionFailure { subject: String, details: String },

    #[error("Invalid configuration: {path}\nDetails: {details}\n\n💡 Hint: Check the file against the documented fields")]
    ConfigurationError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for value objects and requests
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
