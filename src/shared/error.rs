use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish "the manifests differ" from
/// real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - comparison finished (and no changes, if `--fail-on-changes` is set)
    Success = 0,
    /// Changes were detected and `--fail-on-changes` was requested
    ChangesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable manifest, malformed range, I/O error, etc.)
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
            ExitCode::ChangesDetected => write!(f, "Changes Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while comparing manifests.
///
/// `MalformedRange` and `InvalidGroupTable` originate in the comparison core;
/// the remaining variants belong to the file and output adapters.
#[derive(Debug, Error)]
pub enum DiffError {
    #[error("Malformed version range for \"{dependency}\" in group '{group}': \"{range}\"\nDetails: {details}\n\n💡 Hint: Use a semantic version or range such as \"1.2.3\", \"^1.2.3\" or \">=1.0.0 <2.0.0\"")]
    MalformedRange {
        group: String,
        dependency: String,
        range: String,
        details: String,
    },

    #[error("Invalid dependency group table: {reason}\n\n💡 Hint: Every group needs a unique, non-empty id and at least one manifest key")]
    InvalidGroupTable { reason: String },

    #[error("Manifest file not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse manifest file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the manifest is valid JSON (or TOML for .toml files) with an object at the top level")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration and filter input
    #[error("Validation error: {message}")]
    Validation { message: String },
}
