//! Error types for recordlog
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Path does not exist
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Expected a regular file but found a directory
    #[error("Cannot read '{path}': target is a directory, not a file")]
    NotAFile { path: PathBuf },

    /// A regular file occupies a path segment where a directory is needed
    #[error("Cannot create directory '{path}': a file already occupies that path")]
    NotADirectory { path: PathBuf },

    /// Failed to inspect a path
    #[error("Failed to stat '{path}': {error}")]
    Stat { path: PathBuf, error: String },

    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },
}

/// Record log errors
#[derive(Error, Debug)]
pub enum RecordError {
    /// Record is null or empty
    #[error("Invalid record: records must not be null or empty")]
    InvalidRecord,

    /// Record could not be serialized to JSON
    #[error("Failed to serialize record: {error}")]
    Serialize { error: String },

    /// Existing log content is not a valid JSON array
    #[error("Log file '{path}' does not contain a JSON array: {error}")]
    Parse { path: PathBuf, error: String },

    /// Filesystem error while reading or writing the log
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Top-level recordlog error type
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Record log error
    #[error("Record log error: {0}")]
    Record(#[from] RecordError),
}

/// Convenience alias for results carrying the top-level error type
pub type Result<T> = std::result::Result<T, Error>;
