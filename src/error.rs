//! Error types for workshop-check operations.
//!
//! This module defines [`CheckError`], the error type used by the probe and
//! config layers, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probes and loaders return `CheckError` for failures that need distinct handling
//! - Checks never propagate these errors; they turn them into an
//!   [`Issue`](crate::checks::Issue) plus a printed hint
//! - Use `anyhow::Error` (via `CheckError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for workshop-check operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The interpreter could not be launched.
    #[error("Could not run interpreter '{interpreter}': {message}")]
    InterpreterUnavailable {
        interpreter: PathBuf,
        message: String,
    },

    /// The interpreter ran but its version output was not understood.
    #[error("Unrecognized version output from '{interpreter}': {output}")]
    VersionParse {
        interpreter: PathBuf,
        output: String,
    },

    /// The environment file exists but could not be loaded.
    #[error("Cannot load {path}: {message}")]
    EnvFileUnreadable { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for workshop-check operations.
pub type Result<T> = std::result::Result<T, CheckError>;
