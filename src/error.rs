//! Error handling for the skeleton generator.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for skeleton generation.
///
/// Errors are returned to the caller as they happen. Nothing is retried and
/// output written before the failure is left in place.
#[derive(Error, Debug)]
pub enum Error {
    /// The destination is occupied and no (or not enough) override was given.
    #[error("{path} already exists{hint}")]
    AlreadyExistsError { path: String, hint: String },

    /// The destination path exists but is a file rather than a directory.
    #[error("{path} already exists but not a directory")]
    NotADirectoryError { path: String },

    /// A forced generation would still clobber a top-level entry or the config file.
    #[error("{path} already exists")]
    CollisionError { path: String },

    /// The format is not supported or the document cannot be encoded in it.
    #[error("Failed to serialize {format}: {reason}.")]
    SerializationError { format: String, reason: String },

    /// A skip-marker pattern failed to compile
    #[error("Skip pattern error: {0}.")]
    SkipPatternError(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn already_exists<S: Into<String>>(path: S) -> Self {
        Error::AlreadyExistsError { path: path.into(), hint: String::new() }
    }

    pub(crate) fn not_empty<S: Into<String>>(path: S) -> Self {
        Error::AlreadyExistsError {
            path: path.into(),
            hint: " and is not empty. See --force.".to_string(),
        }
    }

    pub(crate) fn serialization<F, R>(format: F, reason: R) -> Self
    where
        F: std::fmt::Display,
        R: std::fmt::Display,
    {
        Error::SerializationError { format: format.to_string(), reason: reason.to_string() }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
