//! Error types for backend profile loading.
//!
//! Metric computation itself cannot fail.

use thiserror::Error;

/// Errors that can occur while loading a backend profile.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileError {
    /// Profile file could not be read.
    #[error("Failed to read profile {path}: {source}")]
    Io {
        /// Path of the profile file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Profile document is not valid YAML/JSON or has wrong value types.
    #[error("Invalid profile document: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A parameter is outside the range the formulas accept.
    #[error("Invalid profile value {field} = {value}: {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// The supplied value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
