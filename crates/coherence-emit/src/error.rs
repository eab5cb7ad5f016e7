//! Error types for emission.

use thiserror::Error;

/// Errors that can occur during emission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// The requested target is not one of the supported frameworks.
    #[error(
        "Unsupported target '{0}' (expected one of: qiskit, cirq, pyquil, braket, neutral_json)"
    )]
    UnsupportedTarget(String),

    /// The circuit could not be serialized to JSON.
    #[error("Failed to serialize circuit: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for emission.
pub type EmitResult<T> = Result<T, EmitError>;
