//! Error types for detection and parsing.

use coherence_ir::IrError;
use thiserror::Error;

/// Errors that can occur while turning input bytes into a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A numeric literal inside a recognized statement did not parse.
    #[error("Invalid number '{fragment}' on line {line}")]
    InvalidNumber {
        /// 1-based line number in the input.
        line: usize,
        /// The literal as written.
        fragment: String,
    },

    /// Neutral JSON input is not valid JSON or not shaped like a circuit.
    #[error("Malformed neutral JSON: {0}")]
    MalformedJson(String),

    /// A recognized statement produced a gate that breaks a circuit invariant.
    #[error("Invalid statement on line {line}: {source}")]
    InvalidStatement {
        /// 1-based line number in the input.
        line: usize,
        /// The violated invariant.
        source: IrError,
    },

    /// Decoded circuit breaks an invariant.
    #[error("Invalid circuit: {0}")]
    Invariant(#[from] IrError),

    /// Unknown input format identifier.
    #[error("Unsupported input format: '{0}' (expected one of: qasm, neutral_json)")]
    UnsupportedFormat(String),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
