//! Input format detection.
//!
//! A heuristic, not a guarantee: the chosen parser may still reject the input.

use serde::Serialize;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::format::InputFormat;

/// What the detector based its decision on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionBasis {
    /// Content starts with `OPENQASM`.
    VersionHeader,
    /// Content is syntactically valid JSON.
    ValidJson,
    /// Neither matched; defaulted to QASM.
    Fallback,
}

/// Outcome of format detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    /// The chosen format.
    pub format: InputFormat,
    /// Why it was chosen.
    pub basis: DetectionBasis,
}

impl Detection {
    /// Whether the decision was a default rather than positive evidence.
    pub fn is_ambiguous(&self) -> bool {
        self.basis == DetectionBasis::Fallback
    }
}

/// Classify raw input bytes. Never fails.
pub fn detect(bytes: &[u8]) -> Detection {
    let content = String::from_utf8_lossy(bytes);
    let content = content.trim();

    if content.starts_with("OPENQASM") {
        return Detection {
            format: InputFormat::Qasm,
            basis: DetectionBasis::VersionHeader,
        };
    }

    if serde_json::from_str::<IgnoredAny>(content).is_ok() {
        return Detection {
            format: InputFormat::NeutralJson,
            basis: DetectionBasis::ValidJson,
        };
    }

    debug!("no version header and not JSON; defaulting to qasm");
    Detection {
        format: InputFormat::Qasm,
        basis: DetectionBasis::Fallback,
    }
}

/// Classify raw input bytes, returning only the format.
pub fn detect_format(bytes: &[u8]) -> InputFormat {
    detect(bytes).format
}
