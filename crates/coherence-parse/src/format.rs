//! Input format identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Input dialects the parser understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// Line-oriented OpenQASM 2 subset.
    Qasm,
    /// The IR itself, serialized as JSON.
    NeutralJson,
}

impl InputFormat {
    /// All formats, in the order they are listed to users.
    pub const ALL: [InputFormat; 2] = [InputFormat::Qasm, InputFormat::NeutralJson];

    /// Canonical identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            InputFormat::Qasm => "qasm",
            InputFormat::NeutralJson => "neutral_json",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "qasm" => Ok(InputFormat::Qasm),
            "neutral_json" => Ok(InputFormat::NeutralJson),
            _ => Err(ParseError::UnsupportedFormat(s.to_string())),
        }
    }
}
