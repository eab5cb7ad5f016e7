//! Output target identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EmitError;

/// Frameworks a circuit can be emitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// OpenQASM 2 as consumed by Qiskit.
    Qiskit,
    /// Python source building a `cirq.Circuit`.
    Cirq,
    /// Python source building a PyQuil `Program`.
    Pyquil,
    /// Python source building an Amazon Braket `Circuit`.
    Braket,
    /// The IR itself.
    NeutralJson,
}

impl Target {
    /// All targets, in the order they are listed to users.
    pub const ALL: [Target; 5] = [
        Target::Qiskit,
        Target::Cirq,
        Target::Pyquil,
        Target::Braket,
        Target::NeutralJson,
    ];

    /// Canonical identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Target::Qiskit => "qiskit",
            Target::Cirq => "cirq",
            Target::Pyquil => "pyquil",
            Target::Braket => "braket",
            Target::NeutralJson => "neutral_json",
        }
    }

    /// Conventional file extension for emitted output.
    pub fn file_extension(self) -> &'static str {
        match self {
            Target::Qiskit => "qasm",
            Target::Cirq | Target::Pyquil | Target::Braket => "py",
            Target::NeutralJson => "json",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Target {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "qiskit" => Ok(Target::Qiskit),
            "cirq" => Ok(Target::Cirq),
            "pyquil" => Ok(Target::Pyquil),
            "braket" => Ok(Target::Braket),
            "neutral_json" => Ok(Target::NeutralJson),
            _ => Err(EmitError::UnsupportedTarget(s.to_string())),
        }
    }
}
