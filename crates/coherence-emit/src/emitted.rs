//! Emission results.

use coherence_ir::Circuit;

use crate::error::EmitResult;

/// Output of [`emit`](crate::emit).
#[derive(Debug, Clone, PartialEq)]
pub enum Emitted {
    /// Program text for a framework target.
    Source(String),
    /// The IR itself, for the `neutral_json` target.
    Circuit(Circuit),
}

impl Emitted {
    /// Render as text. The IR renders as pretty-printed neutral JSON.
    pub fn render(&self) -> EmitResult<String> {
        match self {
            Emitted::Source(source) => Ok(source.clone()),
            Emitted::Circuit(circuit) => Ok(circuit.to_json_pretty()?),
        }
    }

    /// Consume into text.
    pub fn into_string(self) -> EmitResult<String> {
        match self {
            Emitted::Source(source) => Ok(source),
            Emitted::Circuit(circuit) => Ok(circuit.to_json_pretty()?),
        }
    }

    /// The program text, if this is a framework target's output.
    pub fn as_source(&self) -> Option<&str> {
        match self {
            Emitted::Source(source) => Some(source),
            Emitted::Circuit(_) => None,
        }
    }
}
