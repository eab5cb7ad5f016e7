//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Invariant violations detected while constructing a circuit.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate operates on a qubit outside the declared register.
    #[error(
        "Gate '{gate}' uses qubit {qubit} but the circuit declares {num_qubits} qubits{}",
        format_position(.at)
    )]
    QubitOutOfRange {
        /// Name of the gate.
        gate: String,
        /// The offending qubit.
        qubit: QubitId,
        /// Declared register size.
        num_qubits: u32,
        /// Position of the gate in the circuit, if known.
        at: Option<usize>,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate}' requires {expected} qubits, got {got}{}", format_position(.at))]
    QubitCountMismatch {
        /// Name of the gate.
        gate: String,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
        /// Position of the gate in the circuit, if known.
        at: Option<usize>,
    },

    /// Gate requires a different number of parameters.
    #[error("Gate '{gate}' requires {expected} parameters, got {got}{}", format_position(.at))]
    ParamCountMismatch {
        /// Name of the gate.
        gate: String,
        /// Expected number of parameters.
        expected: usize,
        /// Actual number of parameters provided.
        got: usize,
        /// Position of the gate in the circuit, if known.
        at: Option<usize>,
    },
}

impl IrError {
    /// Attach the gate's position within the circuit.
    #[must_use]
    pub fn at(mut self, index: usize) -> Self {
        match &mut self {
            IrError::QubitOutOfRange { at, .. }
            | IrError::QubitCountMismatch { at, .. }
            | IrError::ParamCountMismatch { at, .. } => *at = Some(index),
        }
        self
    }

    /// Position of the offending gate, if known.
    pub fn position(&self) -> Option<usize> {
        match self {
            IrError::QubitOutOfRange { at, .. }
            | IrError::QubitCountMismatch { at, .. }
            | IrError::ParamCountMismatch { at, .. } => *at,
        }
    }
}

#[allow(clippy::ref_option)]
fn format_position(at: &Option<usize>) -> String {
    match at {
        Some(index) => format!(" (gate #{index})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_without_position() {
        let err = IrError::QubitCountMismatch {
            gate: "cx".into(),
            expected: 2,
            got: 1,
            at: None,
        };
        assert_eq!(err.to_string(), "Gate 'cx' requires 2 qubits, got 1");
    }

    #[test]
    fn test_message_with_position() {
        let err = IrError::QubitOutOfRange {
            gate: "h".into(),
            qubit: QubitId(4),
            num_qubits: 2,
            at: None,
        }
        .at(3);
        let msg = err.to_string();
        assert!(msg.contains("qubit q4"));
        assert!(msg.ends_with("(gate #3)"));
        assert_eq!(err.position(), Some(3));
    }
}
