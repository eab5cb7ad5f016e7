//! Gate types.

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// A gate application.
///
/// The known kinds carry their operands in typed fields, so their arity is
/// fixed by construction. Anything else is kept as an [`OpaqueGate`], which
/// downstream consumers may count but are free to skip.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    /// Hadamard gate.
    H(QubitId),
    /// Controlled-X (CNOT) gate.
    CX {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// Rotation around Z.
    Rz {
        /// Rotation angle in radians.
        theta: f64,
        /// Qubit the rotation acts on.
        qubit: QubitId,
    },
    /// A gate kind outside the known set, carried verbatim.
    Opaque(OpaqueGate),
}

/// Gate of a kind the IR does not model.
///
/// Only constructible through [`Gate::from_parts`], which guarantees the name
/// is not one of the known kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueGate {
    name: String,
    qubits: Vec<QubitId>,
    params: Vec<f64>,
}

impl OpaqueGate {
    /// Kind name as it appeared in the input.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Operands in input order.
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Parameters in input order.
    pub fn params(&self) -> &[f64] {
        &self.params
    }
}

impl Gate {
    /// Names of the gate kinds with fixed semantics.
    pub const KNOWN: [&'static str; 3] = ["h", "cx", "rz"];

    /// Build a gate from its wire-level parts.
    ///
    /// Known kind names are checked against their arity; every other name
    /// becomes an [`OpaqueGate`].
    pub fn from_parts(
        name: impl Into<String>,
        qubits: Vec<QubitId>,
        params: Vec<f64>,
    ) -> IrResult<Self> {
        let name = name.into();
        match name.as_str() {
            "h" => {
                check_arity(&name, &qubits, &params, 1, 0)?;
                Ok(Gate::H(qubits[0]))
            }
            "cx" => {
                check_arity(&name, &qubits, &params, 2, 0)?;
                Ok(Gate::CX {
                    control: qubits[0],
                    target: qubits[1],
                })
            }
            "rz" => {
                check_arity(&name, &qubits, &params, 1, 1)?;
                Ok(Gate::Rz {
                    theta: params[0],
                    qubit: qubits[0],
                })
            }
            _ => Ok(Gate::Opaque(OpaqueGate {
                name,
                qubits,
                params,
            })),
        }
    }

    /// Kind name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Gate::H(_) => "h",
            Gate::CX { .. } => "cx",
            Gate::Rz { .. } => "rz",
            Gate::Opaque(gate) => &gate.name,
        }
    }

    /// Operands in order (control before target for `cx`).
    pub fn qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::H(qubit) | Gate::Rz { qubit, .. } => vec![*qubit],
            Gate::CX { control, target } => vec![*control, *target],
            Gate::Opaque(gate) => gate.qubits.clone(),
        }
    }

    /// Real-valued parameters in order.
    pub fn params(&self) -> Vec<f64> {
        match self {
            Gate::H(_) | Gate::CX { .. } => vec![],
            Gate::Rz { theta, .. } => vec![*theta],
            Gate::Opaque(gate) => gate.params.clone(),
        }
    }

    /// Whether this gate is one of the known kinds.
    #[inline]
    pub fn is_known(&self) -> bool {
        !matches!(self, Gate::Opaque(_))
    }
}

fn check_arity(
    name: &str,
    qubits: &[QubitId],
    params: &[f64],
    expected_qubits: usize,
    expected_params: usize,
) -> IrResult<()> {
    if qubits.len() != expected_qubits {
        return Err(IrError::QubitCountMismatch {
            gate: name.to_string(),
            expected: expected_qubits,
            got: qubits.len(),
            at: None,
        });
    }
    if params.len() != expected_params {
        return Err(IrError::ParamCountMismatch {
            gate: name.to_string(),
            expected: expected_params,
            got: params.len(),
            at: None,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds_from_parts() {
        assert_eq!(
            Gate::from_parts("h", vec![QubitId(1)], vec![]).unwrap(),
            Gate::H(QubitId(1))
        );
        assert_eq!(
            Gate::from_parts("cx", vec![QubitId(0), QubitId(2)], vec![]).unwrap(),
            Gate::CX {
                control: QubitId(0),
                target: QubitId(2)
            }
        );
        assert_eq!(
            Gate::from_parts("rz", vec![QubitId(0)], vec![0.25]).unwrap(),
            Gate::Rz {
                theta: 0.25,
                qubit: QubitId(0)
            }
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let err = Gate::from_parts("cx", vec![QubitId(0)], vec![]).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitCountMismatch {
                expected: 2,
                got: 1,
                ..
            }
        ));

        let err = Gate::from_parts("rz", vec![QubitId(0)], vec![]).unwrap_err();
        assert!(matches!(
            err,
            IrError::ParamCountMismatch {
                expected: 1,
                got: 0,
                ..
            }
        ));

        let err = Gate::from_parts("h", vec![QubitId(0)], vec![1.0]).unwrap_err();
        assert!(matches!(err, IrError::ParamCountMismatch { .. }));
    }

    #[test]
    fn test_unknown_kind_is_opaque() {
        let gate = Gate::from_parts("swap", vec![QubitId(0), QubitId(1)], vec![]).unwrap();
        assert!(!gate.is_known());
        assert_eq!(gate.name(), "swap");
        assert_eq!(gate.qubits(), vec![QubitId(0), QubitId(1)]);
        assert!(gate.params().is_empty());
    }

    #[test]
    fn test_kind_names_are_case_sensitive() {
        let gate = Gate::from_parts("H", vec![QubitId(0)], vec![]).unwrap();
        assert!(matches!(gate, Gate::Opaque(_)));
    }

    #[test]
    fn test_operands_roundtrip() {
        let gate = Gate::Rz {
            theta: -1.5,
            qubit: QubitId(3),
        };
        let rebuilt = Gate::from_parts(gate.name(), gate.qubits(), gate.params()).unwrap();
        assert_eq!(gate, rebuilt);
    }
}
