//! Validated circuit container.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::qubit::QubitId;
use crate::wire::CircuitRecord;

/// A quantum circuit: one qubit register and an ordered gate list.
///
/// Every gate's operands are inside `[0, num_qubits)`. The invariant is
/// checked by every constructor, so a `Circuit` value is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircuitRecord", into = "CircuitRecord")]
pub struct Circuit {
    num_qubits: u32,
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit over `num_qubits` qubits.
    pub fn with_qubits(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            gates: vec![],
        }
    }

    /// Create a circuit from a gate list, validating every gate.
    pub fn new(num_qubits: u32, gates: Vec<Gate>) -> IrResult<Self> {
        for (index, gate) in gates.iter().enumerate() {
            check_operands(gate, num_qubits).map_err(|e| e.at(index))?;
        }
        Ok(Self { num_qubits, gates })
    }

    /// Create a Bell-pair circuit (`h q[0]; cx q[0],q[1];`).
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_qubits(2);
        circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?;
        Ok(circuit)
    }

    /// Declared register size.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Gates in program order.
    #[inline]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Total number of gates.
    #[inline]
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no gates.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Append a gate after checking its operands.
    pub fn push(&mut self, gate: Gate) -> IrResult<&mut Self> {
        check_operands(&gate, self.num_qubits).map_err(|e| e.at(self.gates.len()))?;
        self.gates.push(gate);
        Ok(self)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::H(qubit))
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::CX { control, target })
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Gate::Rz { theta, qubit })
    }

    /// Serialize to the neutral JSON shape.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to the neutral JSON shape, pretty-printed.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn check_operands(gate: &Gate, num_qubits: u32) -> IrResult<()> {
    match gate.qubits().into_iter().find(|q| q.0 >= num_qubits) {
        Some(qubit) => Err(IrError::QubitOutOfRange {
            gate: gate.name().to_string(),
            qubit,
            num_qubits,
            at: None,
        }),
        None => Ok(()),
    }
}
