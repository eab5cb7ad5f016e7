//! Neutral JSON wire records.
//!
//! These mirror the on-the-wire shape one-to-one and carry no invariants.
//! Converting a [`CircuitRecord`] into a [`Circuit`] is where validation
//! happens.

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::qubit::QubitId;

/// `{num_qubits, gates}` as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitRecord {
    /// Register size.
    pub num_qubits: u32,
    /// Gates in program order.
    pub gates: Vec<GateRecord>,
}

/// `{name, qubits, params}` as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateRecord {
    /// Kind name.
    pub name: String,
    /// Operand indices.
    pub qubits: Vec<u32>,
    /// Real-valued parameters.
    pub params: Vec<f64>,
}

impl From<&Gate> for GateRecord {
    fn from(gate: &Gate) -> Self {
        Self {
            name: gate.name().to_string(),
            qubits: gate.qubits().into_iter().map(QubitId::index).collect(),
            params: gate.params(),
        }
    }
}

impl From<Circuit> for CircuitRecord {
    fn from(circuit: Circuit) -> Self {
        Self::from(&circuit)
    }
}

impl From<&Circuit> for CircuitRecord {
    fn from(circuit: &Circuit) -> Self {
        Self {
            num_qubits: circuit.num_qubits(),
            gates: circuit.gates().iter().map(GateRecord::from).collect(),
        }
    }
}

impl TryFrom<CircuitRecord> for Circuit {
    type Error = IrError;

    fn try_from(record: CircuitRecord) -> IrResult<Self> {
        let gates = record
            .gates
            .into_iter()
            .enumerate()
            .map(|(index, g)| {
                let qubits = g.qubits.into_iter().map(QubitId).collect();
                Gate::from_parts(g.name, qubits, g.params).map_err(|e| e.at(index))
            })
            .collect::<IrResult<Vec<_>>>()?;

        Circuit::new(record.num_qubits, gates)
    }
}
