//! The metrics bundle and the one-shot entry point.

use std::collections::BTreeMap;

use coherence_ir::Circuit;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::alerts::{Alert, make_alerts};
use crate::depth::compute_depth;
use crate::profile::{BackendProfile, EnergyParams, FidelityParams};
use crate::scores::{GateTally, e1_from, energy_from, fidelity_from, gate_counts, qes_from};

/// All metrics of one circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitMetrics {
    /// Layer count under greedy layering.
    pub depth: usize,
    /// Occurrences of each gate kind.
    pub gate_counts: BTreeMap<String, usize>,
    /// Estimated fidelity.
    pub fidelity: f64,
    /// E1 efficiency score.
    pub e1: f64,
    /// Fixed-weight energy estimate.
    pub energy: f64,
    /// Quantum Efficiency Score.
    pub qes: f64,
    /// Declared register size.
    pub num_qubits: u32,
    /// Total gates.
    pub num_gates: usize,
}

impl CircuitMetrics {
    /// Compute every metric of `circuit` in one pass over its gates.
    pub fn compute(circuit: &Circuit, profile: Option<&BackendProfile>) -> Self {
        let tally = GateTally::of(circuit);
        let depth = compute_depth(circuit);
        let num_qubits = circuit.num_qubits();
        let num_gates = circuit.num_gates();

        let fidelity = fidelity_from(&tally, depth, &FidelityParams::resolve(profile));
        let e1 = e1_from(num_gates, num_qubits, &EnergyParams::resolve(profile));
        let energy = energy_from(&tally, num_qubits);
        let qes = qes_from(depth, fidelity, e1, energy);

        Self {
            depth,
            gate_counts: gate_counts(circuit),
            fidelity,
            e1,
            energy,
            qes,
            num_qubits,
            num_gates,
        }
    }
}

/// Compute the metrics of `circuit` and the alerts they raise.
pub fn compute_all(
    circuit: &Circuit,
    profile: Option<&BackendProfile>,
) -> (CircuitMetrics, Vec<Alert>) {
    let metrics = CircuitMetrics::compute(circuit, profile);
    let alerts = make_alerts(&metrics);

    debug!(
        depth = metrics.depth,
        fidelity = metrics.fidelity,
        qes = metrics.qes,
        alerts = alerts.iter().filter(|a| a.is_issue()).count(),
        "Computed circuit metrics"
    );

    (metrics, alerts)
}
