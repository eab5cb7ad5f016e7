//! Gate counts and heuristic scores.
//!
//! Every score is rounded to four decimal places. The scores are toy
//! heuristics for comparing circuits against each other, not physical
//! predictions.

use std::collections::BTreeMap;

use coherence_ir::{Circuit, Gate};

use crate::depth::compute_depth;
use crate::profile::{BackendProfile, EnergyParams, FidelityParams};

/// Layer count at which the depth score halves.
const DEPTH_SCALE: f64 = 50.0;
/// Energy at which the energy scores halve.
const ENERGY_SCALE: f64 = 100.0;
/// Fixed-weight energy cost per qubit.
const ENERGY_PER_QUBIT: f64 = 0.5;

/// Round to four decimal places, ties to even.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round_ties_even() / 10_000.0
}

/// Fixed energy weight of one gate.
fn gate_weight(gate: &Gate) -> f64 {
    match gate {
        Gate::H(_) => 1.0,
        Gate::CX { .. } => 10.0,
        Gate::Rz { .. } => 2.0,
        Gate::Opaque(_) => 1.0,
    }
}

/// Per-class gate totals the formulas share.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GateTally {
    pub single: usize,
    pub two: usize,
    pub weighted_energy: f64,
}

impl GateTally {
    pub(crate) fn of(circuit: &Circuit) -> Self {
        let mut tally = Self::default();
        for gate in circuit.gates() {
            match gate {
                Gate::H(_) | Gate::Rz { .. } => tally.single += 1,
                Gate::CX { .. } => tally.two += 1,
                Gate::Opaque(_) => {}
            }
            tally.weighted_energy += gate_weight(gate);
        }
        tally
    }
}

/// Occurrences of each gate kind, keyed by kind name.
pub fn gate_counts(circuit: &Circuit) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for gate in circuit.gates() {
        *counts.entry(gate.name().to_string()).or_insert(0) += 1;
    }
    counts
}

pub(crate) fn fidelity_from(tally: &GateTally, depth: usize, params: &FidelityParams) -> f64 {
    let gates = (1.0 - params.single_qubit_error).powf(tally.single as f64)
        * (1.0 - params.two_qubit_error).powf(tally.two as f64);
    let decoherence = (-(depth as f64) / params.decoherence_time).exp();
    round4(gates * decoherence)
}

pub(crate) fn e1_from(num_gates: usize, num_qubits: u32, params: &EnergyParams) -> f64 {
    let energy = num_gates as f64 * params.energy_per_gate
        + f64::from(num_qubits) * params.energy_per_qubit;
    round4(1.0 / (1.0 + energy / ENERGY_SCALE))
}

pub(crate) fn energy_from(tally: &GateTally, num_qubits: u32) -> f64 {
    round4(tally.weighted_energy + f64::from(num_qubits) * ENERGY_PER_QUBIT)
}

pub(crate) fn qes_from(depth: usize, fidelity: f64, e1: f64, energy: f64) -> f64 {
    let depth_score = 1.0 / (1.0 + depth as f64 / DEPTH_SCALE);
    let energy_score = 1.0 / (1.0 + energy / ENERGY_SCALE);
    round4(0.3 * depth_score + 0.3 * fidelity + 0.2 * e1 + 0.2 * energy_score)
}

/// Estimated success probability.
///
/// Each single-qubit gate (`h`, `rz`) and each `cx` multiplies in its
/// survival rate, and depth decays the result exponentially against the
/// decoherence time. Opaque gates cost nothing.
pub fn estimated_fidelity(circuit: &Circuit, profile: Option<&BackendProfile>) -> f64 {
    fidelity_from(
        &GateTally::of(circuit),
        compute_depth(circuit),
        &FidelityParams::resolve(profile),
    )
}

/// E1 efficiency score in `(0, 1]` from the tunable energy model.
pub fn e1(circuit: &Circuit, profile: Option<&BackendProfile>) -> f64 {
    e1_from(
        circuit.num_gates(),
        circuit.num_qubits(),
        &EnergyParams::resolve(profile),
    )
}

/// Fixed-weight energy estimate.
pub fn energy(circuit: &Circuit) -> f64 {
    energy_from(&GateTally::of(circuit), circuit.num_qubits())
}

/// Quantum Efficiency Score.
pub fn qes(circuit: &Circuit, profile: Option<&BackendProfile>) -> f64 {
    let tally = GateTally::of(circuit);
    let depth = compute_depth(circuit);
    qes_from(
        depth,
        fidelity_from(&tally, depth, &FidelityParams::resolve(profile)),
        e1_from(
            circuit.num_gates(),
            circuit.num_qubits(),
            &EnergyParams::resolve(profile),
        ),
        energy_from(&tally, circuit.num_qubits()),
    )
}

/// Rough count of SWAPs routing would insert: `depth * num_qubits / 10`.
pub fn estimate_swaps(circuit: &Circuit) -> u64 {
    compute_depth(circuit) as u64 * u64::from(circuit.num_qubits()) / 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use coherence_ir::QubitId;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123_449), 0.1234);
        assert_eq!(round4(0.999_96), 1.0);
        assert_eq!(round4(3.0), 3.0);
        assert_eq!(round4(0.781_25), 0.7812);
        assert_eq!(round4(0.093_75), 0.0938);
    }

    #[test]
    fn test_e1_tie_rounds_to_even() {
        // 23*1.0 + 50*0.1 = 28, so E1 = 1/1.28 = 0.78125 exactly
        let mut circuit = Circuit::with_qubits(50);
        for q in 0..23 {
            circuit.h(QubitId(q)).unwrap();
        }
        assert_eq!(e1(&circuit, None), 0.7812);
    }

    #[test]
    fn test_gate_counts() {
        let mut circuit = Circuit::bell().unwrap();
        circuit.h(QubitId(1)).unwrap();
        let counts = gate_counts(&circuit);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["h"], 2);
        assert_eq!(counts["cx"], 1);
        assert_eq!(
            counts.keys().collect::<Vec<_>>(),
            vec!["cx", "h"],
            "keys are ordered"
        );
    }

    #[test]
    fn test_opaque_gates_are_counted() {
        let gate = Gate::from_parts("swap", vec![QubitId(0), QubitId(1)], vec![]).unwrap();
        let circuit = Circuit::new(2, vec![gate]).unwrap();
        assert_eq!(gate_counts(&circuit)["swap"], 1);
        assert_eq!(energy(&circuit), 2.0);
    }

    #[test]
    fn test_bell_scores() {
        let circuit = Circuit::bell().unwrap();

        // 0.999 * 0.99 * exp(-2/50)
        let fidelity = estimated_fidelity(&circuit, None);
        assert_close(fidelity, 0.9502);

        // energy 2*1.0 + 2*0.1 = 2.2
        assert_close(e1(&circuit, None), 0.9785);

        // 1 + 10 + 2*0.5
        assert_close(energy(&circuit), 12.0);

        // 0.3/1.04 + 0.3*0.9502 + 0.2*0.9785 + 0.2/1.12
        assert_close(qes(&circuit, None), 0.9478);
    }

    #[test]
    fn test_empty_circuit() {
        let circuit = Circuit::with_qubits(0);
        assert_eq!(estimated_fidelity(&circuit, None), 1.0);
        assert_eq!(e1(&circuit, None), 1.0);
        assert_eq!(energy(&circuit), 0.0);
        assert_eq!(qes(&circuit, None), 1.0);
        assert_eq!(estimate_swaps(&circuit), 0);
    }

    #[test]
    fn test_profile_changes_fidelity() {
        let circuit = Circuit::bell().unwrap();
        let noisy = BackendProfile {
            two_qubit_error: Some(0.5),
            ..Default::default()
        };
        assert!(estimated_fidelity(&circuit, Some(&noisy)) < estimated_fidelity(&circuit, None));
        // energy ignores profiles
        assert_eq!(energy(&circuit), 12.0);
    }

    #[test]
    fn test_profile_changes_e1() {
        let circuit = Circuit::bell().unwrap();
        let costly = BackendProfile {
            energy_per_gate: Some(50.0),
            ..Default::default()
        };
        // 2*50 + 2*0.1 = 100.2
        assert_close(e1(&circuit, Some(&costly)), 0.4995);
    }

    #[test]
    fn test_estimate_swaps() {
        let mut circuit = Circuit::with_qubits(5);
        for _ in 0..4 {
            circuit.h(QubitId(0)).unwrap();
        }
        // depth 4 * 5 qubits / 10
        assert_eq!(estimate_swaps(&circuit), 2);
        assert_eq!(estimate_swaps(&Circuit::bell().unwrap()), 0);
    }
}
