//! Greedy layer depth.

use coherence_ir::{Circuit, QubitId};
use rustc_hash::FxHashSet;

/// Number of layers under greedy layering.
///
/// Gates are scanned in order. A gate joins the current layer when it shares
/// no qubit with it. Otherwise a new layer starts holding only that gate's
/// qubits; earlier layers are never revisited, so a gate on a qubit that was
/// busy two layers back can still land in the current one.
pub fn compute_depth(circuit: &Circuit) -> usize {
    if circuit.is_empty() {
        return 0;
    }

    let mut depth = 1;
    let mut layer: FxHashSet<QubitId> = FxHashSet::default();

    for gate in circuit.gates() {
        let qubits = gate.qubits();
        if qubits.iter().any(|q| layer.contains(q)) {
            depth += 1;
            layer.clear();
        }
        layer.extend(qubits);
    }

    depth
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(compute_depth(&Circuit::with_qubits(3)), 0);
    }

    #[test]
    fn test_bell() {
        assert_eq!(compute_depth(&Circuit::bell().unwrap()), 2);
    }

    #[test]
    fn test_disjoint_gates_share_a_layer() {
        let mut circuit = Circuit::with_qubits(3);
        for q in 0..3 {
            circuit.h(QubitId(q)).unwrap();
        }
        assert_eq!(compute_depth(&circuit), 1);
    }

    #[test]
    fn test_chain_on_one_qubit() {
        let mut circuit = Circuit::with_qubits(1);
        circuit
            .h(QubitId(0))
            .unwrap()
            .rz(0.5, QubitId(0))
            .unwrap()
            .h(QubitId(0))
            .unwrap();
        assert_eq!(compute_depth(&circuit), 3);
    }

    #[test]
    fn test_layers_are_not_backfilled() {
        // q1's first h could sit in layer 1, but layering never looks back.
        let mut circuit = Circuit::with_qubits(2);
        for q in [0, 0, 1, 1] {
            circuit.h(QubitId(q)).unwrap();
        }
        assert_eq!(compute_depth(&circuit), 3);
    }

    #[test]
    fn test_duplicate_operands() {
        let mut circuit = Circuit::with_qubits(2);
        circuit.cx(QubitId(0), QubitId(0)).unwrap();
        assert_eq!(compute_depth(&circuit), 1);
    }
}
