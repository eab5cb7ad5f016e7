//! Multi-Target Emitter for Prime Coherence
//!
//! Turns a [`Circuit`] into program text for a quantum framework, or hands the
//! IR back unchanged for the `neutral_json` target.
//!
//! # Targets
//!
//! | Target | Output |
//! |--------|--------|
//! | `qiskit` | OpenQASM 2.0 with `qelib1.inc` |
//! | `cirq` | Python defining `create_circuit()` over `cirq.LineQubit`s |
//! | `pyquil` | Python defining `create_circuit()` returning a `Program` |
//! | `braket` | Python defining `create_circuit()` returning a Braket `Circuit` |
//! | `neutral_json` | The IR, rendered as pretty JSON |
//!
//! Gates outside `h`, `cx` and `rz` have no mapping and are left out of every
//! text target.
//!
//! # Example
//!
//! ```rust
//! use coherence_emit::{Target, emit};
//! use coherence_ir::Circuit;
//!
//! let circuit = Circuit::bell().unwrap();
//! let qasm = emit(&circuit, Target::Qiskit).unwrap().render().unwrap();
//! assert!(qasm.contains("cx q[0],q[1];"));
//! ```

mod backends;
mod emitted;
mod error;
mod target;

pub use emitted::Emitted;
pub use error::{EmitError, EmitResult};
pub use target::Target;

use coherence_ir::Circuit;

use crate::backends::{Braket, Cirq, Pyquil, Qiskit, render};

/// Emit `circuit` for `target`.
pub fn emit(circuit: &Circuit, target: Target) -> EmitResult<Emitted> {
    let emitted = match target {
        Target::Qiskit => Emitted::Source(render(&Qiskit, circuit)),
        Target::Cirq => Emitted::Source(render(&Cirq, circuit)),
        Target::Pyquil => Emitted::Source(render(&Pyquil, circuit)),
        Target::Braket => Emitted::Source(render(&Braket, circuit)),
        Target::NeutralJson => Emitted::Circuit(circuit.clone()),
    };
    Ok(emitted)
}

/// Emit `circuit` for a target given by name.
pub fn emit_named(circuit: &Circuit, target: &str) -> EmitResult<Emitted> {
    emit(circuit, target.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use coherence_ir::{Gate, QubitId};

    fn with_opaque() -> Circuit {
        let swap = Gate::from_parts("swap", vec![QubitId(0), QubitId(1)], vec![]).unwrap();
        Circuit::new(2, vec![Gate::H(QubitId(0)), swap, Gate::H(QubitId(1))]).unwrap()
    }

    #[test]
    fn test_neutral_json_returns_ir_unchanged() {
        let circuit = with_opaque();
        assert_eq!(
            emit(&circuit, Target::NeutralJson).unwrap(),
            Emitted::Circuit(circuit)
        );
    }

    #[test]
    fn test_opaque_gates_skipped_by_every_text_target() {
        let circuit = with_opaque();
        for target in Target::ALL {
            if target == Target::NeutralJson {
                continue;
            }
            let text = emit(&circuit, target).unwrap().render().unwrap();
            assert!(!text.to_lowercase().contains("swap"), "{target}");
        }
    }

    #[test]
    fn test_emit_named() {
        let circuit = Circuit::bell().unwrap();
        assert!(emit_named(&circuit, "pyquil").is_ok());
        let err = emit_named(&circuit, "quil").unwrap_err();
        assert!(matches!(err, EmitError::UnsupportedTarget(ref name) if name == "quil"));
    }
}
