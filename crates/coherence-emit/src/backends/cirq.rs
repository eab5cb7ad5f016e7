//! Python source for Cirq.

use super::{SourceTemplate, SourceWriter, usage_comment};

pub(crate) struct Cirq;

impl SourceTemplate for Cirq {
    fn preamble(&self, out: &mut SourceWriter, num_qubits: u32) {
        out.writeln("import cirq");
        out.writeln("import numpy as np");
        out.blank();
        out.writeln("def create_circuit():");
        out.indent();
        out.writeln(&format!("qubits = cirq.LineQubit.range({num_qubits})"));
        out.writeln("circuit = cirq.Circuit()");
        out.blank();
    }

    fn h(&self, qubit: u32) -> String {
        format!("circuit.append(cirq.H(qubits[{qubit}]))")
    }

    fn cx(&self, control: u32, target: u32) -> String {
        format!("circuit.append(cirq.CNOT(qubits[{control}], qubits[{target}]))")
    }

    fn rz(&self, angle: &str, qubit: u32) -> String {
        format!("circuit.append(cirq.rz({angle})(qubits[{qubit}]))")
    }

    fn postamble(&self, out: &mut SourceWriter) {
        out.writeln("return circuit");
        out.dedent();
        out.blank();
        usage_comment(out, "circuit");
    }
}
