//! Python source for Amazon Braket.

use super::{SourceTemplate, SourceWriter, usage_comment};

pub(crate) struct Braket;

impl SourceTemplate for Braket {
    fn preamble(&self, out: &mut SourceWriter, _num_qubits: u32) {
        // Braket sizes circuits from the qubits they touch.
        out.writeln("import braket.circuits as circuits");
        out.writeln("from braket.circuits import Circuit");
        out.blank();
        out.writeln("def create_circuit():");
        out.indent();
        out.writeln("circuit = Circuit()");
        out.blank();
    }

    fn h(&self, qubit: u32) -> String {
        format!("circuit.h({qubit})")
    }

    fn cx(&self, control: u32, target: u32) -> String {
        format!("circuit.cnot({control}, {target})")
    }

    fn rz(&self, angle: &str, qubit: u32) -> String {
        format!("circuit.rz({qubit}, {angle})")
    }

    fn postamble(&self, out: &mut SourceWriter) {
        out.writeln("return circuit");
        out.dedent();
        out.blank();
        usage_comment(out, "circuit");
    }
}
