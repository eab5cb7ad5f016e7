//! Python source for PyQuil.

use super::{SourceTemplate, SourceWriter, usage_comment};

pub(crate) struct Pyquil;

impl SourceTemplate for Pyquil {
    fn preamble(&self, out: &mut SourceWriter, _num_qubits: u32) {
        out.writeln("from pyquil import Program");
        out.writeln("from pyquil.gates import H, CNOT, RZ");
        out.blank();
        out.writeln("def create_circuit():");
        out.indent();
        out.writeln("program = Program()");
        out.blank();
    }

    fn h(&self, qubit: u32) -> String {
        format!("program += H({qubit})")
    }

    fn cx(&self, control: u32, target: u32) -> String {
        format!("program += CNOT({control}, {target})")
    }

    fn rz(&self, angle: &str, qubit: u32) -> String {
        format!("program += RZ({angle}, {qubit})")
    }

    fn postamble(&self, out: &mut SourceWriter) {
        out.writeln("return program");
        out.dedent();
        out.blank();
        usage_comment(out, "program");
    }
}
