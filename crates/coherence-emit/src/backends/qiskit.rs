//! OpenQASM 2 for Qiskit.

use super::{SourceTemplate, SourceWriter};

pub(crate) struct Qiskit;

impl SourceTemplate for Qiskit {
    fn preamble(&self, out: &mut SourceWriter, num_qubits: u32) {
        out.writeln("OPENQASM 2.0;");
        out.writeln("include \"qelib1.inc\";");
        out.writeln(&format!("qreg q[{num_qubits}];"));
    }

    fn h(&self, qubit: u32) -> String {
        format!("h q[{qubit}];")
    }

    fn cx(&self, control: u32, target: u32) -> String {
        format!("cx q[{control}],q[{target}];")
    }

    fn rz(&self, angle: &str, qubit: u32) -> String {
        format!("rz({angle}) q[{qubit}];")
    }

    fn postamble(&self, _out: &mut SourceWriter) {}
}
