//! Source templates for the text targets.
//!
//! Each target is a fixed template: a preamble, one statement per known gate,
//! and a closing section. [`render`] drives a template over a circuit.

mod braket;
mod cirq;
mod pyquil;
mod qiskit;

pub(crate) use braket::Braket;
pub(crate) use cirq::Cirq;
pub(crate) use pyquil::Pyquil;
pub(crate) use qiskit::Qiskit;

use coherence_ir::{Circuit, Gate};
use tracing::debug;

/// Line-oriented output buffer with indentation.
#[derive(Debug, Default)]
pub(crate) struct SourceWriter {
    output: String,
    indent: usize,
}

impl SourceWriter {
    pub(crate) fn writeln(&mut self, line: &str) {
        if !line.is_empty() {
            for _ in 0..self.indent {
                self.output.push_str("    ");
            }
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.output.push('\n');
    }

    pub(crate) fn indent(&mut self) {
        self.indent += 1;
    }

    pub(crate) fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    fn finish(self) -> String {
        self.output
    }
}

/// The statements one framework needs.
pub(crate) trait SourceTemplate {
    /// Imports, register setup, and anything else before the first gate.
    fn preamble(&self, out: &mut SourceWriter, num_qubits: u32);
    /// Hadamard on `qubit`.
    fn h(&self, qubit: u32) -> String;
    /// CNOT from `control` to `target`.
    fn cx(&self, control: u32, target: u32) -> String;
    /// Z rotation by `angle`, already formatted.
    fn rz(&self, angle: &str, qubit: u32) -> String;
    /// Everything after the last gate.
    fn postamble(&self, out: &mut SourceWriter);
}

/// Format an angle as the shortest literal that reads back to the same
/// value, always with a decimal point or exponent.
pub(crate) fn format_angle(theta: f64) -> String {
    format!("{theta:?}")
}

/// Emit `circuit` through `template`. Opaque gates are skipped.
pub(crate) fn render(template: &impl SourceTemplate, circuit: &Circuit) -> String {
    let mut out = SourceWriter::default();
    template.preamble(&mut out, circuit.num_qubits());

    for (index, gate) in circuit.gates().iter().enumerate() {
        let statement = match gate {
            Gate::H(q) => template.h(q.0),
            Gate::CX { control, target } => template.cx(control.0, target.0),
            Gate::Rz { theta, qubit } => template.rz(&format_angle(*theta), qubit.0),
            Gate::Opaque(opaque) => {
                debug!(gate = opaque.name(), index, "Skipping unmapped gate");
                continue;
            }
        };
        out.writeln(&statement);
    }

    template.postamble(&mut out);
    out.finish()
}

/// Usage comment shared by the Python targets.
pub(crate) fn usage_comment(out: &mut SourceWriter, binding: &str) {
    out.writeln("# Usage:");
    out.writeln(&format!("# {binding} = create_circuit()"));
    out.writeln(&format!("# print({binding})"));
}
