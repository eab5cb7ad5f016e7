//! Targets command implementation.

use console::style;

use coherence_emit::Target;
use coherence_parse::InputFormat;

/// Execute the targets command.
pub fn execute() {
    println!("{} Input formats:\n", style("Coherence").cyan().bold());
    for format in InputFormat::ALL {
        let note = match format {
            InputFormat::Qasm => "OpenQASM 2 subset (qreg, h, cx, rz)",
            InputFormat::NeutralJson => "neutral circuit JSON",
        };
        println!("  {} {:<14} {}", style("●").green(), format.as_str(), note);
    }

    let title = style("Coherence").cyan().bold();
    println!("\n{title} Conversion targets:\n");
    for target in Target::ALL {
        let note = match target {
            Target::Qiskit => "OpenQASM 2.0 for Qiskit",
            Target::Cirq => "Python source for Cirq",
            Target::Pyquil => "Python source for PyQuil",
            Target::Braket => "Python source for Amazon Braket",
            Target::NeutralJson => "neutral circuit JSON",
        };
        println!(
            "  {} {:<14} {} (.{})",
            style("●").green(),
            target.as_str(),
            note,
            target.file_extension()
        );
    }
}
