//! Convert command implementation.

use anyhow::{Context, Result};
use console::style;
use tracing::info;

use coherence_emit::{Target, emit};

use super::common::{load_input, write_output};

/// Execute the convert command.
pub fn execute(input: &str, input_format: &str, target: &str, output: Option<&str>) -> Result<()> {
    let target: Target = target.parse()?;

    let loaded = load_input(input, input_format)?;
    let circuit = &loaded.outcome.circuit;

    let skipped_gates = circuit.gates().iter().filter(|g| !g.is_known()).count();
    if skipped_gates > 0 && target != Target::NeutralJson {
        eprintln!(
            "{} {} gate(s) have no {} mapping and were left out",
            style("Note:").yellow().bold(),
            skipped_gates,
            target
        );
    }

    let text = emit(circuit, target)?
        .into_string()
        .with_context(|| format!("Failed to render output for {target}"))?;
    info!(%target, bytes = text.len(), "Converted circuit");

    match output {
        Some(output_path) => {
            write_output(output_path, &text)?;
            eprintln!(
                "{} Converted {} to {} ({})",
                style("✓").green().bold(),
                style(input).green(),
                style(output_path).green(),
                style(target).yellow()
            );
        }
        None if text.ends_with('\n') => print!("{text}"),
        None => println!("{text}"),
    }

    Ok(())
}
