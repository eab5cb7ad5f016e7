//! Detect command implementation.

use anyhow::Result;
use console::style;

use coherence_parse::{DetectionBasis, detect};

use super::common::read_input;

/// Execute the detect command.
pub fn execute(input: &str) -> Result<()> {
    let bytes = read_input(input)?;
    let detection = detect(&bytes);

    let basis = match detection.basis {
        DetectionBasis::VersionHeader => "starts with an OPENQASM header",
        DetectionBasis::ValidJson => "parses as JSON",
        DetectionBasis::Fallback => "no header and not JSON; assuming QASM",
    };

    let marker = if detection.is_ambiguous() {
        style("?").yellow().bold()
    } else {
        style("✓").green().bold()
    };

    println!(
        "{} {}: {} ({basis})",
        marker,
        style(input).green(),
        style(detection.format).yellow().bold()
    );

    Ok(())
}
