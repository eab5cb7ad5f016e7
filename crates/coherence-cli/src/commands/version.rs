//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum circuit analysis and conversion",
        style("Prime Coherence").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  coherence-ir       Circuit intermediate representation");
    println!("  coherence-parse    Format detection and parsing");
    println!("  coherence-metrics  Metrics, scores and alerts");
    println!("  coherence-emit     Multi-target emitter");
    println!("  coherence-cli      Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
