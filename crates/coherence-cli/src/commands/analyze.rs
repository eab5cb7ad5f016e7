//! Analyze command implementation.
//!
//! `coherence analyze --input <circuit> [--profile <device.yaml>] [--format json] [--output <report.json>]`

use anyhow::Result;
use console::style;
use serde::Serialize;
use tracing::info;

use coherence_ir::Circuit;
use coherence_metrics::{Alert, BackendProfile, CircuitMetrics, compute_all, estimate_swaps};
use coherence_parse::{InputFormat, SkippedLine, fingerprint};

use super::common::{LoadedInput, load_input, load_profile, write_output};

/// Everything `analyze` reports about one input.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub input_format: InputFormat,
    pub fingerprint: String,
    pub metrics: CircuitMetrics,
    pub alerts: Vec<Alert>,
    pub estimated_swaps: u64,
    pub skipped_lines: &'a [SkippedLine],
    pub neutral_ir: &'a Circuit,
}

/// Build the report for a loaded input.
pub fn build_report<'a>(
    loaded: &'a LoadedInput,
    profile: Option<&BackendProfile>,
) -> AnalysisReport<'a> {
    let circuit = &loaded.outcome.circuit;
    let (metrics, alerts) = compute_all(circuit, profile);

    AnalysisReport {
        input_format: loaded.format,
        fingerprint: fingerprint(&loaded.bytes),
        metrics,
        alerts,
        estimated_swaps: estimate_swaps(circuit),
        skipped_lines: &loaded.outcome.skipped,
        neutral_ir: circuit,
    }
}

/// Execute the analyze command.
pub fn execute(
    input: &str,
    input_format: &str,
    profile: Option<&str>,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let as_json = match format.to_lowercase().as_str() {
        "json" => true,
        "table" => false,
        other => anyhow::bail!("Unknown output format: '{other}'. Available: table, json"),
    };

    let loaded = load_input(input, input_format)?;
    let profile = load_profile(profile)?;
    let report = build_report(&loaded, profile.as_ref());
    info!(
        fingerprint = %report.fingerprint,
        alerts = report.alerts.len(),
        "Analysis complete"
    );

    let json = serde_json::to_string_pretty(&report)?;

    if let Some(output_path) = output {
        write_output(output_path, &json)?;
        eprintln!(
            "{} Report written to {}",
            style("OK").green().bold(),
            output_path
        );
    }

    if as_json {
        if output.is_none() {
            println!("{json}");
        }
    } else {
        print_summary(input, &report);
    }

    Ok(())
}

fn print_summary(input: &str, report: &AnalysisReport<'_>) {
    let metrics = &report.metrics;

    println!(
        "{} Analyzed {} ({})",
        style("→").cyan().bold(),
        style(input).green(),
        style(report.input_format).yellow()
    );
    println!("  Fingerprint: {}", style(&report.fingerprint).dim());
    println!();

    println!("{}", style("Metrics").bold().underlined());
    println!("  Qubits:      {}", metrics.num_qubits);
    let counts = metrics
        .gate_counts
        .iter()
        .map(|(name, count)| format!("{name} {count}"))
        .collect::<Vec<_>>()
        .join(", ");
    if counts.is_empty() {
        println!("  Gates:       {}", metrics.num_gates);
    } else {
        println!("  Gates:       {} ({counts})", metrics.num_gates);
    }
    println!("  Depth:       {}", metrics.depth);
    println!("  Fidelity:    {:.4}", metrics.fidelity);
    println!("  E1:          {:.4}", metrics.e1);
    println!("  Energy:      {:.4}", metrics.energy);
    println!("  QES:         {:.4}", metrics.qes);
    println!("  SWAPs (est): {}", report.estimated_swaps);
    println!();

    println!("{}", style("Alerts").bold().underlined());
    for alert in &report.alerts {
        if alert.is_issue() {
            println!("  {} {alert}", style("!").yellow().bold());
        } else {
            println!("  {} {alert}", style("✓").green().bold());
        }
    }

    if !report.skipped_lines.is_empty() {
        println!();
        println!(
            "{} {} line(s) were not recognized and had no effect:",
            style("Note:").yellow().bold(),
            report.skipped_lines.len()
        );
        for skipped in report.skipped_lines.iter().take(10) {
            println!("  line {}: {}", skipped.line, style(&skipped.text).dim());
        }
        if report.skipped_lines.len() > 10 {
            println!("  ... and {} more", report.skipped_lines.len() - 10);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(content: &str) -> (tempfile::TempDir, LoadedInput) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.qasm");
        std::fs::write(&path, content).unwrap();
        let loaded = load_input(&path.to_string_lossy(), "auto").unwrap();
        (dir, loaded)
    }

    #[test]
    fn test_report_fields() {
        let source = "OPENQASM 2.0;\nqreg q[2];\nh q[0];\ncx q[0],q[1];\nmeasure q[0] -> c[0];\n";
        let (_dir, loaded) = load(source);
        let report = build_report(&loaded, None);

        assert_eq!(report.input_format, InputFormat::Qasm);
        assert_eq!(report.fingerprint.len(), 64);
        assert_eq!(report.metrics.depth, 2);
        assert_eq!(report.alerts, vec![Alert::NoIssues]);
        assert_eq!(report.estimated_swaps, 0);
        assert_eq!(report.skipped_lines.len(), 1);
        assert_eq!(report.skipped_lines[0].line, 5);
    }

    #[test]
    fn test_report_json_shape() {
        let (_dir, loaded) = load("qreg q[1];\nrz(0.5) q[0];\n");
        let report = build_report(&loaded, None);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["input_format"], "qasm");
        assert_eq!(value["metrics"]["gate_counts"]["rz"], 1);
        assert_eq!(value["alerts"][0], "No significant issues detected");
        assert_eq!(value["neutral_ir"]["gates"][0]["params"][0], 0.5);
        assert!(value["skipped_lines"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_profile_changes_report() {
        let (_dir, loaded) = load("qreg q[2];\nh q[0];\ncx q[0],q[1];\n");
        let noisy = BackendProfile {
            two_qubit_error: Some(0.3),
            ..Default::default()
        };
        let report = build_report(&loaded, Some(&noisy));
        assert!(report.alerts.contains(&Alert::LowFidelity));
    }

    #[test]
    fn test_unknown_output_format() {
        let err = execute("unused.qasm", "auto", None, "xml", None).unwrap_err();
        assert!(err.to_string().contains("Unknown output format"));
    }

    #[test]
    fn test_writes_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bell.qasm");
        std::fs::write(&input, "qreg q[2];\nh q[0];\ncx q[0],q[1];\n").unwrap();
        let output = dir.path().join("report.json");

        execute(
            &input.to_string_lossy(),
            "qasm",
            None,
            "json",
            Some(&output.to_string_lossy()),
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["metrics"]["num_gates"], 2);
    }
}
