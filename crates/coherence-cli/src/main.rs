//! Prime Coherence Command-Line Interface
//!
//! Analyze quantum circuits and convert them between frameworks.
//!
//! ```text
//! coherence analyze -i bell.qasm --profile device.yaml
//! coherence convert -i bell.qasm -t cirq -o bell.py
//! coherence detect -i circuit.json
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{analyze, convert, detect, targets, version};

/// Prime Coherence - quantum circuit analysis and conversion
#[derive(Parser)]
#[command(name = "coherence")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute metrics, scores and alerts for a circuit
    Analyze {
        /// Input file (OpenQASM 2 or neutral JSON)
        #[arg(short, long)]
        input: String,

        /// Input format (auto, qasm, neutral_json)
        #[arg(long, default_value = "auto")]
        input_format: String,

        /// Backend profile overriding the scoring parameters (YAML or JSON)
        #[arg(short, long, env = "COHERENCE_PROFILE")]
        profile: Option<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write the JSON report to this file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Convert a circuit for a target framework
    Convert {
        /// Input file (OpenQASM 2 or neutral JSON)
        #[arg(short, long)]
        input: String,

        /// Input format (auto, qasm, neutral_json)
        #[arg(long, default_value = "auto")]
        input_format: String,

        /// Target framework (qiskit, cirq, pyquil, braket, neutral_json)
        #[arg(short, long, env = "COHERENCE_TARGET", default_value = "qiskit")]
        target: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Detect the format of an input file
    Detect {
        /// Input file
        #[arg(short, long)]
        input: String,
    },

    /// List supported input formats and conversion targets
    Targets,

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Analyze {
            input,
            input_format,
            profile,
            format,
            output,
        } => analyze::execute(
            &input,
            &input_format,
            profile.as_deref(),
            &format,
            output.as_deref(),
        ),

        Commands::Convert {
            input,
            input_format,
            target,
            output,
        } => convert::execute(&input, &input_format, &target, output.as_deref()),

        Commands::Detect { input } => detect::execute(&input),

        Commands::Targets => {
            targets::execute();
            Ok(())
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::try_parse_from(["coherence", "analyze", "-i", "bell.qasm"]).unwrap();
        match cli.command {
            Commands::Analyze {
                input,
                input_format,
                format,
                output,
                ..
            } => {
                assert_eq!(input, "bell.qasm");
                assert_eq!(input_format, "auto");
                assert_eq!(format, "table");
                assert!(output.is_none());
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_analyze_all_options() {
        let cli = Cli::try_parse_from([
            "coherence",
            "analyze",
            "-i",
            "bell.qasm",
            "--input-format",
            "qasm",
            "-p",
            "device.yaml",
            "-f",
            "json",
            "-o",
            "report.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze {
                input_format,
                profile,
                format,
                output,
                ..
            } => {
                assert_eq!(input_format, "qasm");
                assert_eq!(profile.as_deref(), Some("device.yaml"));
                assert_eq!(format, "json");
                assert_eq!(output.as_deref(), Some("report.json"));
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_convert_with_target() {
        let cli = Cli::try_parse_from([
            "coherence",
            "convert",
            "-i",
            "bell.qasm",
            "-t",
            "braket",
            "-o",
            "bell.py",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert { target, output, .. } => {
                assert_eq!(target, "braket");
                assert_eq!(output.as_deref(), Some("bell.py"));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["coherence", "convert"]).is_err());
        assert!(Cli::try_parse_from(["coherence", "detect"]).is_err());
    }

    #[test]
    fn test_commands_without_arguments() {
        let cli = Cli::try_parse_from(["coherence", "targets"]).unwrap();
        assert!(matches!(cli.command, Commands::Targets));
        let cli = Cli::try_parse_from(["coherence", "-vvv", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(Cli::try_parse_from(["coherence", "upload"]).is_err());
    }

    #[test]
    fn test_global_verbose() {
        let cli = Cli::try_parse_from(["coherence", "detect", "-i", "x.qasm", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
