//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use coherence_metrics::BackendProfile;
use coherence_parse::{InputFormat, ParseOutcome, detect, parse};

/// Largest input file accepted, in bytes.
pub const MAX_INPUT_BYTES: u64 = 5 * 1024 * 1024;

/// Raw input bytes together with the circuit parsed from them.
#[derive(Debug)]
pub struct LoadedInput {
    pub bytes: Vec<u8>,
    pub format: InputFormat,
    pub outcome: ParseOutcome,
}

/// Read an input file, refusing anything over [`MAX_INPUT_BYTES`].
pub fn read_input(path: &str) -> Result<Vec<u8>> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let size = fs::metadata(path_obj)
        .with_context(|| format!("Failed to read file: {path}"))?
        .len();
    if size > MAX_INPUT_BYTES {
        anyhow::bail!(
            "Input file too large: {path} is {size} bytes (limit {MAX_INPUT_BYTES} bytes)"
        );
    }

    fs::read(path_obj).with_context(|| format!("Failed to read file: {path}"))
}

/// Resolve an `--input-format` value. `auto` runs the detector.
pub fn resolve_format(bytes: &[u8], requested: &str) -> Result<InputFormat> {
    if requested.trim().eq_ignore_ascii_case("auto") {
        let detection = detect(bytes);
        if detection.is_ambiguous() {
            warn!(
                format = %detection.format,
                "Could not identify the input format, assuming {}",
                detection.format
            );
        } else {
            info!(format = %detection.format, "Detected input format");
        }
        return Ok(detection.format);
    }

    Ok(requested.parse()?)
}

/// Read, detect and parse an input file.
pub fn load_input(path: &str, requested_format: &str) -> Result<LoadedInput> {
    let bytes = read_input(path)?;
    let format = resolve_format(&bytes, requested_format)?;
    let outcome =
        parse(&bytes, format).with_context(|| format!("Failed to parse {path} as {format}"))?;

    info!(
        path,
        num_qubits = outcome.circuit.num_qubits(),
        gates = outcome.circuit.num_gates(),
        "Loaded circuit"
    );

    Ok(LoadedInput {
        bytes,
        format,
        outcome,
    })
}

/// Load a backend profile, if one was given.
pub fn load_profile(path: Option<&str>) -> Result<Option<BackendProfile>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let profile = BackendProfile::from_file(path)
        .with_context(|| format!("Failed to load backend profile: {path}"))?;
    info!(path, "Loaded backend profile");
    Ok(Some(profile))
}

/// Write `content` to `path`.
pub fn write_output(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_missing_file() {
        let err = read_input("/nonexistent/coherence/input.qasm").unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let ok = write_temp(&dir, "ok.qasm", &vec![b'\n'; MAX_INPUT_BYTES as usize]);
        assert!(read_input(&ok).is_ok());

        let big = write_temp(&dir, "big.qasm", &vec![b'\n'; MAX_INPUT_BYTES as usize + 1]);
        let err = read_input(&big).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_resolve_format() {
        assert_eq!(
            resolve_format(b"OPENQASM 2.0;", "auto").unwrap(),
            InputFormat::Qasm
        );
        assert_eq!(
            resolve_format(b"{}", "AUTO").unwrap(),
            InputFormat::NeutralJson
        );
        assert_eq!(
            resolve_format(b"{}", "qasm").unwrap(),
            InputFormat::Qasm,
            "an explicit format wins over detection"
        );
        assert!(resolve_format(b"", "quil").is_err());
    }

    #[test]
    fn test_load_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "bell.qasm", b"qreg q[2];\nh q[0];\ncx q[0],q[1];\n");
        let loaded = load_input(&path, "auto").unwrap();
        assert_eq!(loaded.format, InputFormat::Qasm);
        assert_eq!(loaded.outcome.circuit.num_gates(), 2);
        assert_eq!(loaded.bytes.len(), 33);
    }

    #[test]
    fn test_load_input_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "bad.json", br#"{"num_qubits": 1}"#);
        let err = load_input(&path, "auto").unwrap_err();
        assert!(format!("{err:#}").contains("as neutral_json"));
    }

    #[test]
    fn test_load_profile() {
        assert!(load_profile(None).unwrap().is_none());

        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "device.yaml", b"single_qubit_error: 0.002\n");
        let profile = load_profile(Some(&path)).unwrap().unwrap();
        assert_eq!(profile.single_qubit_error, Some(0.002));

        let bad = write_temp(&dir, "bad.yaml", b"decoherence_time: -5\n");
        assert!(load_profile(Some(&bad)).is_err());
    }
}
