//! Format Detection and Parsing for Prime Coherence
//!
//! Turns raw input bytes into a validated [`Circuit`](coherence_ir::Circuit).
//!
//! # Supported Formats
//!
//! | Format | Identifier | Notes |
//! |--------|------------|-------|
//! | OpenQASM 2 subset | `qasm` | `qreg`, `h`, `cx`, `rz`; other lines are skipped and reported |
//! | Neutral JSON | `neutral_json` | The IR's own wire shape, validated on load |
//!
//! # Example: Detect and Parse
//!
//! ```rust
//! use coherence_parse::{InputFormat, detect_format, parse};
//!
//! let input = b"OPENQASM 2.0;\nqreg q[2];\nh q[0];\ncx q[0],q[1];\nmeasure q[0] -> c[0];";
//!
//! let format = detect_format(input);
//! assert_eq!(format, InputFormat::Qasm);
//!
//! let outcome = parse(input, format).unwrap();
//! assert_eq!(outcome.circuit.num_gates(), 2);
//! assert_eq!(outcome.skipped.len(), 1); // the measure line
//! ```

mod detect;
mod error;
mod fingerprint;
mod format;
mod lexer;
mod neutral;
mod qasm;

pub use detect::{Detection, DetectionBasis, detect, detect_format};
pub use error::{ParseError, ParseResult};
pub use fingerprint::fingerprint;
pub use format::InputFormat;
pub use neutral::parse_neutral_json;
pub use qasm::{ParseOutcome, SkippedLine, parse_qasm};

/// Parse raw input bytes in the given format.
///
/// QASM input is decoded lossily, in keeping with the dialect's forgiving
/// policy. Neutral JSON must be valid UTF-8.
pub fn parse(bytes: &[u8], format: InputFormat) -> ParseResult<ParseOutcome> {
    match format {
        InputFormat::Qasm => parse_qasm(&String::from_utf8_lossy(bytes)),
        InputFormat::NeutralJson => {
            let source = std::str::from_utf8(bytes)
                .map_err(|e| ParseError::MalformedJson(format!("input is not UTF-8: {e}")))?;
            parse_neutral_json(source).map(ParseOutcome::lossless)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_qasm() {
        let outcome = parse(b"qreg q[1];\nh q[0];", InputFormat::Qasm).unwrap();
        assert_eq!(outcome.circuit.num_gates(), 1);
    }

    #[test]
    fn test_dispatch_neutral_json() {
        let source = br#"{"num_qubits": 0, "gates": []}"#;
        let outcome = parse(source, InputFormat::NeutralJson).unwrap();
        assert!(outcome.circuit.is_empty());
        assert!(outcome.is_lossless());
    }

    #[test]
    fn test_neutral_json_rejects_invalid_utf8() {
        let err = parse(&[b'{', 0xff, b'}'], InputFormat::NeutralJson).unwrap_err();
        assert!(matches!(err, ParseError::MalformedJson(_)));
    }

    #[test]
    fn test_qasm_tolerates_invalid_utf8() {
        let mut input = b"qreg q[1];\n".to_vec();
        input.extend_from_slice(&[0xff, b'\n']);
        input.extend_from_slice(b"h q[0];");
        let outcome = parse(&input, InputFormat::Qasm).unwrap();
        assert_eq!(outcome.circuit.num_gates(), 1);
        assert_eq!(outcome.skipped.len(), 1);
    }

    #[test]
    fn test_detected_json_that_is_not_a_circuit() {
        let input = b"[1, 2, 3]";
        let format = detect_format(input);
        assert_eq!(format, InputFormat::NeutralJson);
        assert!(parse(input, format).is_err());
    }
}
