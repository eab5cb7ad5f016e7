//! Line-oriented parser for the OpenQASM 2 subset.
//!
//! Each line is matched on its own against a fixed set of statement shapes.
//! A line that matches none of them is skipped and reported, never an error.
//! Only a numeric literal inside a matched shape can fail the parse.

use serde::Serialize;
use tracing::debug;

use coherence_ir::{Circuit, Gate, QubitId};

use crate::error::{ParseError, ParseResult};
use crate::lexer::{Cursor, Token};

/// A line the parser did not understand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
}

/// A parsed circuit plus everything that was dropped on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// The validated circuit.
    pub circuit: Circuit,
    /// Lines that matched no statement shape, in input order.
    pub skipped: Vec<SkippedLine>,
}

impl ParseOutcome {
    /// Wrap a circuit that was decoded without loss.
    pub fn lossless(circuit: Circuit) -> Self {
        Self {
            circuit,
            skipped: vec![],
        }
    }

    /// Whether every line contributed to the circuit.
    pub fn is_lossless(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Drop the skip report.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }
}

/// Statement shapes, holding the raw literal text.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape<'a> {
    /// `OPENQASM ...` or `include ...`.
    Header,
    Qreg(&'a str),
    H(&'a str),
    Cx(&'a str, &'a str),
    Rz(&'a str, &'a str),
}

/// Parse QASM source into a circuit.
///
/// `qreg q[N];` sets the register size (the last declaration wins). `h`,
/// `cx` and `rz` statements append gates. Operands are validated against the
/// final register size once every line has been read.
pub fn parse_qasm(source: &str) -> ParseResult<ParseOutcome> {
    let mut num_qubits = 0u32;
    let mut gates = vec![];
    let mut gate_lines = vec![];
    let mut skipped = vec![];

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let Some(shape) = match_line(line) else {
            debug!(line = line_no, text = line, "skipping unrecognized line");
            skipped.push(SkippedLine {
                line: line_no,
                text: line.to_string(),
            });
            continue;
        };

        match shape {
            Shape::Header => {}
            Shape::Qreg(size) => num_qubits = parse_u32(size, line_no)?,
            Shape::H(q) => {
                gates.push(Gate::H(qubit(q, line_no)?));
                gate_lines.push(line_no);
            }
            Shape::Cx(c, t) => {
                gates.push(Gate::CX {
                    control: qubit(c, line_no)?,
                    target: qubit(t, line_no)?,
                });
                gate_lines.push(line_no);
            }
            Shape::Rz(angle, q) => {
                let theta = parse_angle(angle, line_no)?;
                gates.push(Gate::Rz {
                    theta,
                    qubit: qubit(q, line_no)?,
                });
                gate_lines.push(line_no);
            }
        }
    }

    let circuit = Circuit::new(num_qubits, gates).map_err(|e| match e.position() {
        Some(i) => ParseError::InvalidStatement {
            line: gate_lines[i],
            source: e,
        },
        None => ParseError::Invariant(e),
    })?;

    debug!(
        num_qubits,
        gates = circuit.num_gates(),
        skipped = skipped.len(),
        "parsed qasm"
    );

    Ok(ParseOutcome { circuit, skipped })
}

fn match_line(line: &str) -> Option<Shape<'_>> {
    let mut cur = Cursor::new(line);
    let head = cur.expect(Token::Ident)?;
    match head {
        "OPENQASM" | "include" => Some(Shape::Header),
        "qreg" => {
            cur.expect(Token::Space)?;
            let size = operand(&mut cur)?;
            cur.expect(Token::Semicolon)?;
            Some(Shape::Qreg(size))
        }
        "h" => {
            cur.expect(Token::Space)?;
            let q = operand(&mut cur)?;
            cur.expect(Token::Semicolon)?;
            Some(Shape::H(q))
        }
        "cx" => {
            cur.expect(Token::Space)?;
            let c = operand(&mut cur)?;
            cur.expect(Token::Comma)?;
            cur.skip_space();
            let t = operand(&mut cur)?;
            cur.expect(Token::Semicolon)?;
            Some(Shape::Cx(c, t))
        }
        "rz" => {
            cur.expect(Token::LParen)?;
            let angle = cur.take_until(')')?;
            cur.expect(Token::RParen)?;
            cur.expect(Token::Space)?;
            let q = operand(&mut cur)?;
            cur.expect(Token::Semicolon)?;
            Some(Shape::Rz(angle, q))
        }
        _ => None,
    }
}

/// `q[<digits>]`, returning the digits.
fn operand<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    cur.keyword("q")?;
    cur.expect(Token::LBracket)?;
    let digits = cur.expect(Token::Digits)?;
    cur.expect(Token::RBracket)?;
    Some(digits)
}

fn parse_u32(text: &str, line: usize) -> ParseResult<u32> {
    text.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        fragment: text.to_string(),
    })
}

fn qubit(text: &str, line: usize) -> ParseResult<QubitId> {
    parse_u32(text, line).map(QubitId)
}

/// Angles must be finite: the neutral JSON shape cannot carry NaN or infinity.
fn parse_angle(text: &str, line: usize) -> ParseResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidNumber {
            line,
            fragment: text.to_string(),
        }),
    }
}
