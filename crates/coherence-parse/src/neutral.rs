//! Neutral JSON loader.

use coherence_ir::{Circuit, CircuitRecord};

use crate::error::{ParseError, ParseResult};

/// Decode a neutral JSON document and validate it.
///
/// Shape errors (missing fields, wrong types, negative indices) are
/// [`ParseError::MalformedJson`]; a well-formed document describing an invalid
/// circuit is [`ParseError::Invariant`].
pub fn parse_neutral_json(source: &str) -> ParseResult<Circuit> {
    let record: CircuitRecord =
        serde_json::from_str(source).map_err(|e| ParseError::MalformedJson(e.to_string()))?;
    Ok(Circuit::try_from(record)?)
}
