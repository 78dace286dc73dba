//! Input line parser
//!
//! Accepted shape: `<number> <unit> <word> <unit>`, e.g. `1 km to miles`.
//! A unit may be two words when the first is `degree` or `degrees`.

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// A conversion the user asked for. Unit names are lower-cased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Exit,
    Convert(ConversionRequest),
}

/// Malformed input line
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("'{0}' is not a number")]
    InvalidNumber(String),
    #[error("missing {0}")]
    MissingToken(&'static str),
}

const EXIT: &str = "exit";

/// Parse one line of user input
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();

    let first = tokens.next().ok_or(ParseError::MissingToken("value"))?;
    if first == EXIT {
        return Ok(Command::Exit);
    }

    let value: f64 = first.parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| ParseError::InvalidNumber(first.to_string()))?;

    let from = parse_unit(&mut tokens, "source unit")?;
    // connective word: "to", "in", "convertTo", ...
    tokens.next().ok_or(ParseError::MissingToken("target unit"))?;
    let to = parse_unit(&mut tokens, "target unit")?;

    Ok(Command::Convert(ConversionRequest { value, from, to }))
}

/// Read one unit name, joining `degree(s) <scale>` into a single alias
fn parse_unit<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<String, ParseError> {
    let unit = tokens.next()
        .ok_or(ParseError::MissingToken(what))?
        .to_lowercase();

    if unit == "degree" || unit == "degrees" {
        let scale = tokens.next().ok_or(ParseError::MissingToken(what))?;
        return Ok(format!("{} {}", unit, scale.to_lowercase()));
    }

    Ok(unit)
}
