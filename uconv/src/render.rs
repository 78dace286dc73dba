//! Reply renderer
//!
//! Turns outcomes into the lines printed back to the user.

use std::fmt;
use serde_json::json;
use crate::eval::Outcome;
use crate::parser::ParseError;

/// Output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain sentences (default)
    #[default]
    Text,
    /// One JSON object per reply
    Json,
}

/// Format a magnitude with at least one fractional digit: `1.0`, `273.15`
pub fn format_number(n: f64) -> String {
    let s = n.to_string();
    if s.chars().all(|c| c.is_ascii_digit() || c == '-') {
        format!("{}.0", s)
    } else {
        s
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Converted(r) => write!(
                f,
                "{} {} is {} {}",
                format_number(r.value),
                r.from,
                format_number(r.result),
                r.to
            ),
            Outcome::Impossible { from, to } => {
                write!(f, "Conversion from {} to {} is impossible", from, to)
            }
            Outcome::Negative { category } => write!(f, "{} shouldn't be negative.", category),
        }
    }
}

/// Reply renderer
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn render(&self, outcome: &Outcome) -> String {
        match self.format {
            OutputFormat::Text => outcome.to_string(),
            OutputFormat::Json => {
                let mut value = serde_json::to_value(outcome).unwrap_or_else(|e| {
                    json!({ "outcome": "error", "message": e.to_string() })
                });
                if let Some(obj) = value.as_object_mut() {
                    obj.insert("message".to_string(), json!(outcome.to_string()));
                }
                value.to_string()
            }
        }
    }

    pub fn render_parse_error(&self, error: &ParseError) -> String {
        match self.format {
            OutputFormat::Text => "Parse error".to_string(),
            OutputFormat::Json => json!({
                "outcome": "parse_error",
                "message": "Parse error",
                "detail": error.to_string(),
            })
            .to_string(),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
