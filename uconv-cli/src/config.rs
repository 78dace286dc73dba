//! Runtime configuration from the environment

use std::env;
use uconv::OutputFormat;

pub const DEFAULT_PROMPT: &str = "Enter what you want to convert (or exit): ";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub format: OutputFormat,
    /// Printed before each read; suppressed for JSON output
    pub prompt: String,
}

impl Config {
    /// Read `UCONV_OUTPUT` and `UCONV_PROMPT`
    pub fn from_env() -> Self {
        Self::from_vars(env::var("UCONV_OUTPUT").ok(), env::var("UCONV_PROMPT").ok())
    }

    fn from_vars(output: Option<String>, prompt: Option<String>) -> Self {
        let format = match output.as_deref().map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("json") => OutputFormat::Json,
            Some(s) if s.is_empty() || s.eq_ignore_ascii_case("text") => OutputFormat::Text,
            None => OutputFormat::Text,
            Some(other) => {
                tracing::warn!(value = other, "unknown UCONV_OUTPUT, using text");
                OutputFormat::Text
            }
        };

        Config {
            format,
            prompt: prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
        }
    }

    pub fn show_prompt(&self) -> bool {
        self.format == OutputFormat::Text && !self.prompt.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}
