//! uconv - Interactive Unit Conversion
//!
//! Turns lines like `1 km to m` into replies like
//! `1.0 kilometer is 1000.0 meters`.

mod parser;
mod eval;
mod render;

pub use parser::{parse, Command, ConversionRequest, ParseError};
pub use eval::{Evaluator, Outcome};
pub use render::{format_number, OutputFormat, Renderer};

use uconv_units::{UnitRegistry, UNITS};

/// Response to one input line
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The user asked to stop
    Exit,
    /// A line to print
    Text(String),
}

/// Main conversion engine
pub struct Converter<'r> {
    registry: &'r UnitRegistry,
    renderer: Renderer,
}

impl Converter<'static> {
    /// Converter over the built-in unit table
    pub fn with_builtin_units() -> Self {
        Self::new(&UNITS)
    }
}

impl<'r> Converter<'r> {
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Self {
            registry,
            renderer: Renderer::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.renderer = Renderer::new(format);
        self
    }

    /// Handle one line of user input
    pub fn handle_line(&self, line: &str) -> Reply {
        let request = match parse(line) {
            Ok(Command::Exit) => return Reply::Exit,
            Ok(Command::Convert(request)) => request,
            Err(e) => {
                tracing::debug!(error = %e, line, "parse error");
                return Reply::Text(self.renderer.render_parse_error(&e));
            }
        };

        let outcome = Evaluator::new(self.registry).eval(&request);
        Reply::Text(self.renderer.render(&outcome))
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Self::with_builtin_units()
    }
}
