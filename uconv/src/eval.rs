//! Request evaluator
//!
//! Applies the checks that come before a conversion: both units must share a
//! category, and lengths and weights cannot be negative.

use serde::Serialize;
use uconv_units::{Category, ConversionResult, UnitRegistry};
use crate::parser::ConversionRequest;

/// What came of a conversion request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    Converted(ConversionResult),
    /// Units are unknown or measure different things. Names are plural.
    Impossible { from: String, to: String },
    /// Negative magnitude for a quantity that cannot be negative
    Negative { category: Category },
}

/// Request evaluator over a unit registry
pub struct Evaluator<'r> {
    registry: &'r UnitRegistry,
}

impl<'r> Evaluator<'r> {
    pub fn new(registry: &'r UnitRegistry) -> Self {
        Self { registry }
    }

    pub fn eval(&self, request: &ConversionRequest) -> Outcome {
        let ConversionRequest { value, from, to } = request;

        let category = match self.registry.lookup_category(from) {
            Some(c) if self.registry.same_category(from, to) => c,
            _ => {
                tracing::debug!(%from, %to, "conversion impossible");
                return self.impossible(from, to);
            }
        };

        if *value < 0.0 && !category.allows_negative() {
            return Outcome::Negative { category };
        }

        // Both aliases resolved above, so the scale lookups cannot miss.
        match self.registry.conversion(*value, from, to) {
            Ok(result) => {
                tracing::debug!(%from, %to, value, result = result.result, "converted");
                Outcome::Converted(result)
            }
            Err(e) => {
                tracing::error!(error = %e, "conversion failed after category check");
                self.impossible(from, to)
            }
        }
    }

    fn impossible(&self, from: &str, to: &str) -> Outcome {
        Outcome::Impossible {
            from: self.registry.display_name(from, false).to_string(),
            to: self.registry.display_name(to, false).to_string(),
        }
    }
}
