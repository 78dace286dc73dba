//! Unit definitions and conversion errors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::Category;

/// Short form, singular and plural
pub const MIN_ALIASES: usize = 3;

/// A single unit: the names it answers to, its category, and its scale.
///
/// Aliases are ordered: short form first, then singular, then plural, then
/// any alternate spellings. `UnitRegistry::from_definitions` rejects
/// definitions with fewer than `MIN_ALIASES`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Names the unit is looked up by (e.g., "m", "meter", "meters")
    pub aliases: Vec<String>,
    /// The quantity this unit measures
    pub category: Category,
    /// Multiplier to the category's base unit. For temperature this is a
    /// formula discriminant (see `TemperatureScale`), not a ratio.
    pub scale: f64,
}

impl UnitDefinition {
    /// Create a new unit definition
    pub fn new(aliases: &[&str], category: Category, scale: f64) -> Self {
        UnitDefinition {
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            category,
            scale,
        }
    }

    /// Short form (e.g., "km")
    pub fn symbol(&self) -> &str {
        &self.aliases[0]
    }

    /// Singular display name (e.g., "kilometer")
    pub fn singular(&self) -> &str {
        &self.aliases[1]
    }

    /// Plural display name (e.g., "kilometers")
    pub fn plural(&self) -> &str {
        &self.aliases[2]
    }

    /// Display name chosen by grammatical number
    pub fn name(&self, singular: bool) -> &str {
        if singular { self.singular() } else { self.plural() }
    }

    /// Exact, case-sensitive alias match
    pub fn matches(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a == alias)
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Errors raised by the registry and converter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// No unit answers to this alias
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
    /// Two definitions claim the same alias
    #[error("alias '{0}' is defined by more than one unit")]
    DuplicateAlias(String),
    /// Definition lacks a short, singular or plural name
    #[error("unit '{0}' needs short, singular and plural names")]
    MissingNames(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kilometer() -> UnitDefinition {
        UnitDefinition::new(&["km", "kilometer", "kilometers"], Category::Length, 1000.0)
    }

    #[test]
    fn test_names() {
        let km = kilometer();
        assert_eq!(km.symbol(), "km");
        assert_eq!(km.singular(), "kilometer");
        assert_eq!(km.plural(), "kilometers");
        assert_eq!(km.name(true), "kilometer");
        assert_eq!(km.name(false), "kilometers");
        assert_eq!(format!("{}", km), "km");
    }

    #[test]
    fn test_matches_is_case_sensitive() {
        let km = kilometer();
        assert!(km.matches("km"));
        assert!(km.matches("kilometers"));
        assert!(!km.matches("KM"));
        assert!(!km.matches("kilo"));
    }

    #[test]
    fn test_error_display() {
        let err = ConversionError::UnknownUnit("xyz".to_string());
        assert_eq!(err.to_string(), "unknown unit: xyz");
    }
}
