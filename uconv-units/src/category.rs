//! Measurable quantities a unit can belong to

use std::fmt;
use serde::{Serialize, Deserialize};

/// The quantity a unit measures. Units convert only within one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base unit: meter
    Length,
    /// Base unit: gram
    Weight,
    /// No base unit; scales are formula discriminants
    Temperature,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Temperature];

    /// Lowercase name, as used in log output and JSON
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
        }
    }

    /// Whether conversion is a plain ratio between scale factors
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }

    /// Whether negative magnitudes are meaningful for this quantity
    pub fn allows_negative(&self) -> bool {
        matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Capitalized for messages like "Length shouldn't be negative."
        let name = match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Temperature => "Temperature",
        };
        write!(f, "{}", name)
    }
}
