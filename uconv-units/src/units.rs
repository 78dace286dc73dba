//! Unit table - length, weight and temperature units

use std::collections::HashMap;
use std::sync::LazyLock;
use crate::{Category, UnitDefinition, ConversionError};
use crate::unit::MIN_ALIASES;

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Marker returned by `display_name` for aliases no unit answers to
pub const UNKNOWN_NAME: &str = "???";

/// Registry of all known units. Read-only once built.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    definitions: Vec<UnitDefinition>,
    /// alias -> position in `definitions`
    index: HashMap<String, usize>,
}

impl UnitRegistry {
    /// Registry holding the built-in unit table
    pub fn new() -> Self {
        Self::from_definitions(builtin_definitions())
            .expect("built-in unit table is well formed")
    }

    /// Build a registry, rejecting definitions without display names and
    /// any alias claimed by two definitions
    pub fn from_definitions(definitions: Vec<UnitDefinition>) -> Result<Self, ConversionError> {
        let mut index = HashMap::new();
        for (pos, def) in definitions.iter().enumerate() {
            if def.aliases.len() < MIN_ALIASES {
                let name = def.aliases.first().cloned().unwrap_or_default();
                return Err(ConversionError::MissingNames(name));
            }
            for alias in &def.aliases {
                if index.insert(alias.clone(), pos).is_some() {
                    return Err(ConversionError::DuplicateAlias(alias.clone()));
                }
            }
        }
        Ok(UnitRegistry { definitions, index })
    }

    /// Get a unit by any of its aliases (exact, case-sensitive match)
    pub fn get(&self, alias: &str) -> Option<&UnitDefinition> {
        self.index.get(alias).map(|&pos| &self.definitions[pos])
    }

    /// Category of the unit, or `None` when the alias is unknown
    pub fn lookup_category(&self, alias: &str) -> Option<Category> {
        self.get(alias).map(|u| u.category)
    }

    /// Scale factor of the unit
    pub fn lookup_scale(&self, alias: &str) -> Result<f64, ConversionError> {
        match self.get(alias) {
            Some(unit) => Ok(unit.scale),
            None => {
                tracing::debug!(alias, "scale lookup for unknown unit");
                Err(ConversionError::UnknownUnit(alias.to_string()))
            }
        }
    }

    /// True iff both aliases resolve to the same known category
    pub fn same_category(&self, a: &str, b: &str) -> bool {
        match (self.lookup_category(a), self.lookup_category(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Singular or plural name of the unit; `UNKNOWN_NAME` if there is none
    pub fn display_name(&self, alias: &str, singular: bool) -> &str {
        self.get(alias)
            .map(|u| u.name(singular))
            .unwrap_or(UNKNOWN_NAME)
    }

    /// All units in a category, in table order
    pub fn by_category(&self, category: Category) -> Vec<&UnitDefinition> {
        self.definitions.iter()
            .filter(|u| u.category == category)
            .collect()
    }

    pub fn definitions(&self) -> &[UnitDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_definitions() -> Vec<UnitDefinition> {
    let mut units = Vec::new();
    units.extend(length_units());
    units.extend(weight_units());
    units.extend(temperature_units());
    units
}

/// Scales are meters
fn length_units() -> Vec<UnitDefinition> {
    vec![
        UnitDefinition::new(&["m", "meter", "meters"], Category::Length, 1.0),
        UnitDefinition::new(&["km", "kilometer", "kilometers"], Category::Length, 1000.0),
        UnitDefinition::new(&["cm", "centimeter", "centimeters"], Category::Length, 0.01),
        UnitDefinition::new(&["mm", "millimeter", "millimeters"], Category::Length, 0.001),
        UnitDefinition::new(&["mi", "mile", "miles"], Category::Length, 1609.35),
        UnitDefinition::new(&["yd", "yard", "yards"], Category::Length, 0.9144),
        UnitDefinition::new(&["ft", "foot", "feet"], Category::Length, 0.3048),
        UnitDefinition::new(&["in", "inch", "inches"], Category::Length, 0.0254),
    ]
}

/// Scales are grams
fn weight_units() -> Vec<UnitDefinition> {
    vec![
        UnitDefinition::new(&["g", "gram", "grams"], Category::Weight, 1.0),
        UnitDefinition::new(&["kg", "kilogram", "kilograms"], Category::Weight, 1000.0),
        UnitDefinition::new(&["mg", "milligram", "milligrams"], Category::Weight, 0.001),
        UnitDefinition::new(&["lb", "pound", "pounds"], Category::Weight, 453.592),
        UnitDefinition::new(&["oz", "ounce", "ounces"], Category::Weight, 28.3495),
    ]
}

/// Scales are `TemperatureScale` discriminants
fn temperature_units() -> Vec<UnitDefinition> {
    vec![
        UnitDefinition::new(
            &[
                "celsius", "degree Celsius", "degrees Celsius",
                "degree celsius", "degrees celsius", "dc", "c",
            ],
            Category::Temperature,
            1.0,
        ),
        UnitDefinition::new(
            &[
                "fahrenheit", "degree Fahrenheit", "degrees Fahrenheit",
                "degree fahrenheit", "degrees fahrenheit", "df", "f",
            ],
            Category::Temperature,
            2.0,
        ),
        UnitDefinition::new(&["k", "kelvin", "kelvins"], Category::Temperature, 3.0),
    ]
}
