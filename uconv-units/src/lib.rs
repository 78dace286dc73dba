//! uconv Units - Unit Table and Conversion
//!
//! A fixed table of units, looked up by alias, with conversion between
//! units of the same category.
//!
//! Categories:
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Weight (g, kg, mg, lb, oz)
//! - Temperature (celsius, fahrenheit, kelvin)
//!
//! Alias matching is exact and case-sensitive. Callers normalize input
//! first; the table stores "degree Celsius" style names in both cases.

mod category;
mod unit;
mod units;
mod convert;

pub use category::Category;
pub use unit::{UnitDefinition, ConversionError, MIN_ALIASES};
pub use units::{UnitRegistry, UNITS, UNKNOWN_NAME};
pub use convert::{ConversionResult, TemperatureScale, temperature_formula};

/// Category of a unit in the global table, `None` if unknown
pub fn lookup_category(alias: &str) -> Option<Category> {
    UNITS.lookup_category(alias)
}

/// Scale factor of a unit in the global table
pub fn lookup_scale(alias: &str) -> Result<f64, ConversionError> {
    UNITS.lookup_scale(alias)
}

/// True iff both units are known and share a category
pub fn same_category(a: &str, b: &str) -> bool {
    UNITS.same_category(a, b)
}

/// Singular or plural unit name, `UNKNOWN_NAME` for unknown aliases
pub fn display_name(alias: &str, singular: bool) -> &'static str {
    UNITS.display_name(alias, singular)
}

/// Convert a value between two units of the global table
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    UNITS.convert(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions() {
        assert_eq!(lookup_category("m"), Some(Category::Length));
        assert_eq!(lookup_category("xyz"), None);
        assert_eq!(lookup_scale("kg"), Ok(1000.0));
        assert!(same_category("m", "km"));
        assert!(!same_category("m", "kg"));
        assert_eq!(display_name("m", true), "meter");
        assert_eq!(display_name("m", false), "meters");
        assert_eq!(convert(0.0, "celsius", "fahrenheit"), Ok(32.0));
        assert_eq!(
            convert(1.0, "xyz", "m"),
            Err(ConversionError::UnknownUnit("xyz".to_string()))
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|i| std::thread::spawn(move || convert(i as f64, "km", "m")))
            .collect();
        for (i, h) in handles.into_iter().enumerate() {
            assert_eq!(h.join().unwrap(), Ok(i as f64 * 1000.0));
        }
    }
}
