//! Conversion between units of the same category

use serde::{Serialize, Deserialize};
use crate::{Category, ConversionError};
use crate::units::UnitRegistry;

// ============ temperature ============

/// Temperature scales, keyed by the discriminant stored as their scale factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius = 1,
    Fahrenheit = 2,
    Kelvin = 3,
}

impl TemperatureScale {
    /// Scale for a discriminant; `None` for anything but 1, 2 or 3
    pub fn from_discriminant(d: f64) -> Option<Self> {
        if d == 1.0 {
            Some(TemperatureScale::Celsius)
        } else if d == 2.0 {
            Some(TemperatureScale::Fahrenheit)
        } else if d == 3.0 {
            Some(TemperatureScale::Kelvin)
        } else {
            None
        }
    }

    pub fn discriminant(self) -> f64 {
        self as u8 as f64
    }
}

// Multiply before dividing: `c * 9.0 / 5.0` keeps 100 C -> 212 F and
// 37 C -> 98.6 F exact, where `c * (9.0 / 5.0)` drifts in the last digit.

fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

fn celsius_to_kelvin(c: f64) -> f64 {
    c + 273.15
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - 273.15
}

fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f + 459.67) * 5.0 / 9.0
}

fn kelvin_to_fahrenheit(k: f64) -> f64 {
    k * 9.0 / 5.0 - 459.67
}

fn identity(t: f64) -> f64 {
    t
}

/// Pick the formula for a pair of scale discriminants.
///
/// Equal scales, and any pair involving an unrecognized discriminant, map to
/// the identity. The latter is logged since it is almost certainly a bad table entry.
pub fn temperature_formula(from: f64, to: f64) -> fn(f64) -> f64 {
    use TemperatureScale::*;

    match (TemperatureScale::from_discriminant(from), TemperatureScale::from_discriminant(to)) {
        (Some(Celsius), Some(Fahrenheit)) => celsius_to_fahrenheit,
        (Some(Fahrenheit), Some(Celsius)) => fahrenheit_to_celsius,
        (Some(Celsius), Some(Kelvin)) => celsius_to_kelvin,
        (Some(Kelvin), Some(Celsius)) => kelvin_to_celsius,
        (Some(Fahrenheit), Some(Kelvin)) => fahrenheit_to_kelvin,
        (Some(Kelvin), Some(Fahrenheit)) => kelvin_to_fahrenheit,
        (Some(_), Some(_)) => identity,
        _ => {
            tracing::warn!(from, to, "no temperature formula for scale pair, value left unchanged");
            identity
        }
    }
}

// ============ convert ============

/// Outcome of a successful conversion, with display names resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// Magnitude in the source unit
    pub value: f64,
    /// Source unit name, singular iff `value == 1.0`
    pub from: String,
    /// Magnitude in the target unit
    pub result: f64,
    /// Target unit name, singular iff `result == 1.0`
    pub to: String,
}

impl UnitRegistry {
    /// Convert `value` from one unit to another.
    ///
    /// Temperatures go through `temperature_formula`; everything else is
    /// `value * scale(from) / scale(to)`. Categories are not checked here:
    /// callers compare them first with `same_category`.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        if self.lookup_category(from) == Some(Category::Temperature) {
            let formula = temperature_formula(self.lookup_scale(from)?, self.lookup_scale(to)?);
            return Ok(formula(value));
        }

        Ok(value * self.lookup_scale(from)? / self.lookup_scale(to)?)
    }

    /// Convert and resolve both display names
    pub fn conversion(&self, value: f64, from: &str, to: &str) -> Result<ConversionResult, ConversionError> {
        let result = self.convert(value, from, to)?;
        Ok(ConversionResult {
            value,
            from: self.display_name(from, value == 1.0).to_string(),
            result,
            to: self.display_name(to, result == 1.0).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_temperature_fixed_points() {
        let reg = UnitRegistry::new();
        assert_eq!(reg.convert(0.0, "celsius", "fahrenheit").unwrap(), 32.0);
        assert_eq!(reg.convert(100.0, "celsius", "fahrenheit").unwrap(), 212.0);
        assert_eq!(reg.convert(37.0, "celsius", "fahrenheit").unwrap(), 98.6);
        assert_eq!(reg.convert(0.0, "celsius", "kelvin").unwrap(), 273.15);
        assert!(approx(reg.convert(32.0, "fahrenheit", "kelvin").unwrap(), 273.15));
        assert!(approx(reg.convert(212.0, "f", "c").unwrap(), 100.0));
        assert!(approx(reg.convert(273.15, "k", "dc").unwrap(), 0.0));
        assert!(approx(reg.convert(0.0, "kelvins", "df").unwrap(), -459.67));
    }

    #[test]
    fn test_temperature_same_scale_is_identity() {
        let reg = UnitRegistry::new();
        assert_eq!(reg.convert(-40.0, "c", "degrees celsius").unwrap(), -40.0);
        assert_eq!(reg.convert(451.0, "f", "f").unwrap(), 451.0);
        assert_eq!(reg.convert(3.5, "k", "kelvin").unwrap(), 3.5);
    }

    #[test]
    fn test_unrecognized_discriminant_falls_back_to_identity() {
        let formula = temperature_formula(1.0, 7.0);
        assert_eq!(formula(12.5), 12.5);
        let formula = temperature_formula(4.0, 4.0);
        assert_eq!(formula(-3.0), -3.0);
    }

    #[test]
    fn test_scale_discriminants() {
        assert_eq!(TemperatureScale::from_discriminant(2.0), Some(TemperatureScale::Fahrenheit));
        assert_eq!(TemperatureScale::from_discriminant(2.5), None);
        assert_eq!(TemperatureScale::Kelvin.discriminant(), 3.0);
    }

    #[test]
    fn test_linear_conversions() {
        let reg = UnitRegistry::new();
        assert_eq!(reg.convert(1.0, "km", "m").unwrap(), 1000.0);
        assert!(approx(reg.convert(1.0, "ft", "in").unwrap(), 12.0));
        assert!(approx(reg.convert(1.0, "lb", "g").unwrap(), 453.592));
        assert!(approx(reg.convert(1.0, "mi", "km").unwrap(), 1.60935));
    }

    #[test]
    fn test_self_conversion_identity() {
        let reg = UnitRegistry::new();
        for category in [Category::Length, Category::Weight] {
            for unit in reg.by_category(category) {
                let v = reg.convert(42.5, unit.symbol(), unit.symbol()).unwrap();
                assert_eq!(v, 42.5, "self conversion of {}", unit);
            }
        }
    }

    #[test]
    fn test_round_trip_linear() {
        let reg = UnitRegistry::new();
        for category in [Category::Length, Category::Weight] {
            let units = reg.by_category(category);
            for a in &units {
                for b in &units {
                    let there = reg.convert(123.456, a.symbol(), b.symbol()).unwrap();
                    let back = reg.convert(there, b.symbol(), a.symbol()).unwrap();
                    assert!(approx(back, 123.456), "{} -> {} -> {}: {}", a, b, a, back);
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit() {
        let reg = UnitRegistry::new();
        assert_eq!(
            reg.convert(1.0, "xyz", "m"),
            Err(ConversionError::UnknownUnit("xyz".to_string()))
        );
        assert_eq!(
            reg.convert(1.0, "m", "xyz"),
            Err(ConversionError::UnknownUnit("xyz".to_string()))
        );
        assert!(reg.convert(1.0, "celsius", "xyz").is_err());
    }

    #[test]
    fn test_conversion_names() {
        let reg = UnitRegistry::new();

        let r = reg.conversion(1.0, "km", "m").unwrap();
        assert_eq!(r.from, "kilometer");
        assert_eq!(r.to, "meters");
        assert_eq!(r.result, 1000.0);

        let r = reg.conversion(1000.0, "m", "km").unwrap();
        assert_eq!(r.from, "meters");
        assert_eq!(r.to, "kilometer");

        let r = reg.conversion(0.0, "c", "f").unwrap();
        assert_eq!(r.from, "degrees Celsius");
        assert_eq!(r.to, "degrees Fahrenheit");
    }
}
