use crate::units::error::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical quantity a field is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Length,
    Area,
    Volume,
    Mass,
    Time,
    Velocity,
    Acceleration,
    Force,
    Energy,
    Current,
    Pressure,
    Temperature,
    Angle,
    Unitless,
    Count,
}

impl UnitCategory {
    /// Every category, in registry order
    pub const ALL: [UnitCategory; 15] = [
        UnitCategory::Length,
        UnitCategory::Area,
        UnitCategory::Volume,
        UnitCategory::Mass,
        UnitCategory::Time,
        UnitCategory::Velocity,
        UnitCategory::Acceleration,
        UnitCategory::Force,
        UnitCategory::Energy,
        UnitCategory::Current,
        UnitCategory::Pressure,
        UnitCategory::Temperature,
        UnitCategory::Angle,
        UnitCategory::Unitless,
        UnitCategory::Count,
    ];

    /// Config-file name of the category (e.g. "length")
    pub fn name(&self) -> &'static str {
        match self {
            UnitCategory::Length => "length",
            UnitCategory::Area => "area",
            UnitCategory::Volume => "volume",
            UnitCategory::Mass => "mass",
            UnitCategory::Time => "time",
            UnitCategory::Velocity => "velocity",
            UnitCategory::Acceleration => "acceleration",
            UnitCategory::Force => "force",
            UnitCategory::Energy => "energy",
            UnitCategory::Current => "current",
            UnitCategory::Pressure => "pressure",
            UnitCategory::Temperature => "temperature",
            UnitCategory::Angle => "angle",
            UnitCategory::Unitless => "unitless",
            UnitCategory::Count => "count",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitCategory {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        UnitCategory::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnitError::UnknownCategory(s.to_string()))
    }
}

/// Affine map from a unit into its category's SI unit: `si = value * scale + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub scale: f64,
    pub offset: f64,
}

impl Conversion {
    pub const IDENTITY: Conversion = Conversion::linear(1.0);

    pub const fn linear(scale: f64) -> Self {
        Self { scale, offset: 0.0 }
    }

    pub const fn affine(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    pub fn to_si(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Inverse of [`Conversion::to_si`]; registered scales are never zero
    pub fn from_si(&self, value: f64) -> f64 {
        (value - self.offset) / self.scale
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0
    }
}

/// One selectable unit of a category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitEntry {
    /// Display symbol (e.g. "cm")
    pub symbol: &'static str,
    /// Long name (e.g. "centimeter")
    pub name: &'static str,
    pub conversion: Conversion,
}

impl UnitEntry {
    pub const fn linear(symbol: &'static str, name: &'static str, scale: f64) -> Self {
        Self {
            symbol,
            name,
            conversion: Conversion::linear(scale),
        }
    }

    pub const fn affine(symbol: &'static str, name: &'static str, scale: f64, offset: f64) -> Self {
        Self {
            symbol,
            name,
            conversion: Conversion::affine(scale, offset),
        }
    }

    pub fn to_si(&self, value: f64) -> f64 {
        self.conversion.to_si(value)
    }

    pub fn from_si(&self, value: f64) -> f64 {
        self.conversion.from_si(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names_parse_back() {
        for category in UnitCategory::ALL {
            assert_eq!(category.name().parse::<UnitCategory>().unwrap(), category);
        }
        assert_eq!("Pressure".parse::<UnitCategory>().unwrap(), UnitCategory::Pressure);
        assert!(matches!(
            "boolean".parse::<UnitCategory>(),
            Err(UnitError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_serde_name() {
        let json = serde_json::to_string(&UnitCategory::Temperature).unwrap();
        assert_eq!(json, "\"temperature\"");
        let back: UnitCategory = serde_json::from_str("\"angle\"").unwrap();
        assert_eq!(back, UnitCategory::Angle);
    }

    #[test]
    fn test_affine_conversion_inverts() {
        let fahrenheit = Conversion::affine(5.0 / 9.0, 273.15 - 32.0 * 5.0 / 9.0);
        let kelvin = fahrenheit.to_si(212.0);
        assert!((kelvin - 373.15).abs() < 1e-9);
        assert!((fahrenheit.from_si(kelvin) - 212.0).abs() < 1e-9);
        assert!(Conversion::IDENTITY.is_identity());
        assert!(!fahrenheit.is_identity());
    }
}
