use crate::units::error::UnitError;
use crate::units::registry;
use crate::units::types::UnitCategory;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Number (optional sign, decimal, scientific notation) followed by a unit symbol
    /// Examples: "100 cm", "10.5 m", "1e3 Pa", "-40 °F", "12ft"
    /// A symbol may start with e/E only if it cannot be read as an exponent.
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*((?:[^\s\d.+\-eE]|[eE][^\d+\-]).*)$"
    ).unwrap();
}

/// A number paired with the unit symbol it was typed with
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub symbol: String,
}

/// Check if a string looks like a quantity with a unit
pub fn looks_like_quantity(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }
    QUANTITY_PATTERN.is_match(trimmed)
}

/// Split "12.5 ft" into its value and unit symbol
pub fn parse_quantity(s: &str) -> Option<Quantity> {
    let caps = QUANTITY_PATTERN.captures(s.trim())?;
    let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let symbol = caps.get(2)?.as_str().trim().to_string();
    Some(Quantity { value, symbol })
}

/// Parse a quantity and resolve its unit within `category`
/// Returns the raw value and the unit's index
pub fn resolve_quantity(category: UnitCategory, s: &str) -> Result<(f64, usize), UnitError> {
    let quantity = parse_quantity(s)
        .ok_or_else(|| UnitError::ParseError(format!("Not a quantity: '{}'", s)))?;
    let index =
        registry::find_unit(category, &quantity.symbol).ok_or_else(|| UnitError::UnknownUnit {
            category,
            symbol: quantity.symbol.clone(),
        })?;
    Ok((quantity.value, index))
}
