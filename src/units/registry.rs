// Static unit tables for every category
// Index 0 of each table is the category's SI unit; table order is the index space
// used by selectors, saved value files and the form.

use crate::units::error::UnitError;
use crate::units::types::{UnitCategory, UnitEntry};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::f64::consts::PI;

const FOOT: f64 = 0.3048;
const INCH: f64 = 0.0254;
const POUND: f64 = 0.45359237;
const STANDARD_GRAVITY: f64 = 9.80665;
const RANKINE: f64 = 5.0 / 9.0;

static LENGTH: &[UnitEntry] = &[
    UnitEntry::linear("m", "meter", 1.0),
    UnitEntry::linear("cm", "centimeter", 0.01),
    UnitEntry::linear("mm", "millimeter", 0.001),
    UnitEntry::linear("km", "kilometer", 1000.0),
    UnitEntry::linear("in", "inch", INCH),
    UnitEntry::linear("ft", "foot", FOOT),
    UnitEntry::linear("mi", "mile", 1609.344),
    UnitEntry::linear("nmi", "nautical mile", 1852.0),
];

static AREA: &[UnitEntry] = &[
    UnitEntry::linear("m²", "square meter", 1.0),
    UnitEntry::linear("cm²", "square centimeter", 1e-4),
    UnitEntry::linear("mm²", "square millimeter", 1e-6),
    UnitEntry::linear("km²", "square kilometer", 1e6),
    UnitEntry::linear("in²", "square inch", INCH * INCH),
    UnitEntry::linear("ft²", "square foot", FOOT * FOOT),
];

static VOLUME: &[UnitEntry] = &[
    UnitEntry::linear("m³", "cubic meter", 1.0),
    UnitEntry::linear("L", "liter", 1e-3),
    UnitEntry::linear("cm³", "cubic centimeter", 1e-6),
    UnitEntry::linear("in³", "cubic inch", INCH * INCH * INCH),
    UnitEntry::linear("ft³", "cubic foot", FOOT * FOOT * FOOT),
    UnitEntry::linear("gal", "US gallon", 0.003785411784),
];

static MASS: &[UnitEntry] = &[
    UnitEntry::linear("kg", "kilogram", 1.0),
    UnitEntry::linear("g", "gram", 1e-3),
    UnitEntry::linear("lb", "pound", POUND),
    UnitEntry::linear("slug", "slug", 14.593902937206364),
    UnitEntry::linear("t", "tonne", 1000.0),
];

static TIME: &[UnitEntry] = &[
    UnitEntry::linear("s", "second", 1.0),
    UnitEntry::linear("ms", "millisecond", 1e-3),
    UnitEntry::linear("min", "minute", 60.0),
    UnitEntry::linear("h", "hour", 3600.0),
    UnitEntry::linear("day", "day", 86400.0),
];

static VELOCITY: &[UnitEntry] = &[
    UnitEntry::linear("m/s", "meter per second", 1.0),
    UnitEntry::linear("km/h", "kilometer per hour", 1.0 / 3.6),
    UnitEntry::linear("ft/s", "foot per second", FOOT),
    UnitEntry::linear("mph", "mile per hour", 0.44704),
    UnitEntry::linear("kn", "knot", 1852.0 / 3600.0),
];

static ACCELERATION: &[UnitEntry] = &[
    UnitEntry::linear("m/s²", "meter per second squared", 1.0),
    UnitEntry::linear("ft/s²", "foot per second squared", FOOT),
    UnitEntry::linear("g₀", "standard gravity", STANDARD_GRAVITY),
];

static FORCE: &[UnitEntry] = &[
    UnitEntry::linear("N", "newton", 1.0),
    UnitEntry::linear("kN", "kilonewton", 1000.0),
    UnitEntry::linear("lbf", "pound-force", POUND * STANDARD_GRAVITY),
];

static ENERGY: &[UnitEntry] = &[
    UnitEntry::linear("J", "joule", 1.0),
    UnitEntry::linear("kJ", "kilojoule", 1000.0),
    UnitEntry::linear("kWh", "kilowatt hour", 3.6e6),
    UnitEntry::linear("BTU", "british thermal unit", 1055.05585262),
    UnitEntry::linear("cal", "calorie", 4.184),
];

static CURRENT: &[UnitEntry] = &[
    UnitEntry::linear("A", "ampere", 1.0),
    UnitEntry::linear("mA", "milliampere", 1e-3),
];

static PRESSURE: &[UnitEntry] = &[
    UnitEntry::linear("Pa", "pascal", 1.0),
    UnitEntry::linear("kPa", "kilopascal", 1000.0),
    UnitEntry::linear("bar", "bar", 1e5),
    UnitEntry::linear("atm", "atmosphere", 101325.0),
    UnitEntry::linear("psi", "pound per square inch", POUND * STANDARD_GRAVITY / (INCH * INCH)),
    UnitEntry::linear("psf", "pound per square foot", POUND * STANDARD_GRAVITY / (FOOT * FOOT)),
];

static TEMPERATURE: &[UnitEntry] = &[
    UnitEntry::linear("K", "kelvin", 1.0),
    UnitEntry::affine("°C", "celsius", 1.0, 273.15),
    UnitEntry::affine("°F", "fahrenheit", RANKINE, 273.15 - 32.0 * RANKINE),
    UnitEntry::linear("°R", "rankine", RANKINE),
];

static ANGLE: &[UnitEntry] = &[
    UnitEntry::linear("rad", "radian", 1.0),
    UnitEntry::linear("deg", "degree", PI / 180.0),
];

static UNITLESS: &[UnitEntry] = &[
    UnitEntry::linear("-", "unitless", 1.0),
    UnitEntry::linear("%", "percent", 0.01),
];

static COUNT: &[UnitEntry] = &[UnitEntry::linear("count", "count", 1.0)];

/// Ordered units of a category; index 0 is the SI unit
pub fn entries(category: UnitCategory) -> &'static [UnitEntry] {
    match category {
        UnitCategory::Length => LENGTH,
        UnitCategory::Area => AREA,
        UnitCategory::Volume => VOLUME,
        UnitCategory::Mass => MASS,
        UnitCategory::Time => TIME,
        UnitCategory::Velocity => VELOCITY,
        UnitCategory::Acceleration => ACCELERATION,
        UnitCategory::Force => FORCE,
        UnitCategory::Energy => ENERGY,
        UnitCategory::Current => CURRENT,
        UnitCategory::Pressure => PRESSURE,
        UnitCategory::Temperature => TEMPERATURE,
        UnitCategory::Angle => ANGLE,
        UnitCategory::Unitless => UNITLESS,
        UnitCategory::Count => COUNT,
    }
}

pub fn categories() -> &'static [UnitCategory] {
    &UnitCategory::ALL
}

/// SI entry of a category
pub fn si_unit(category: UnitCategory) -> &'static UnitEntry {
    &entries(category)[0]
}

pub fn entry(category: UnitCategory, index: usize) -> Result<&'static UnitEntry, UnitError> {
    let table = entries(category);
    table.get(index).ok_or(UnitError::InvalidUnitIndex {
        category,
        index,
        len: table.len(),
    })
}

lazy_static! {
    /// ASCII spellings accepted for symbols that are awkward to type
    static ref ALIASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("m2", "m²");
        m.insert("m^2", "m²");
        m.insert("cm2", "cm²");
        m.insert("mm2", "mm²");
        m.insert("km2", "km²");
        m.insert("in2", "in²");
        m.insert("ft2", "ft²");
        m.insert("sqft", "ft²");
        m.insert("m3", "m³");
        m.insert("m^3", "m³");
        m.insert("cm3", "cm³");
        m.insert("in3", "in³");
        m.insert("ft3", "ft³");
        m.insert("l", "L");
        m.insert("lbm", "lb");
        m.insert("kt", "kn");
        m.insert("kts", "kn");
        m.insert("m/s2", "m/s²");
        m.insert("m/s^2", "m/s²");
        m.insert("ft/s2", "ft/s²");
        m.insert("ft/s^2", "ft/s²");
        m.insert("g0", "g₀");
        m.insert("C", "°C");
        m.insert("degC", "°C");
        m.insert("F", "°F");
        m.insert("degF", "°F");
        m.insert("R", "°R");
        m.insert("degR", "°R");
        m.insert("°", "deg");
        m
    };

    /// symbol -> every (category, index) it names
    static ref SYMBOL_INDEX: HashMap<&'static str, Vec<(UnitCategory, usize)>> = {
        let mut m: HashMap<&'static str, Vec<(UnitCategory, usize)>> = HashMap::new();
        for category in UnitCategory::ALL {
            for (index, unit) in entries(category).iter().enumerate() {
                m.entry(unit.symbol).or_default().push((category, index));
            }
        }
        m
    };
}

fn canonical_symbol(symbol: &str) -> &str {
    let trimmed = symbol.trim();
    ALIASES.get(trimmed).copied().unwrap_or(trimmed)
}

/// Index of the unit named `symbol` in `category`
/// Accepts the display symbol, an ASCII alias or the long name (case-insensitive)
pub fn find_unit(category: UnitCategory, symbol: &str) -> Option<usize> {
    let wanted = canonical_symbol(symbol);
    let table = entries(category);
    table
        .iter()
        .position(|u| u.symbol == wanted)
        .or_else(|| {
            table
                .iter()
                .position(|u| u.name.eq_ignore_ascii_case(wanted))
        })
}

/// Every (category, index) pair whose symbol matches `symbol`
pub fn categories_for_symbol(symbol: &str) -> Vec<(UnitCategory, usize)> {
    SYMBOL_INDEX
        .get(canonical_symbol(symbol))
        .cloned()
        .unwrap_or_default()
}

/// Convert `value` between two units of the same category, through SI
pub fn convert(
    category: UnitCategory,
    value: f64,
    from_index: usize,
    to_index: usize,
) -> Result<f64, UnitError> {
    let from = entry(category, from_index)?;
    let to = entry(category, to_index)?;
    Ok(to.from_si(from.to_si(value)))
}
