// Unit registry, unit selectors and quantity parsing
// The registry is a read-only static table; selectors hold the per-field choice.

pub mod detector;
pub mod error;
pub mod registry;
pub mod selector;
pub mod types;

pub use detector::{looks_like_quantity, parse_quantity, resolve_quantity, Quantity};
pub use error::UnitError;
pub use registry::{categories, categories_for_symbol, convert, entries, find_unit, si_unit};
pub use selector::{UnitChange, UnitSelector};
pub use types::{Conversion, UnitCategory, UnitEntry};
