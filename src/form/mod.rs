// Unit-aware forms: field descriptors, controls, bulk read/write of values

pub mod component;
pub mod descriptor;
pub mod error;
pub mod export;
pub mod layout;
pub mod render;
pub mod value;

#[cfg(test)]
mod tests;

pub use component::{Axis, Form, RoundTripReport, DEFAULT_COLUMNS};
pub use descriptor::{FieldDescriptor, FieldKind};
pub use error::FormError;
pub use export::{rekey, to_nested_json};
pub use layout::{FormLayout, Section};
pub use value::{format_number, parse_number, FieldValue, FormValues};
