use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Value of one field as read from (or written to) a form
///
/// Serialized in the value-tuple shape saved by the application:
/// `[value, unit_index]`, `[[x, y, z], unit_index]` or a bare `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Scalar(f64, usize),
    Position([f64; 3], usize),
}

impl FieldValue {
    pub fn unit_index(&self) -> Option<usize> {
        match self {
            FieldValue::Flag(_) => None,
            FieldValue::Scalar(_, index) | FieldValue::Position(_, index) => Some(*index),
        }
    }

    /// False when any number is NaN or infinite, which JSON cannot carry
    pub fn is_finite(&self) -> bool {
        match self {
            FieldValue::Flag(_) => true,
            FieldValue::Scalar(value, _) => value.is_finite(),
            FieldValue::Position(xyz, _) => xyz.iter().all(|v| v.is_finite()),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldValue::Flag(_) => "boolean",
            FieldValue::Scalar(..) => "scalar",
            FieldValue::Position(..) => "position",
        }
    }

    /// Same value as a text control would display it
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Flag(checked) => checked.to_string(),
            FieldValue::Scalar(value, index) => format!("({}, {})", format_number(*value), index),
            FieldValue::Position([x, y, z], index) => format!(
                "([{}, {}, {}], {})",
                format_number(*x),
                format_number(*y),
                format_number(*z),
                index
            ),
        }
    }

    pub(crate) fn to_json(self) -> serde_json::Value {
        match self {
            FieldValue::Flag(checked) => serde_json::Value::Bool(checked),
            FieldValue::Scalar(value, _) => serde_json::Value::from(value),
            FieldValue::Position(xyz, _) => {
                serde_json::Value::Array(xyz.iter().map(|v| serde_json::Value::from(*v)).collect())
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

/// Text a numeric control shows for `value`
/// Shortest representation that parses back to the same f64.
pub fn format_number(value: f64) -> String {
    format!("{:?}", value)
}

/// Read a numeric control's text; empty or malformed text reads as 0.0
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// label -> value mapping produced by `Form::get_values` and consumed by `Form::load_data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, FieldValue>);

impl FormValues {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, label: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(label.into(), value)
    }

    pub fn get(&self, label: &str) -> Option<&FieldValue> {
        self.0.get(label)
    }

    pub fn remove(&mut self, label: &str) -> Option<FieldValue> {
        self.0.remove(label)
    }

    pub fn contains_key(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.0.iter()
    }

    /// Label of the first value holding a NaN or infinite number
    pub fn first_non_finite(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(label, _)| label.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, FieldValue> {
        self.0
    }

    /// Equality as seen through the text controls (NaN equals NaN, -0.0 differs from 0.0)
    pub fn text_eq(&self, other: &FormValues) -> bool {
        self.len() == other.len()
            && self.iter().zip(other.iter()).all(|((la, va), (lb, vb))| {
                la == lb && va.display_text() == vb.display_text()
            })
    }
}

impl FromIterator<(String, FieldValue)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for FormValues {
    type Item = (String, FieldValue);
    type IntoIter = btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
