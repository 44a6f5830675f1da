use crate::units::UnitCategory;
use serde::{Deserialize, Serialize};

/// What kind of control a field is rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "category", rename_all = "lowercase")]
pub enum FieldKind {
    /// Text entry + unit picker
    Scalar(UnitCategory),
    /// Checkbox
    Boolean,
    /// x/y/z text entries sharing one unit picker
    Position(UnitCategory),
    /// Section title; carries no value
    Heading,
}

impl FieldKind {
    /// Unit category of the field's selector, if it has one
    pub fn category(&self) -> Option<UnitCategory> {
        match self {
            FieldKind::Scalar(c) | FieldKind::Position(c) => Some(*c),
            FieldKind::Boolean | FieldKind::Heading => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Scalar(_) => "scalar",
            FieldKind::Boolean => "boolean",
            FieldKind::Position(_) => "position",
            FieldKind::Heading => "heading",
        }
    }

    pub fn carries_value(&self) -> bool {
        !matches!(self, FieldKind::Heading)
    }
}

/// One entry of a form's field list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldDescriptor {
    pub label: String,
    pub kind: FieldKind,
    /// Dotted attribute path used when the value is written into a downstream
    /// object (e.g. "wings.main_wing.spans.projected"); passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl FieldDescriptor {
    pub fn new(label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            label: label.into(),
            kind,
            key: None,
        }
    }

    pub fn scalar(label: impl Into<String>, category: UnitCategory) -> Self {
        Self::new(label, FieldKind::Scalar(category))
    }

    pub fn boolean(label: impl Into<String>) -> Self {
        Self::new(label, FieldKind::Boolean)
    }

    pub fn position(label: impl Into<String>, category: UnitCategory) -> Self {
        Self::new(label, FieldKind::Position(category))
    }

    pub fn heading(label: impl Into<String>) -> Self {
        Self::new(label, FieldKind::Heading)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Key the value is exported under: the canonical key, or the label without one
    pub fn export_key(&self) -> &str {
        self.key.as_deref().unwrap_or(&self.label)
    }
}
