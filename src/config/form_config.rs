use crate::config::error::ConfigError;
use crate::form::{FieldDescriptor, FieldKind, Form, DEFAULT_COLUMNS};
use crate::units::UnitCategory;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A form definition as written in a TOML file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,

    // TOML uses [[field]] array syntax
    #[serde(rename = "field", default)]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldConfigKind {
    #[default]
    Scalar,
    Boolean,
    Position,
    Heading,
}

impl FieldConfigKind {
    fn name(&self) -> &'static str {
        match self {
            FieldConfigKind::Scalar => "scalar",
            FieldConfigKind::Boolean => "boolean",
            FieldConfigKind::Position => "position",
            FieldConfigKind::Heading => "heading",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldConfig {
    pub label: String,

    #[serde(default)]
    pub kind: FieldConfigKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<UnitCategory>,

    // Dotted attribute path of the target model object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

impl FieldConfig {
    pub fn to_descriptor(&self) -> Result<FieldDescriptor, ConfigError> {
        let kind = match (self.kind, self.category) {
            (FieldConfigKind::Scalar, Some(c)) => FieldKind::Scalar(c),
            (FieldConfigKind::Position, Some(c)) => FieldKind::Position(c),
            (FieldConfigKind::Scalar | FieldConfigKind::Position, None) => {
                return Err(ConfigError::MissingCategory(self.label.clone()))
            }
            (FieldConfigKind::Boolean, None) => FieldKind::Boolean,
            (FieldConfigKind::Heading, None) => FieldKind::Heading,
            (kind @ (FieldConfigKind::Boolean | FieldConfigKind::Heading), Some(_)) => {
                return Err(ConfigError::UnexpectedCategory {
                    label: self.label.clone(),
                    kind: kind.name(),
                })
            }
        };

        let mut descriptor = FieldDescriptor::new(self.label.clone(), kind);
        descriptor.key = self.key.clone();
        Ok(descriptor)
    }
}

impl FormConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: FormConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn descriptors(&self) -> Result<Vec<FieldDescriptor>, ConfigError> {
        self.fields.iter().map(FieldConfig::to_descriptor).collect()
    }

    pub fn into_form(self) -> Result<Form, ConfigError> {
        let descriptors = self.descriptors()?;
        Ok(Form::with_columns(descriptors, self.columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldValue;

    const WING: &str = r#"
columns = 3

[[field]]
label = "Geometry"
kind = "heading"

[[field]]
label = "Span"
category = "length"
key = "wings.main_wing.spans.projected"

[[field]]
label = "Origin"
kind = "position"
category = "length"

[[field]]
label = "Symmetric"
kind = "boolean"
"#;

    #[test]
    fn test_load_form_definition() {
        let config = FormConfig::load_from_str(WING).unwrap();
        assert_eq!(config.columns, 3);

        let descriptors = config.descriptors().unwrap();
        assert_eq!(
            descriptors,
            vec![
                FieldDescriptor::heading("Geometry"),
                FieldDescriptor::scalar("Span", UnitCategory::Length)
                    .with_key("wings.main_wing.spans.projected"),
                FieldDescriptor::position("Origin", UnitCategory::Length),
                FieldDescriptor::boolean("Symmetric"),
            ]
        );

        let form = config.into_form().unwrap();
        assert_eq!(form.columns(), 3);
        assert_eq!(
            form.get_values().get("Symmetric"),
            Some(&FieldValue::Flag(false))
        );
    }

    #[test]
    fn test_columns_default() {
        let config = FormConfig::load_from_str("[[field]]\nlabel = \"On\"\nkind = \"boolean\"\n")
            .unwrap();
        assert_eq!(config.columns, DEFAULT_COLUMNS);
    }

    #[test]
    fn test_category_rules() {
        let missing = FormConfig::load_from_str("[[field]]\nlabel = \"Span\"\n").unwrap();
        assert!(matches!(
            missing.descriptors(),
            Err(ConfigError::MissingCategory(label)) if label == "Span"
        ));

        let unexpected = FormConfig::load_from_str(
            "[[field]]\nlabel = \"Flaps\"\nkind = \"boolean\"\ncategory = \"angle\"\n",
        )
        .unwrap();
        assert!(matches!(
            unexpected.descriptors(),
            Err(ConfigError::UnexpectedCategory { kind: "boolean", .. })
        ));
    }

    #[test]
    fn test_unknown_category_is_a_toml_error() {
        let result = FormConfig::load_from_str(
            "[[field]]\nlabel = \"Span\"\ncategory = \"furlongs\"\n",
        );
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_duplicate_labels_surface_as_form_error() {
        let config = FormConfig::load_from_str(
            "[[field]]\nlabel = \"A\"\nkind = \"boolean\"\n[[field]]\nlabel = \"A\"\nkind = \"boolean\"\n",
        )
        .unwrap();
        assert!(matches!(config.into_form(), Err(ConfigError::Form(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = FormConfig::load_from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
