// Re-keying of form values for downstream model objects
// Fields with a canonical key are exported under that dotted path, fields without
// one under their label.

use crate::form::component::Form;
use crate::form::descriptor::FieldDescriptor;
use crate::form::error::FormError;
use crate::form::value::FormValues;
use serde_json::{Map, Value};

fn path_of(descriptor: &FieldDescriptor) -> Vec<&str> {
    match &descriptor.key {
        Some(key) => key.split('.').collect(),
        None => vec![descriptor.label.as_str()],
    }
}

/// Re-key a label-keyed mapping by each field's canonical key
///
/// Two fields exporting under the same key fail with `KeyConflict`.
pub fn rekey<'a, I>(values: &FormValues, descriptors: I) -> Result<FormValues, FormError>
where
    I: IntoIterator<Item = &'a FieldDescriptor>,
{
    let mut rekeyed = FormValues::new();
    for descriptor in descriptors {
        let Some(value) = values.get(&descriptor.label) else {
            continue;
        };
        let key = descriptor.export_key();
        if rekeyed.insert(key, *value).is_some() {
            return Err(FormError::KeyConflict(key.to_string()));
        }
    }
    Ok(rekeyed)
}

/// Expand dotted canonical keys into nested JSON objects
///
/// Scalars become numbers, positions `[x, y, z]` arrays and booleans bools; unit
/// indices are dropped, so pass SI values.
pub fn to_nested_json<'a, I>(values: &FormValues, descriptors: I) -> Result<Value, FormError>
where
    I: IntoIterator<Item = &'a FieldDescriptor>,
{
    let mut root = Map::new();
    for descriptor in descriptors {
        let Some(value) = values.get(&descriptor.label) else {
            continue;
        };
        let path = path_of(descriptor);
        let conflict = || FormError::KeyConflict(descriptor.export_key().to_string());
        let Some((leaf, parents)) = path.split_last() else {
            continue;
        };

        let mut node = &mut root;
        for segment in parents {
            let child = node
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            node = match child {
                Value::Object(map) => map,
                _ => return Err(conflict()),
            };
        }
        if node.contains_key(*leaf) {
            return Err(conflict());
        }
        node.insert(leaf.to_string(), value.to_json());
    }
    Ok(Value::Object(root))
}

impl Form {
    /// SI values nested by canonical key, ready to hand to a model constructor
    pub fn export_si(&self) -> Result<Value, FormError> {
        to_nested_json(&self.get_values_si(), self.descriptors())
    }
}
