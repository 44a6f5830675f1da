use crate::config::error::ConfigError;
use crate::form::FormValues;
use std::path::Path;
use tracing::debug;

/// Read a saved label -> value-tuple mapping
pub fn load_values<P: AsRef<Path>>(path: P) -> Result<FormValues, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let values = load_values_from_str(&content)?;
    debug!(path = %path.display(), fields = values.len(), "values loaded");
    Ok(values)
}

pub fn load_values_from_str(content: &str) -> Result<FormValues, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Pretty JSON in the shape `load_values_from_str` reads
///
/// serde_json writes NaN and infinities as `null`, which does not read back, so
/// mappings holding them are refused.
pub fn values_to_json(values: &FormValues) -> Result<String, ConfigError> {
    if let Some(label) = values.first_non_finite() {
        return Err(ConfigError::NonFinite(label.to_string()));
    }
    Ok(serde_json::to_string_pretty(values)?)
}

/// Write a mapping in the same shape `load_values` reads
pub fn save_values<P: AsRef<Path>>(path: P, values: &FormValues) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let json = values_to_json(values)?;
    std::fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), fields = values.len(), "values saved");
    Ok(())
}
