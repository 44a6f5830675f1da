use crate::form::FormError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid form definition: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid value file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Field '{0}' holds a non-finite number, which a value file cannot store")]
    NonFinite(String),
    #[error("Field '{0}' needs a unit category")]
    MissingCategory(String),
    #[error("Field '{label}' is a {kind} field and cannot have a unit category")]
    UnexpectedCategory { label: String, kind: &'static str },
    #[error(transparent)]
    Form(#[from] FormError),
}
