use crate::units::UnitError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Missing field '{0}' in supplied data")]
    MissingField(String),
    #[error("Unknown field '{0}'")]
    UnknownField(String),
    #[error("Field '{label}' expects a {expected} value")]
    KindMismatch { label: String, expected: &'static str },
    #[error("Duplicate field label '{0}'")]
    DuplicateLabel(String),
    #[error("Key '{0}' is used both as a value and as a parent of other keys")]
    KeyConflict(String),
    #[error("Field '{label}': {source}")]
    Unit {
        label: String,
        #[source]
        source: UnitError,
    },
}

impl FormError {
    pub(crate) fn unit(label: &str, source: UnitError) -> Self {
        FormError::Unit {
            label: label.to_string(),
            source,
        }
    }
}
