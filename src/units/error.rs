use crate::units::types::UnitCategory;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("Invalid unit index {index} for {category} (expected 0..{len})")]
    InvalidUnitIndex {
        category: UnitCategory,
        index: usize,
        len: usize,
    },
    #[error("Unknown unit '{symbol}' for {category}")]
    UnknownUnit {
        category: UnitCategory,
        symbol: String,
    },
    #[error("Unknown unit category: {0}")]
    UnknownCategory(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
