// Form definition files (TOML) and saved value files (JSON)

pub mod error;
pub mod form_config;
pub mod values;

pub use error::ConfigError;
pub use form_config::{FieldConfig, FieldConfigKind, FormConfig};
pub use values::{load_values, load_values_from_str, save_values, values_to_json};
