use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid qualified name '{value}': {reason}")]
    InvalidQualifiedName { value: String, reason: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl NameError {
    /// Short message suitable for printing to a terminal user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            NameError::IoError(e) => format!("Could not read file: {}", e),
            NameError::SerializationError(e) => format!("Could not encode output: {}", e),
            NameError::ConfigError { message } => format!("Bad configuration: {}", message),
            NameError::InvalidQualifiedName { value, reason } => {
                format!("'{}' is not a valid namespace/name ({})", value, reason)
            }
            NameError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NameError>;
