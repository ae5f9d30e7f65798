//! Error types.
//!
//! Registry and settings failures are programmer or host errors and are
//! returned as `Err`. Field-level validation failures are never errors here;
//! they are collected into a `ValidationResult`.

use thiserror::Error;

/// Errors raised by the schema registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("schema '{0}' is already registered")]
    DuplicateSchema(String),

    #[error("schema '{0}' is not registered")]
    UnknownSchema(String),

    #[error("schema registry is frozen; cannot modify '{0}'")]
    Frozen(String),

    #[error("schema '{name}' is malformed: {reason}")]
    MalformedSchema { name: String, reason: String },
}

impl RegistryError {
    pub fn malformed(name: &str, reason: impl Into<String>) -> Self {
        RegistryError::MalformedSchema {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors raised by a settings store.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings store failure in namespace '{namespace}': {reason}")]
    Store { namespace: String, reason: String },

    #[error("settings serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_messages() {
        let err = RegistryError::DuplicateSchema("community".to_string());
        assert_eq!(err.to_string(), "schema 'community' is already registered");

        let err = RegistryError::malformed("Bad Name", "invalid name");
        assert_eq!(err.to_string(), "schema 'Bad Name' is malformed: invalid name");
    }
}
