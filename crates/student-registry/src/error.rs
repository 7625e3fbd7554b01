//! Error types for the Registry.

use student_registry_core::FieldErrors;
use student_registry_store::StoreError;
use thiserror::Error;

/// Errors that can occur during Registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// One or more fields failed validation.
    #[error("validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RegistryError {
    /// The per-field errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            RegistryError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Result type for Registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
