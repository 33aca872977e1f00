//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value_object::ValueObject;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single rule violation, carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ValueObject for ValidationError {}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, identifiers). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more values failed validation.
    #[error("validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Validation failure carrying a single error.
    pub fn validation(error: ValidationError) -> Self {
        Self::Validation(vec![error])
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Validation errors carried by this error (empty for other kinds).
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            DomainError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ValidationError::message)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_all_messages() {
        let err = DomainError::Validation(vec![
            ValidationError::new("'name' Should not be null"),
            ValidationError::new("'slug' Should not be empty"),
        ]);

        assert_eq!(
            err.to_string(),
            "validation failed: 'name' Should not be null; 'slug' Should not be empty"
        );
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn non_validation_errors_carry_no_validation_errors() {
        let err = DomainError::invariant("updated_at precedes created_at");

        assert!(err.errors().is_empty());
        assert_eq!(err.to_string(), "invariant violated: updated_at precedes created_at");
    }

    #[test]
    fn validation_error_serializes_its_message() {
        let json = serde_json::to_value(ValidationError::new("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "boom" }));
    }
}
