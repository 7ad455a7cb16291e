// Copyright 2025 Cowboy AI, LLC.

//! Error types for category construction
//!
//! Only construction can fail with an error. Law violations are reported as
//! entries of a [`VerificationResult`](crate::verification::VerificationResult)
//! and inapplicable operations return `None` or an empty collection.

use thiserror::Error;

/// Errors that can occur while building category entities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// A required identifier, name or reference was empty
    #[error("Validation error: {entity} field '{field}' must not be empty")]
    Validation {
        /// Kind of entity being constructed
        entity: &'static str,
        /// Name of the offending field
        field: &'static str,
    },

    /// Two entities of the same kind share an id within one snapshot
    #[error("Duplicate {entity} id: {id}")]
    DuplicateId {
        /// Kind of entity
        entity: &'static str,
        /// The repeated id
        id: String,
    },
}

/// Result type for category operations
pub type CategoryResult<T> = Result<T, CategoryError>;

impl CategoryError {
    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, CategoryError::Validation { .. })
    }

    /// Name of the entity kind the error refers to
    pub fn entity(&self) -> &'static str {
        match self {
            CategoryError::Validation { entity, .. } | CategoryError::DuplicateId { entity, .. } => {
                *entity
            }
        }
    }
}

/// Fail with a [`CategoryError::Validation`] when `value` is empty.
pub(crate) fn require_non_empty(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> CategoryResult<()> {
    if value.is_empty() {
        return Err(CategoryError::Validation { entity, field });
    }
    Ok(())
}
