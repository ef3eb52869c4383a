//! # Error Types
//!
//! Domain-specific error types for petshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  petshop-core errors (this file)                                       │
//! │  ├── ValidationError   - One field failing one rule                    │
//! │  ├── ValidationErrors  - Every failing field of one payload            │
//! │  └── TransitionError   - Illegal appointment status change             │
//! │                                                                         │
//! │  petshop-store errors (separate crate)                                 │
//! │  └── StoreError        - NotFound / Validation / InvalidTransition     │
//! │                                                                         │
//! │  App errors                                                             │
//! │  └── ApiError          - What the presentation layer sees (serialized) │
//! │                                                                         │
//! │  Flow: ValidationErrors → StoreError → ApiError → Form / Toast         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::AppointmentStatus;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field failing a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., phone, email, time, date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Reference to an entity that does not exist.
    #[error("{field} references unknown record '{id}'")]
    UnknownReference { field: String, id: String },

    /// The pet on an appointment is not owned by the appointment's customer.
    #[error("{field} '{pet_id}' does not belong to customer '{customer_id}'")]
    OwnerMismatch {
        field: String,
        pet_id: String,
        customer_id: String,
    },
}

impl ValidationError {
    /// Name of the offending field, as the form layer knows it.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotAllowed { field, .. }
            | ValidationError::UnknownReference { field, .. }
            | ValidationError::OwnerMismatch { field, .. } => field,
        }
    }
}

// =============================================================================
// Validation Errors (aggregate)
// =============================================================================

/// Every field rule a payload violated.
///
/// Payload validators keep going after the first failure so the form can mark
/// all bad inputs at once. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {}", join_messages(.0))]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wraps the collected errors, or returns `None` if there are none.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(ValidationErrors(errors))
        }
    }

    /// Field names in the order they failed (duplicates removed).
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::with_capacity(self.0.len());
        for err in &self.0 {
            if !fields.contains(&err.field()) {
                fields.push(err.field());
            }
        }
        fields
    }

    /// Returns true if `field` is among the failures.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        ValidationErrors(vec![err])
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Transition Error
// =============================================================================

/// An appointment status change outside the workflow table.
///
/// ## When This Occurs
/// - Leaving a terminal state (`completed`, `cancelled`)
/// - Skipping a step (`scheduled -> completed`)
/// - Going backwards (`in-progress -> scheduled`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot change appointment status from {from} to {to}")]
pub struct TransitionError {
    pub from: AppointmentStatus,
    pub to: AppointmentStatus,
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        };
        assert_eq!(err.to_string(), "name must be at most 100 characters");
    }

    #[test]
    fn test_validation_errors_collects_fields() {
        let errors = ValidationErrors::from_vec(vec![
            ValidationError::Required {
                field: "name".to_string(),
            },
            ValidationError::InvalidFormat {
                field: "email".to_string(),
                reason: "must be a valid email address".to_string(),
            },
            ValidationError::TooLong {
                field: "email".to_string(),
                max: 255,
            },
        ])
        .unwrap();

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.fields(), vec!["name", "email"]);
        assert!(errors.has_field("email"));
        assert!(!errors.has_field("phone"));
        assert!(errors.to_string().starts_with("invalid input: name is required; "));
    }

    #[test]
    fn test_empty_validation_errors_is_none() {
        assert!(ValidationErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_transition_error_message() {
        let err = TransitionError {
            from: AppointmentStatus::Completed,
            to: AppointmentStatus::Scheduled,
        };
        assert_eq!(
            err.to_string(),
            "cannot change appointment status from completed to scheduled"
        );
    }
}
