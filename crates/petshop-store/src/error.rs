//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationErrors / TransitionError (petshop-core)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds NotFound                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in app) ← Serialized for the presentation layer             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failing operation leaves all three collections untouched.

use std::fmt;

use petshop_core::{TransitionError, ValidationErrors};
use thiserror::Error;

/// The collection an id was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Customer,
    Pet,
    Appointment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Customer => "Customer",
            EntityKind::Pet => "Pet",
            EntityKind::Appointment => "Appointment",
        })
    }
}

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id is absent from the relevant collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: String },

    /// The payload broke one or more field rules, or referenced a missing
    /// customer/pet.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// The requested status is not reachable from the current one.
    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: EntityKind, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use petshop_core::{AppointmentStatus, ValidationError};

    #[test]
    fn test_error_messages() {
        let err = StoreError::not_found(EntityKind::Pet, "abc");
        assert_eq!(err.to_string(), "Pet not found: abc");

        let err: StoreError = TransitionError {
            from: AppointmentStatus::Cancelled,
            to: AppointmentStatus::InProgress,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "cannot change appointment status from cancelled to in-progress"
        );
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let errors: ValidationErrors = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        let err: StoreError = errors.into();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
