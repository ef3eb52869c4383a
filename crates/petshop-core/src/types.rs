//! # Domain Types
//!
//! Core domain types used throughout the Pet Shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │◄──│      Pet        │◄──│  Appointment    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  name           │   │  customer_id    │   │  pet_id         │       │
//! │  │  email, phone   │   │  species        │   │  customer_id    │       │
//! │  │  address?       │   │  age, weight    │   │  service        │       │
//! │  └─────────────────┘   └─────────────────┘   │  date, time     │       │
//! │                                              │  status         │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Entity vs Draft
//! Every entity has a matching `*Draft` holding only its mutable fields.
//! The store assigns `id` and `created_at`; drafts never carry them, so an
//! update can't touch identity.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Species
// =============================================================================

/// Kind of animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::Dog,
        Species::Cat,
        Species::Bird,
        Species::Rabbit,
        Species::Other,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Bird => "bird",
            Species::Rabbit => "rabbit",
            Species::Other => "other",
        }
    }

    /// Label shown in the pet list.
    pub const fn label(&self) -> &'static str {
        match self {
            Species::Dog => "Cachorro",
            Species::Cat => "Gato",
            Species::Bird => "Pássaro",
            Species::Rabbit => "Coelho",
            Species::Other => "Outro",
        }
    }
}

// =============================================================================
// Service Type
// =============================================================================

/// Service booked for an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Grooming,
    Bath,
    Veterinary,
    Vaccination,
    Consultation,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Grooming,
        ServiceType::Bath,
        ServiceType::Veterinary,
        ServiceType::Vaccination,
        ServiceType::Consultation,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Grooming => "grooming",
            ServiceType::Bath => "bath",
            ServiceType::Veterinary => "veterinary",
            ServiceType::Vaccination => "vaccination",
            ServiceType::Consultation => "consultation",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ServiceType::Grooming => "Tosa",
            ServiceType::Bath => "Banho",
            ServiceType::Veterinary => "Veterinário",
            ServiceType::Vaccination => "Vacinação",
            ServiceType::Consultation => "Consulta",
        }
    }
}

// =============================================================================
// Appointment Status
// =============================================================================

/// Where an appointment is in its lifecycle.
///
/// Transitions are defined in [`crate::workflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    /// Booked, not started yet.
    #[default]
    Scheduled,
    /// Pet is being attended.
    InProgress,
    /// Service finished (terminal).
    Completed,
    /// Appointment called off (terminal).
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::InProgress,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::InProgress => "in-progress",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Agendado",
            AppointmentStatus::InProgress => "Em Andamento",
            AppointmentStatus::Completed => "Concluído",
            AppointmentStatus::Cancelled => "Cancelado",
        }
    }
}

// =============================================================================
// String Conversions
// =============================================================================
// Form payloads arrive as strings. Unknown values become a NotAllowed error
// naming the form field.

macro_rules! impl_wire_str {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| ValidationError::NotAllowed {
                        field: $field.to_string(),
                        allowed: <$ty>::ALL.iter().map(|v| v.as_str().to_string()).collect(),
                    })
            }
        }
    };
}

impl_wire_str!(Species, "species");
impl_wire_str!(ServiceType, "service");
impl_wire_str!(AppointmentStatus, "status");

// =============================================================================
// Customer
// =============================================================================

/// A pet owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    /// Unique identifier (UUID v4), assigned by the store.
    pub id: String,
    pub name: String,
    pub email: String,
    /// Brazilian format: `(DD) DDDDD-DDDD` or `(DD) DDDD-DDDD`.
    pub phone: String,
    pub address: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Mutable fields of a [`Customer`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

impl Customer {
    /// Overwrites every mutable field. `id` and `created_at` stay.
    pub fn apply(&mut self, draft: CustomerDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
        self.address = draft.address;
    }
}

// =============================================================================
// Pet
// =============================================================================

/// An animal owned by exactly one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pet {
    pub id: String,
    /// Owner.
    pub customer_id: String,
    pub name: String,
    pub species: Species,
    pub breed: String,
    /// Age in years.
    pub age: u32,
    /// Weight in kilograms.
    pub weight: f64,
    pub notes: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Mutable fields of a [`Pet`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDraft {
    pub customer_id: String,
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub age: u32,
    pub weight: f64,
    pub notes: String,
}

impl Pet {
    pub fn apply(&mut self, draft: PetDraft) {
        self.customer_id = draft.customer_id;
        self.name = draft.name;
        self.species = draft.species;
        self.breed = draft.breed;
        self.age = draft.age;
        self.weight = draft.weight;
        self.notes = draft.notes;
    }

    /// Breed if known, otherwise the species label.
    pub fn description(&self) -> &str {
        if self.breed.is_empty() {
            self.species.label()
        } else {
            &self.breed
        }
    }
}

// =============================================================================
// Appointment
// =============================================================================

/// A booked service for one pet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    pub id: String,
    pub pet_id: String,
    pub customer_id: String,
    pub service: ServiceType,
    /// Calendar day of the appointment.
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// `HH:MM`, 24-hour, zero padded (so string order is time order).
    pub time: String,
    pub status: AppointmentStatus,
    pub notes: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Mutable fields of an [`Appointment`].
///
/// Status is not part of the draft: new appointments start `scheduled` and
/// only move through the status workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    pub pet_id: String,
    pub customer_id: String,
    pub service: ServiceType,
    pub date: NaiveDate,
    pub time: String,
    pub notes: String,
}

impl Appointment {
    pub fn apply(&mut self, draft: AppointmentDraft) {
        self.pet_id = draft.pet_id;
        self.customer_id = draft.customer_id;
        self.service = draft.service;
        self.date = draft.date;
        self.time = draft.time;
        self.notes = draft.notes;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_default() {
        assert_eq!(AppointmentStatus::default(), AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_status_wire_spelling() {
        let json = serde_json::to_string(&AppointmentStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let parsed: AppointmentStatus = "in-progress".parse().unwrap();
        assert_eq!(parsed, AppointmentStatus::InProgress);
    }

    #[test]
    fn test_unknown_species_names_field() {
        let err = "dragon".parse::<Species>().unwrap_err();
        assert_eq!(err.field(), "species");
        assert!(matches!(err, ValidationError::NotAllowed { ref allowed, .. } if allowed.len() == 5));
    }

    #[test]
    fn test_service_parse_trims() {
        assert_eq!(" bath ".parse::<ServiceType>().unwrap(), ServiceType::Bath);
        assert!("haircut".parse::<ServiceType>().is_err());
    }

    #[test]
    fn test_pet_description_falls_back_to_species() {
        let mut pet = Pet {
            id: "p1".to_string(),
            customer_id: "c1".to_string(),
            name: "Mel".to_string(),
            species: Species::Rabbit,
            breed: String::new(),
            age: 1,
            weight: 2.0,
            notes: String::new(),
            created_at: Utc::now(),
        };
        assert_eq!(pet.description(), "Coelho");

        pet.breed = "Holland Lop".to_string();
        assert_eq!(pet.description(), "Holland Lop");
    }
}
