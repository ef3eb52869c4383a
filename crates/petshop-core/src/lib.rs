//! # petshop-core: Pure Domain Logic for the Pet Shop
//!
//! This crate holds the entity types and the rules that govern them, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pet Shop Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (forms, lists, dashboard)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/petshop commands                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                petshop-store (the Store)                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ petshop-core (THIS CRATE) ★                     │   │
//! │  │   types • validation • workflow • query • error                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Customer, Pet, Appointment and their drafts
//! - [`workflow`] - Appointment status state machine
//! - [`validation`] - Field rules
//! - [`query`] - Today filter, list ordering, search predicates
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use petshop_core::AppointmentStatus;
//!
//! let status = AppointmentStatus::Scheduled
//!     .transition(AppointmentStatus::InProgress)
//!     .unwrap();
//! assert!(status.transition(AppointmentStatus::Scheduled).is_err());
//! ```

pub mod error;
pub mod query;
pub mod types;
pub mod validation;
pub mod workflow;

pub use error::{TransitionError, ValidationError, ValidationErrors};
pub use types::*;

// =============================================================================
// Field Limits
// =============================================================================

pub const MAX_CUSTOMER_NAME_LEN: usize = 100;
pub const MAX_EMAIL_LEN: usize = 255;
pub const MAX_ADDRESS_LEN: usize = 200;
pub const MAX_PET_NAME_LEN: usize = 50;
pub const MAX_BREED_LEN: usize = 50;
/// Applies to pet and appointment notes alike.
pub const MAX_NOTES_LEN: usize = 500;
/// Years.
pub const MAX_PET_AGE: u32 = 100;
/// Kilograms.
pub const MAX_PET_WEIGHT: f64 = 500.0;
