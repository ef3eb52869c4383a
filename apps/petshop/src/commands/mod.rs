//! # Commands
//!
//! The operations the screens invoke. Each takes the [`StoreState`] handle
//! plus plain form values and returns a camelCase DTO or an [`ApiError`].
//!
//! ```text
//! commands/
//! ├── customer.rs     ◄─── list/search/get/create/update/delete customers
//! ├── pet.rs          ◄─── pets, per-owner listing
//! ├── appointment.rs  ◄─── agenda, history, status workflow buttons
//! └── dashboard.rs    ◄─── headline numbers + today's agenda
//! ```
//!
//! [`StoreState`]: crate::state::StoreState
//! [`ApiError`]: crate::error::ApiError

pub mod appointment;
pub mod customer;
pub mod dashboard;
pub mod pet;

use petshop_store::Removed;
use serde::{Deserialize, Serialize};

/// What a delete took with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub removed_customers: usize,
    pub removed_pets: usize,
    pub removed_appointments: usize,
}

impl From<Removed> for DeleteResponse {
    fn from(removed: Removed) -> Self {
        DeleteResponse {
            removed_customers: removed.customers.len(),
            removed_pets: removed.pets.len(),
            removed_appointments: removed.appointments.len(),
        }
    }
}

/// Search box value; `None` and the empty string match all.
fn search_text(query: Option<&str>) -> &str {
    query.unwrap_or_default()
}
