//! # Customer Commands
//!
//! ## Delete Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "Excluir" on a customer card                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  delete_customer(id)                                                    │
//! │       │                                                                 │
//! │       ├──► customer removed                                             │
//! │       ├──► every pet they own removed                                   │
//! │       └──► every appointment for them or those pets removed             │
//! │                                                                         │
//! │  Returns counts so the toast can say what went with it.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use petshop_core::{Customer, CustomerDraft};
use petshop_store::{EntityKind, Store, StoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{search_text, DeleteResponse};
use crate::error::ApiError;
use crate::state::StoreState;

/// Customer DTO for the customer list and detail screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Number of pets registered to this customer.
    pub pet_count: usize,
}

impl CustomerDto {
    fn from_store(store: &Store, c: &Customer) -> Self {
        CustomerDto {
            id: c.id.clone(),
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            address: c.address.clone(),
            created_at: c.created_at,
            pet_count: store.pet_count(&c.id),
        }
    }
}

/// Customer form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl From<CustomerInput> for CustomerDraft {
    fn from(input: CustomerInput) -> Self {
        CustomerDraft {
            name: input.name,
            email: input.email,
            phone: input.phone,
            address: input.address,
        }
    }
}

/// Lists customers, filtered by name or email when `query` is non-blank.
pub fn list_customers(
    state: &StoreState,
    query: Option<&str>,
) -> Result<Vec<CustomerDto>, ApiError> {
    let query = search_text(query);
    debug!(query = %query, "list_customers command");

    state.with_store(|store| {
        Ok(store
            .search_customers(query)
            .into_iter()
            .map(|c| CustomerDto::from_store(store, c))
            .collect())
    })
}

pub fn get_customer(state: &StoreState, id: &str) -> Result<CustomerDto, ApiError> {
    debug!(id = %id, "get_customer command");
    state.with_store(|store| {
        let customer = store
            .get_customer_by_id(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Customer, id))?;
        Ok(CustomerDto::from_store(store, customer))
    })
}

pub fn create_customer(state: &StoreState, input: CustomerInput) -> Result<CustomerDto, ApiError> {
    debug!("create_customer command");
    state.with_store_mut(|store| {
        let customer = store.add_customer(input.into())?;
        info!(id = %customer.id, "Customer registered");
        Ok(CustomerDto::from_store(store, &customer))
    })
}

pub fn update_customer(
    state: &StoreState,
    id: &str,
    input: CustomerInput,
) -> Result<CustomerDto, ApiError> {
    debug!(id = %id, "update_customer command");
    state.with_store_mut(|store| {
        let customer = store.update_customer(id, input.into())?;
        Ok(CustomerDto::from_store(store, &customer))
    })
}

/// Deletes a customer together with their pets and appointments.
pub fn delete_customer(state: &StoreState, id: &str) -> Result<DeleteResponse, ApiError> {
    debug!(id = %id, "delete_customer command");
    state.with_store_mut(|store| Ok(store.delete_customer(id)?.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{customer_id, seeded};
    use crate::error::ErrorCode;

    fn input() -> CustomerInput {
        CustomerInput {
            name: "Carlos Lima".to_string(),
            email: "carlos@email.com".to_string(),
            phone: "(21) 3333-4444".to_string(),
            address: Some("  ".to_string()),
        }
    }

    #[test]
    fn test_list_and_search() {
        let state = seeded();
        assert_eq!(list_customers(&state, None).unwrap().len(), 3);
        assert_eq!(list_customers(&state, Some("")).unwrap().len(), 3);
        assert!(list_customers(&state, Some("silva ")).unwrap().is_empty());

        let found = list_customers(&state, Some("maria")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].pet_count, 2);
    }

    #[test]
    fn test_create_and_get() {
        let state = seeded();
        let created = create_customer(&state, input()).unwrap();
        assert_eq!(created.pet_count, 0);
        assert_eq!(created.address, None);

        let fetched = get_customer(&state, &created.id).unwrap();
        assert_eq!(fetched.email, "carlos@email.com");
    }

    #[test]
    fn test_create_reports_every_bad_field() {
        let state = seeded();
        let err = create_customer(&state, CustomerInput::default()).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.fields, vec!["name", "email", "phone"]);
        assert_eq!(list_customers(&state, None).unwrap().len(), 3);
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let state = seeded();
        let err = update_customer(&state, "missing", input()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_delete_cascades() {
        let state = seeded();
        let maria = customer_id(&state, "Maria Silva");

        let removed = delete_customer(&state, &maria).unwrap();
        assert_eq!(
            removed,
            DeleteResponse {
                removed_customers: 1,
                removed_pets: 2,
                removed_appointments: 2,
            }
        );
        assert_eq!(get_customer(&state, &maria).unwrap_err().code, ErrorCode::NotFound);
    }
}
