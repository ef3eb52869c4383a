//! # Store State
//!
//! The one handle through which commands reach the store.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` so that handles can be cloned into
//! whatever drives the commands. A command holds the lock for its whole
//! operation, which keeps cascading deletes atomic:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store State Operations                               │
//! │                                                                         │
//! │  Screen Action            Command                   Store Change        │
//! │  ─────────────            ───────                   ────────────        │
//! │                                                                         │
//! │  Save customer ──────────► create_customer() ─────► customers.push()   │
//! │                                                                         │
//! │  Delete customer ────────► delete_customer() ─────► customer, pets and │
//! │                                                     appointments gone  │
//! │                                                                         │
//! │  Click "Iniciar" ────────► start_appointment() ───► status changed     │
//! │                                                                         │
//! │  Open dashboard ─────────► get_dashboard() ───────► (read only)        │
//! │                                                                         │
//! │  NOTE: Reads and writes both take the lock exclusively.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use petshop_store::{Store, StoreConfig};

use crate::error::ApiError;

/// Shared handle to the pet shop store.
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    /// Wraps an existing store.
    pub fn new(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Builds a store from `config` and wraps it.
    pub fn with_config(config: StoreConfig) -> Result<Self, ApiError> {
        Ok(StoreState::new(Store::with_config(config)?))
    }

    /// Executes a function with read access to the store.
    pub fn with_store<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&Store) -> Result<R, ApiError>,
    {
        let store = self
            .store
            .lock()
            .map_err(|_| ApiError::internal("Store lock poisoned"))?;
        f(&store)
    }

    /// Executes a function with write access to the store.
    pub fn with_store_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut Store) -> Result<R, ApiError>,
    {
        let mut store = self
            .store
            .lock()
            .map_err(|_| ApiError::internal("Store lock poisoned"))?;
        f(&mut store)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        StoreState::new(Store::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_store() {
        let state = StoreState::with_config(StoreConfig::new()).unwrap();
        let other = state.clone();

        let maria = state
            .with_store(|store| Ok(store.customers()[0].id.clone()))
            .unwrap();
        other
            .with_store_mut(|store| Ok(store.delete_customer(&maria)?))
            .unwrap();

        let count = state.with_store(|store| Ok(store.customers().len())).unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_default_is_empty() {
        let state = StoreState::default();
        let pets = state.with_store(|store| Ok(store.pets().len())).unwrap();
        assert_eq!(pets, 0);
    }
}
