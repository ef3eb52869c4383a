//! # petshop-store: In-Memory Store for the Pet Shop
//!
//! The single owner of every customer, pet and appointment in the process.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pet Shop Data Flow                               │
//! │                                                                         │
//! │  Command (add_pet, delete_customer, start_appointment, ...)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   petshop-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │   Queries     │    │    Seed      │  │   │
//! │  │   │  (store.rs)   │    │ (queries.rs)  │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ add/update/   │    │ today, search │    │ 3 customers  │  │   │
//! │  │   │ delete/status │    │ dashboard     │    │ 4 pets, 3 apt│  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! A `Store` is plain owned data mutated through `&mut self`. Every operation
//! runs to completion before the next; there is no locking inside. If the
//! store is ever shared, the lock goes around the whole `Store`, never around
//! individual collections, so cascades stay atomic.
//!
//! ## Usage
//!
//! ```rust
//! use petshop_store::{Store, StoreConfig};
//!
//! let mut store = Store::with_config(StoreConfig::default())?;
//! let maria = store.customers()[0].id.clone();
//!
//! let removed = store.delete_customer(&maria)?;
//! assert_eq!(removed.pets.len(), 2);
//! assert_eq!(store.customers().len(), 2);
//! # Ok::<(), petshop_store::StoreError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod queries;
mod seed;
pub mod store;

pub use config::StoreConfig;
pub use error::{EntityKind, StoreError, StoreResult};
pub use queries::DashboardStats;
pub use store::{Removed, Store};
