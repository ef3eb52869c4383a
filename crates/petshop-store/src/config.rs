//! # Store Configuration

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store configuration.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use petshop_store::StoreConfig;
///
/// let config = StoreConfig::new()
///     .seed_sample_data(false)
///     .today(NaiveDate::from_ymd_opt(2024, 5, 10));
/// assert!(!config.seed_sample_data);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Load the sample customers, pets and appointments on startup.
    /// Default: true
    pub seed_sample_data: bool,

    /// Fixed "today" for today-scoped queries and seeding.
    /// Default: None (local calendar date at query time)
    pub today: Option<NaiveDate>,
}

impl StoreConfig {
    pub fn new() -> Self {
        StoreConfig {
            seed_sample_data: true,
            today: None,
        }
    }

    /// Configuration for an empty store (for testing).
    pub fn empty() -> Self {
        StoreConfig::new().seed_sample_data(false)
    }

    pub fn seed_sample_data(mut self, seed: bool) -> Self {
        self.seed_sample_data = seed;
        self
    }

    pub fn today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new()
    }
}
