//! # Application Configuration
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable            | Default     | Meaning                                 |
//! |---------------------|-------------|-----------------------------------------|
//! | `PETSHOP_SHOP_NAME` | `Pet Shop`  | Name shown on the dashboard             |
//! | `PETSHOP_SEED`      | `true`      | Load the sample customers/pets/agenda   |
//! | `PETSHOP_LOG`       | (none)      | Log filter when `RUST_LOG` is unset     |
//! | `PETSHOP_TODAY`     | local date  | Pin "today" (YYYY-MM-DD)                |
//!
//! Configuration is read-only after startup.

use std::env;

use chrono::NaiveDate;
use petshop_core::validation::parse_date;
use petshop_store::StoreConfig;
use serde::Serialize;

pub const DEFAULT_SHOP_NAME: &str = "Pet Shop";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Display name for the dashboard header
    pub shop_name: String,

    /// Whether the store starts with sample data
    pub seed_sample_data: bool,

    /// `EnvFilter` directives used when `RUST_LOG` is unset
    pub log_filter: Option<String>,

    /// Fixed calendar day; `None` follows the local clock
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            seed_sample_data: true,
            log_filter: None,
            today: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any name-to-value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed_sample_data = match value("PETSHOP_SEED") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("PETSHOP_SEED".to_string()))?,
            None => true,
        };

        let today = value("PETSHOP_TODAY")
            .map(|raw| {
                parse_date(&raw).map_err(|_| ConfigError::InvalidValue("PETSHOP_TODAY".to_string()))
            })
            .transpose()?;

        Ok(AppConfig {
            shop_name: value("PETSHOP_SHOP_NAME").unwrap_or_else(|| DEFAULT_SHOP_NAME.to_string()),
            seed_sample_data,
            log_filter: value("PETSHOP_LOG"),
            today,
        })
    }

    /// Store settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new()
            .seed_sample_data(self.seed_sample_data)
            .today(self.today)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store_config(), StoreConfig::new());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("PETSHOP_SHOP_NAME", "  Bicho Feliz "),
            ("PETSHOP_SEED", "no"),
            ("PETSHOP_LOG", "warn"),
            ("PETSHOP_TODAY", "2024-05-10"),
        ])
        .unwrap();

        assert_eq!(config.shop_name, "Bicho Feliz");
        assert!(!config.seed_sample_data);
        assert_eq!(config.log_filter.as_deref(), Some("warn"));
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 5, 10));

        let store = config.store_config();
        assert!(!store.seed_sample_data);
        assert_eq!(store.today, config.today);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config(&[("PETSHOP_SHOP_NAME", "   "), ("PETSHOP_LOG", "")]).unwrap();
        assert_eq!(config.shop_name, DEFAULT_SHOP_NAME);
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let err = config(&[("PETSHOP_SEED", "maybe")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PETSHOP_SEED");

        let err = config(&[("PETSHOP_TODAY", "10/05/2024")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PETSHOP_TODAY");
    }
}
