//! # Pet Shop Library
//!
//! Command layer for the pet shop: configuration, logging, the shared store
//! handle and the operations the screens call.
//!
//! ## Module Organization
//! ```text
//! petshop_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── PETSHOP_* environment configuration
//! ├── state.rs        ◄─── Shared store handle
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── customer.rs ◄─── Customer commands
//! │   ├── pet.rs      ◄─── Pet commands
//! │   ├── appointment.rs ◄─ Agenda and status workflow commands
//! │   └── dashboard.rs ◄── Dashboard summary
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use state::StoreState;

/// Default log directives when neither `RUST_LOG` nor `PETSHOP_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,petshop=debug";

/// Runs the pet shop and prints the dashboard as JSON.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • PETSHOP_SHOP_NAME, PETSHOP_SEED, PETSHOP_LOG, PETSHOP_TODAY       │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • RUST_LOG, then PETSHOP_LOG, then the default directives           │
/// │                                                                         │
/// │  3. Build the Store ──────────────────────────────────────────────────► │
/// │     • Sample data unless PETSHOP_SEED=false                             │
/// │                                                                         │
/// │  4. Render the Dashboard ─────────────────────────────────────────────► │
/// │     • Stats plus today's agenda, as JSON on stdout                      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    init_tracing(config.log_filter.as_deref());

    info!(shop = %config.shop_name, seed = config.seed_sample_data, "Starting Pet Shop");

    let state = StoreState::with_config(config.store_config())?;
    info!("Store initialized");

    let dashboard = commands::dashboard::get_dashboard(&state, &config)?;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `PETSHOP_LOG=warn` - Used only when `RUST_LOG` is unset
/// - Default: INFO, DEBUG for the pet shop crates
fn init_tracing(fallback: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback.unwrap_or(DEFAULT_LOG_FILTER)));

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
