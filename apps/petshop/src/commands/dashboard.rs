//! # Dashboard Command
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Pet Shop                                                    │
//! │  ┌──────────┐ ┌──────────┐ ┌──────────────┐ ┌─────────────┐ │
//! │  │ Clientes │ │   Pets   │ │ Agendamentos │ │ Concluídos  │ │
//! │  │    3     │ │    4     │ │   hoje: 3    │ │   hoje: 0   │ │
//! │  └──────────┘ └──────────┘ └──────────────┘ └─────────────┘ │
//! │  09:00  Thor   Tosa      Agendado                            │
//! │  10:30  Luna   Banho     Em Andamento                        │
//! │  14:00  Max    Veterin.  Agendado                            │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use petshop_store::DashboardStats;
use serde::Serialize;
use tracing::debug;

use super::appointment::AppointmentDto;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::state::StoreState;

/// Everything the dashboard screen renders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    pub shop_name: String,
    pub today: NaiveDate,
    pub total_customers: usize,
    pub total_pets: usize,
    pub appointments_today: usize,
    pub completed_today: usize,
    /// Today's agenda, earliest first.
    pub agenda: Vec<AppointmentDto>,
}

pub fn get_dashboard(state: &StoreState, config: &AppConfig) -> Result<DashboardDto, ApiError> {
    debug!("get_dashboard command");
    state.with_store(|store| {
        let DashboardStats {
            total_customers,
            total_pets,
            appointments_today,
            completed_today,
        } = store.dashboard_stats();

        Ok(DashboardDto {
            shop_name: config.shop_name.clone(),
            today: store.today(),
            total_customers,
            total_pets,
            appointments_today,
            completed_today,
            agenda: store
                .todays_appointments()
                .into_iter()
                .map(|a| AppointmentDto::from_store(store, a))
                .collect(),
        })
    })
}
