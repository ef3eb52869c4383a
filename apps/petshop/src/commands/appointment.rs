//! # Appointment Commands
//!
//! ## Status Workflow Buttons
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Appointment Card Actions                             │
//! │                                                                         │
//! │  status        allowedTransitions        buttons shown                  │
//! │  ──────        ──────────────────        ─────────────                  │
//! │  scheduled     in-progress, cancelled    "Iniciar", "Cancelar"          │
//! │  in-progress   completed                 "Concluir"                     │
//! │  completed     (none)                    (none)                         │
//! │  cancelled     (none)                    (none)                         │
//! │                                                                         │
//! │  start_appointment()    ──► scheduled   → in-progress                   │
//! │  complete_appointment() ──► in-progress → completed                     │
//! │  cancel_appointment()   ──► scheduled   → cancelled                     │
//! │                                                                         │
//! │  Anything else comes back as INVALID_TRANSITION and changes nothing.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use petshop_core::validation::{parse_date, validate_appointment};
use petshop_core::{
    Appointment, AppointmentDraft, AppointmentStatus, ServiceType, ValidationErrors,
};
use petshop_store::{EntityKind, Store, StoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{search_text, DeleteResponse};
use crate::error::ApiError;
use crate::state::StoreState;

/// Appointment DTO with the pet and customer names joined in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDto {
    pub id: String,
    pub pet_id: String,
    pub pet_name: String,
    pub customer_id: String,
    pub customer_name: String,
    pub service: ServiceType,
    pub service_label: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
    pub status_label: String,
    /// Statuses the card may move to next; empty once terminal.
    pub allowed_transitions: Vec<AppointmentStatus>,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl AppointmentDto {
    pub(crate) fn from_store(store: &Store, a: &Appointment) -> Self {
        AppointmentDto {
            id: a.id.clone(),
            pet_id: a.pet_id.clone(),
            pet_name: store
                .get_pet_by_id(&a.pet_id)
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            customer_id: a.customer_id.clone(),
            customer_name: store
                .get_customer_by_id(&a.customer_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            service: a.service,
            service_label: a.service.label().to_string(),
            date: a.date,
            time: a.time.clone(),
            status: a.status,
            status_label: a.status.label().to_string(),
            allowed_transitions: a.status.allowed_transitions().to_vec(),
            notes: a.notes.clone(),
            created_at: a.created_at,
        }
    }
}

/// Appointment form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentInput {
    pub customer_id: String,
    pub pet_id: String,
    pub service: String,
    /// `YYYY-MM-DD` from the date input.
    pub date: String,
    /// `HH:MM` from the time input.
    pub time: String,
    #[serde(default)]
    pub notes: String,
}

impl TryFrom<AppointmentInput> for AppointmentDraft {
    type Error = ValidationErrors;

    fn try_from(input: AppointmentInput) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let service = input.service.parse::<ServiceType>().unwrap_or_else(|err| {
            errors.push(err);
            ServiceType::Consultation
        });
        let date = parse_date(&input.date).unwrap_or_else(|err| {
            errors.push(err);
            NaiveDate::default()
        });

        let draft = AppointmentDraft {
            pet_id: input.pet_id,
            customer_id: input.customer_id,
            service,
            date,
            time: input.time,
            notes: input.notes,
        };

        if !errors.is_empty() {
            if let Err(rest) = validate_appointment(draft.clone()) {
                errors.extend(rest.into_vec());
            }
        }

        match ValidationErrors::from_vec(errors) {
            Some(errors) => Err(errors),
            None => Ok(draft),
        }
    }
}

/// Parses the status filter of the agenda screen. Blank or `all` means no
/// filter.
fn status_filter(status: Option<&str>) -> Result<Option<AppointmentStatus>, ApiError> {
    match status.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(raw) => Ok(Some(raw.parse::<AppointmentStatus>()?)),
    }
}

/// Lists appointments newest first, filtered by pet/customer name and status.
pub fn list_appointments(
    state: &StoreState,
    query: Option<&str>,
    status: Option<&str>,
) -> Result<Vec<AppointmentDto>, ApiError> {
    let query = search_text(query);
    let status = status_filter(status)?;
    debug!(query = %query, ?status, "list_appointments command");

    state.with_store(|store| {
        Ok(store
            .search_appointments(query, status)
            .into_iter()
            .map(|a| AppointmentDto::from_store(store, a))
            .collect())
    })
}

/// Today's agenda, earliest first.
pub fn todays_appointments(state: &StoreState) -> Result<Vec<AppointmentDto>, ApiError> {
    debug!("todays_appointments command");
    state.with_store(|store| {
        Ok(store
            .todays_appointments()
            .into_iter()
            .map(|a| AppointmentDto::from_store(store, a))
            .collect())
    })
}

pub fn get_appointment(state: &StoreState, id: &str) -> Result<AppointmentDto, ApiError> {
    debug!(id = %id, "get_appointment command");
    state.with_store(|store| {
        let appointment = store
            .get_appointment_by_id(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Appointment, id))?;
        Ok(AppointmentDto::from_store(store, appointment))
    })
}

/// Books a new appointment. It always starts as `scheduled`.
pub fn create_appointment(
    state: &StoreState,
    input: AppointmentInput,
) -> Result<AppointmentDto, ApiError> {
    debug!(pet_id = %input.pet_id, "create_appointment command");
    let draft = AppointmentDraft::try_from(input)?;

    state.with_store_mut(|store| {
        let appointment = store.add_appointment(draft)?;
        info!(
            id = %appointment.id,
            date = %appointment.date,
            time = %appointment.time,
            "Appointment booked"
        );
        Ok(AppointmentDto::from_store(store, &appointment))
    })
}

/// Edits an appointment's details. The status is left as it is.
pub fn update_appointment(
    state: &StoreState,
    id: &str,
    input: AppointmentInput,
) -> Result<AppointmentDto, ApiError> {
    debug!(id = %id, "update_appointment command");

    state.with_store_mut(|store| {
        if store.get_appointment_by_id(id).is_none() {
            return Err(StoreError::not_found(EntityKind::Appointment, id).into());
        }
        let appointment = store.update_appointment(id, AppointmentDraft::try_from(input)?)?;
        Ok(AppointmentDto::from_store(store, &appointment))
    })
}

pub fn delete_appointment(state: &StoreState, id: &str) -> Result<DeleteResponse, ApiError> {
    debug!(id = %id, "delete_appointment command");
    state.with_store_mut(|store| Ok(store.delete_appointment(id)?.into()))
}

/// Moves an appointment to `status` (wire form, e.g. `in-progress`).
pub fn update_appointment_status(
    state: &StoreState,
    id: &str,
    status: &str,
) -> Result<AppointmentDto, ApiError> {
    let status: AppointmentStatus = status.parse()?;
    set_status(state, id, status)
}

pub fn start_appointment(state: &StoreState, id: &str) -> Result<AppointmentDto, ApiError> {
    set_status(state, id, AppointmentStatus::InProgress)
}

pub fn complete_appointment(state: &StoreState, id: &str) -> Result<AppointmentDto, ApiError> {
    set_status(state, id, AppointmentStatus::Completed)
}

pub fn cancel_appointment(state: &StoreState, id: &str) -> Result<AppointmentDto, ApiError> {
    set_status(state, id, AppointmentStatus::Cancelled)
}

fn set_status(
    state: &StoreState,
    id: &str,
    status: AppointmentStatus,
) -> Result<AppointmentDto, ApiError> {
    debug!(id = %id, %status, "update_appointment_status command");
    state.with_store_mut(|store| {
        let appointment = store.update_appointment_status(id, status)?;
        Ok(AppointmentDto::from_store(store, &appointment))
    })
}
