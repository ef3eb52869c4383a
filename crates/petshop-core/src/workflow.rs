//! # Appointment Status Workflow
//!
//! The only legal ways an appointment's status can change.
//!
//! ```text
//!                 start                complete
//!   ┌───────────┐ ─────► ┌─────────────┐ ─────► ┌───────────┐
//!   │ scheduled │        │ in-progress │        │ completed │ (terminal)
//!   └───────────┘        └─────────────┘        └───────────┘
//!         │ cancel
//!         ▼
//!   ┌───────────┐
//!   │ cancelled │ (terminal)
//!   └───────────┘
//! ```
//!
//! Anything else, including "moving" to the current status, is rejected
//! with [`TransitionError`].

use crate::error::TransitionError;
use crate::types::AppointmentStatus;

impl AppointmentStatus {
    /// Statuses reachable in one step from `self`.
    ///
    /// The appointment list renders one action button per entry.
    pub const fn allowed_transitions(&self) -> &'static [AppointmentStatus] {
        match self {
            AppointmentStatus::Scheduled => &[
                AppointmentStatus::InProgress,
                AppointmentStatus::Cancelled,
            ],
            AppointmentStatus::InProgress => &[AppointmentStatus::Completed],
            AppointmentStatus::Completed | AppointmentStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// No transition leaves a terminal status.
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled
        )
    }

    /// Checks `self -> next` against the workflow table.
    pub fn transition(self, next: AppointmentStatus) -> Result<AppointmentStatus, TransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(TransitionError {
                from: self,
                to: next,
            })
        }
    }
}
