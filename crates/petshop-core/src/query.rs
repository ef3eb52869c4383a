//! # Query Helpers
//!
//! Pure filtering and ordering used by the list views and the dashboard.
//! Callers pass "today" in; nothing here reads the clock.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::types::{Appointment, AppointmentStatus};

/// Appointments falling on `day`, earliest time first.
///
/// Matching is by calendar date only, so every time of day on `day` matches.
pub fn appointments_on<'a, I>(appointments: I, day: NaiveDate) -> Vec<&'a Appointment>
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut result: Vec<&Appointment> = appointments
        .into_iter()
        .filter(|apt| apt.date == day)
        .collect();
    // HH:MM is fixed width, so string order is chronological
    result.sort_by(|a, b| a.time.cmp(&b.time));
    result
}

/// Ordering for the general appointment list: newest date first, then latest
/// time first.
pub fn history_order(a: &Appointment, b: &Appointment) -> Ordering {
    b.date.cmp(&a.date).then_with(|| b.time.cmp(&a.time))
}

/// Case-insensitive substring match against any of `haystacks`.
///
/// An empty query matches everything. The query is taken as typed, so
/// surrounding spaces are part of the needle.
pub fn matches_search(query: &str, haystacks: &[&str]) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

/// Status filter of the appointment list. `None` means "all".
pub fn matches_status(filter: Option<AppointmentStatus>, status: AppointmentStatus) -> bool {
    filter.map_or(true, |wanted| wanted == status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServiceType;
    use chrono::Utc;

    fn apt(id: &str, date: NaiveDate, time: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            pet_id: "p1".to_string(),
            customer_id: "c1".to_string(),
            service: ServiceType::Bath,
            date,
            time: time.to_string(),
            status: AppointmentStatus::Scheduled,
            notes: String::new(),
            created_at: Utc::now(),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_appointments_on_filters_by_day_and_sorts_by_time() {
        let all = vec![
            apt("late", day(10), "23:59"),
            apt("yesterday", day(9), "12:00"),
            apt("early", day(10), "09:00"),
        ];

        let today = appointments_on(&all, day(10));
        let ids: Vec<&str> = today.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "late"]);
    }

    #[test]
    fn test_history_order() {
        let mut all = vec![
            apt("a", day(9), "10:00"),
            apt("b", day(10), "08:00"),
            apt("c", day(10), "17:30"),
        ];
        all.sort_by(history_order);

        let ids: Vec<&str> = all.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_matches_search() {
        assert!(matches_search("", &["anything"]));
        assert!(!matches_search("  ", &[]));
        assert!(!matches_search("maria ", &["Maria"]));
        assert!(matches_search("maria ", &["Maria Silva"]));
        assert!(matches_search("MARIA", &["Maria Silva", "maria@email.com"]));
        assert!(matches_search("golden", &["Thor", "Golden Retriever"]));
        assert!(!matches_search("luna", &["Thor", "Golden Retriever"]));
    }

    #[test]
    fn test_matches_status() {
        assert!(matches_status(None, AppointmentStatus::Cancelled));
        assert!(matches_status(
            Some(AppointmentStatus::Completed),
            AppointmentStatus::Completed
        ));
        assert!(!matches_status(
            Some(AppointmentStatus::Completed),
            AppointmentStatus::Scheduled
        ));
    }
}
