//! # Read Queries
//!
//! List, search and dashboard reads over the store. None of these mutate.
//!
//! ```text
//! Dashboard ──► dashboard_stats(), todays_appointments()
//! Customers ──► search_customers(q), pet_count(id)
//! Pets      ──► search_pets(q)
//! Agenda    ──► search_appointments(q, status)  (newest first)
//! ```

use chrono::NaiveDate;
use petshop_core::query::{appointments_on, history_order, matches_search, matches_status};
use petshop_core::{Appointment, AppointmentStatus, Customer, Pet};
use serde::Serialize;

use crate::store::Store;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_customers: usize,
    pub total_pets: usize,
    pub appointments_today: usize,
    pub completed_today: usize,
}

impl Store {
    /// Appointments on `day`, earliest first.
    pub fn appointments_on(&self, day: NaiveDate) -> Vec<&Appointment> {
        appointments_on(self.appointments(), day)
    }

    /// Appointments on [`Store::today`], earliest first.
    pub fn todays_appointments(&self) -> Vec<&Appointment> {
        self.appointments_on(self.today())
    }

    /// Every appointment, newest date and time first.
    pub fn appointment_history(&self) -> Vec<&Appointment> {
        let mut all: Vec<&Appointment> = self.appointments().iter().collect();
        all.sort_by(|a, b| history_order(a, b));
        all
    }

    /// Customers whose name or email contains `query` (case-insensitive).
    pub fn search_customers(&self, query: &str) -> Vec<&Customer> {
        self.customers()
            .iter()
            .filter(|c| matches_search(query, &[c.name.as_str(), c.email.as_str()]))
            .collect()
    }

    /// Pets whose name or breed contains `query` (case-insensitive).
    pub fn search_pets(&self, query: &str) -> Vec<&Pet> {
        self.pets()
            .iter()
            .filter(|p| matches_search(query, &[p.name.as_str(), p.breed.as_str()]))
            .collect()
    }

    /// Appointments whose pet or customer name contains `query`, optionally
    /// restricted to one status, newest first.
    pub fn search_appointments(
        &self,
        query: &str,
        status: Option<AppointmentStatus>,
    ) -> Vec<&Appointment> {
        let mut found: Vec<&Appointment> = self
            .appointments()
            .iter()
            .filter(|a| matches_status(status, a.status))
            .filter(|a| {
                let pet = self.get_pet_by_id(&a.pet_id).map(|p| p.name.as_str());
                let customer = self
                    .get_customer_by_id(&a.customer_id)
                    .map(|c| c.name.as_str());
                let names: Vec<&str> = pet.into_iter().chain(customer).collect();
                matches_search(query, &names)
            })
            .collect();
        found.sort_by(|a, b| history_order(a, b));
        found
    }

    /// Number of pets owned by `customer_id`.
    pub fn pet_count(&self, customer_id: &str) -> usize {
        self.pets()
            .iter()
            .filter(|p| p.customer_id == customer_id)
            .count()
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        let today = self.todays_appointments();
        DashboardStats {
            total_customers: self.customers().len(),
            total_pets: self.pets().len(),
            appointments_today: today.len(),
            completed_today: today
                .iter()
                .filter(|a| a.status == AppointmentStatus::Completed)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;
    use petshop_core::{AppointmentDraft, CustomerDraft, PetDraft, ServiceType, Species};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Empty store pinned to 2024-05-10 with one customer and pet.
    fn store() -> (Store, String, String) {
        let mut store =
            Store::with_config(StoreConfig::empty().today(Some(day(2024, 5, 10)))).unwrap();
        let customer = store
            .add_customer(CustomerDraft {
                name: "Ana Oliveira".to_string(),
                email: "ana@email.com".to_string(),
                phone: "(11) 97777-9012".to_string(),
                address: None,
            })
            .unwrap();
        let pet = store
            .add_pet(PetDraft {
                customer_id: customer.id.clone(),
                name: "Mel".to_string(),
                species: Species::Rabbit,
                breed: "Holland Lop".to_string(),
                age: 1,
                weight: 2.0,
                notes: String::new(),
            })
            .unwrap();
        (store, customer.id, pet.id)
    }

    fn book(store: &mut Store, customer: &str, pet: &str, date: NaiveDate, time: &str) -> String {
        store
            .add_appointment(AppointmentDraft {
                pet_id: pet.to_string(),
                customer_id: customer.to_string(),
                service: ServiceType::Consultation,
                date,
                time: time.to_string(),
                notes: String::new(),
            })
            .unwrap()
            .id
    }

    #[test]
    fn test_todays_appointments() {
        let (mut store, c, p) = store();
        let late = book(&mut store, &c, &p, day(2024, 5, 10), "23:59");
        book(&mut store, &c, &p, day(2024, 5, 9), "12:00");
        let early = book(&mut store, &c, &p, day(2024, 5, 10), "09:00");

        let ids: Vec<&str> = store
            .todays_appointments()
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec![early.as_str(), late.as_str()]);
    }

    #[test]
    fn test_appointment_history_order() {
        let (mut store, c, p) = store();
        let a = book(&mut store, &c, &p, day(2024, 5, 9), "18:00");
        let b = book(&mut store, &c, &p, day(2024, 5, 10), "08:00");
        let d = book(&mut store, &c, &p, day(2024, 5, 10), "15:00");

        let ids: Vec<&str> = store
            .appointment_history()
            .into_iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec![d.as_str(), b.as_str(), a.as_str()]);
    }

    #[test]
    fn test_search_customers_and_pets() {
        let (store, _, _) = store();

        assert_eq!(store.search_customers("ANA").len(), 1);
        assert_eq!(store.search_customers("email.com").len(), 1);
        assert!(store.search_customers("joão").is_empty());

        assert_eq!(store.search_pets("holland").len(), 1);
        assert_eq!(store.search_pets("").len(), 1);
        assert!(store.search_pets("thor").is_empty());
    }

    #[test]
    fn test_search_appointments_by_name_and_status() {
        let (mut store, c, p) = store();
        let first = book(&mut store, &c, &p, day(2024, 5, 10), "09:00");
        let second = book(&mut store, &c, &p, day(2024, 5, 10), "10:00");
        store
            .update_appointment_status(&second, AppointmentStatus::Cancelled)
            .unwrap();

        assert_eq!(store.search_appointments("mel", None).len(), 2);
        assert_eq!(store.search_appointments("oliveira", None).len(), 2);
        assert!(store.search_appointments("thor", None).is_empty());

        let cancelled = store.search_appointments("", Some(AppointmentStatus::Cancelled));
        assert_eq!(cancelled.len(), 1);
        assert_eq!(cancelled[0].id, second);

        let scheduled = store.search_appointments("MEL", Some(AppointmentStatus::Scheduled));
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].id, first);
    }

    #[test]
    fn test_dashboard_stats() {
        let (mut store, c, p) = store();
        let done = book(&mut store, &c, &p, day(2024, 5, 10), "09:00");
        book(&mut store, &c, &p, day(2024, 5, 10), "11:00");
        book(&mut store, &c, &p, day(2024, 4, 1), "11:00");
        store
            .update_appointment_status(&done, AppointmentStatus::InProgress)
            .unwrap();
        store
            .update_appointment_status(&done, AppointmentStatus::Completed)
            .unwrap();

        assert_eq!(
            store.dashboard_stats(),
            DashboardStats {
                total_customers: 1,
                total_pets: 1,
                appointments_today: 2,
                completed_today: 1,
            }
        );
        assert_eq!(store.pet_count(&c), 1);
        assert_eq!(store.pet_count("nobody"), 0);
    }
}
