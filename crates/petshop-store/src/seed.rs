//! # Sample Data
//!
//! The store starts from the same fixed records on every process start:
//!
//! | Customer     | Pets                      | Appointments (today)              |
//! |--------------|---------------------------|-----------------------------------|
//! | Maria Silva  | Thor (dog), Luna (cat)    | 09:00 grooming, 10:30 bath (busy) |
//! | João Santos  | Max (dog)                 | 14:00 veterinary                  |
//! | Ana Oliveira | Mel (rabbit)              |                                   |
//!
//! Everything goes through the regular write path, so the sample data obeys
//! the same rules as user input.

use chrono::{DateTime, NaiveDate, Utc};
use petshop_core::{
    AppointmentDraft, AppointmentStatus, CustomerDraft, PetDraft, ServiceType, Species,
};
use tracing::debug;

use crate::error::StoreResult;
use crate::store::Store;

struct SampleCustomer {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    address: &'static str,
    since: (i32, u32, u32),
}

const CUSTOMERS: &[SampleCustomer] = &[
    SampleCustomer {
        name: "Maria Silva",
        email: "maria@email.com",
        phone: "(11) 99999-1234",
        address: "Rua das Flores, 123 - São Paulo",
        since: (2024, 1, 15),
    },
    SampleCustomer {
        name: "João Santos",
        email: "joao@email.com",
        phone: "(11) 98888-5678",
        address: "Av. Brasil, 456 - São Paulo",
        since: (2024, 2, 20),
    },
    SampleCustomer {
        name: "Ana Oliveira",
        email: "ana@email.com",
        phone: "(11) 97777-9012",
        address: "Rua do Sol, 789 - São Paulo",
        since: (2024, 3, 10),
    },
];

/// (owner index, name, species, breed, age, weight, notes)
const PETS: &[(usize, &str, Species, &str, u32, f64, &str)] = &[
    (0, "Thor", Species::Dog, "Golden Retriever", 3, 32.0, "Muito brincalhão, gosta de água"),
    (0, "Luna", Species::Cat, "Siamês", 2, 4.0, "Tímida com estranhos"),
    (1, "Max", Species::Dog, "Bulldog Francês", 4, 12.0, "Alérgico a alguns shampoos"),
    (2, "Mel", Species::Rabbit, "Holland Lop", 1, 2.0, ""),
];

/// (pet index, service, time, status, notes)
const APPOINTMENTS: &[(usize, ServiceType, &str, AppointmentStatus, &str)] = &[
    (0, ServiceType::Grooming, "09:00", AppointmentStatus::Scheduled, "Tosa completa"),
    (1, ServiceType::Bath, "10:30", AppointmentStatus::InProgress, ""),
    (2, ServiceType::Veterinary, "14:00", AppointmentStatus::Scheduled, "Consulta de rotina"),
];

fn midnight_utc((y, m, d): (i32, u32, u32)) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc())
        .unwrap_or_else(Utc::now)
}

/// Fills `store` with the sample records, appointments dated `today`.
pub(crate) fn load_sample_data(store: &mut Store, today: NaiveDate) -> StoreResult<()> {
    let mut customers = Vec::with_capacity(CUSTOMERS.len());
    for sample in CUSTOMERS {
        let draft = CustomerDraft {
            name: sample.name.to_string(),
            email: sample.email.to_string(),
            phone: sample.phone.to_string(),
            address: Some(sample.address.to_string()),
        };
        let since = midnight_utc(sample.since);
        customers.push((store.insert_customer(draft, since)?, since));
    }

    let mut pets = Vec::with_capacity(PETS.len());
    for &(owner, name, species, breed, age, weight, notes) in PETS {
        let (customer, since) = &customers[owner];
        let draft = PetDraft {
            customer_id: customer.id.clone(),
            name: name.to_string(),
            species,
            breed: breed.to_string(),
            age,
            weight,
            notes: notes.to_string(),
        };
        pets.push(store.insert_pet(draft, *since)?);
    }

    for &(pet, service, time, status, notes) in APPOINTMENTS {
        let pet = &pets[pet];
        let draft = AppointmentDraft {
            pet_id: pet.id.clone(),
            customer_id: pet.customer_id.clone(),
            service,
            date: today,
            time: time.to_string(),
            notes: notes.to_string(),
        };
        let appointment = store.add_appointment(draft)?;
        if status != appointment.status {
            store.update_appointment_status(&appointment.id, status)?;
        }
    }

    debug!(%today, "Sample appointments scheduled");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    fn seeded(today: NaiveDate) -> Store {
        Store::with_config(StoreConfig::new().today(Some(today))).unwrap()
    }

    #[test]
    fn test_sample_data_counts() {
        let store = seeded(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        assert_eq!(store.customers().len(), 3);
        assert_eq!(store.pets().len(), 4);
        assert_eq!(store.appointments().len(), 3);
    }

    #[test]
    fn test_sample_relationships() {
        let store = seeded(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let maria = &store.customers()[0];

        let names: Vec<&str> = store
            .get_pets_by_customer_id(&maria.id)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Thor", "Luna"]);
        assert_eq!(maria.created_at, midnight_utc((2024, 1, 15)));
    }

    #[test]
    fn test_sample_appointments_are_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let store = seeded(today);

        assert!(store.appointments().iter().all(|a| a.date == today));
        let statuses: Vec<AppointmentStatus> =
            store.appointments().iter().map(|a| a.status).collect();
        assert_eq!(
            statuses,
            vec![
                AppointmentStatus::Scheduled,
                AppointmentStatus::InProgress,
                AppointmentStatus::Scheduled
            ]
        );
    }

    #[test]
    fn test_empty_config_skips_seeding() {
        let store = Store::with_config(StoreConfig::empty()).unwrap();
        assert!(store.customers().is_empty());
    }
}
