//! # Store
//!
//! Owns the customers, pets and appointments of the running process and is
//! the only way to change them.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              Store                                      │
//! │                                                                         │
//! │   customers: Vec<Customer>  ◄── pets.customer_id                        │
//! │   pets: Vec<Pet>            ◄── appointments.pet_id                     │
//! │   appointments: Vec<Appointment> ── appointments.customer_id ──►        │
//! │                                                                         │
//! │   Reads hand out `&T`; writes take `&mut self` and either fully         │
//! │   succeed or return an error without touching any collection.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cascades
//! ```text
//! delete_customer(C) ──► removes C
//!                    ──► removes every pet P with P.customer_id == C
//!                    ──► removes every appointment referencing C or any such P
//!
//! delete_pet(P)      ──► removes P
//!                    ──► removes every appointment with pet_id == P
//! ```
//!
//! Collections keep insertion order; nothing is sorted implicitly.

use chrono::{DateTime, Local, NaiveDate, Utc};
use petshop_core::validation::{validate_appointment, validate_customer, validate_pet};
use petshop_core::{
    Appointment, AppointmentDraft, AppointmentStatus, Customer, CustomerDraft, Pet, PetDraft,
    ValidationError, ValidationErrors,
};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{EntityKind, StoreError, StoreResult};
use crate::ids::IdGenerator;
use crate::seed;

/// Ids removed by a delete, including everything it cascaded to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Removed {
    pub customers: Vec<String>,
    pub pets: Vec<String>,
    pub appointments: Vec<String>,
}

/// In-memory store for the pet shop.
#[derive(Debug)]
pub struct Store {
    customers: Vec<Customer>,
    pets: Vec<Pet>,
    appointments: Vec<Appointment>,
    ids: IdGenerator,
    today: Option<NaiveDate>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Store {
            customers: Vec::new(),
            pets: Vec::new(),
            appointments: Vec::new(),
            ids: IdGenerator::new(),
            today: None,
        }
    }

    /// Creates a store from configuration, loading the sample data if asked.
    pub fn with_config(config: StoreConfig) -> StoreResult<Self> {
        let mut store = Store::new();
        store.today = config.today;

        if config.seed_sample_data {
            let today = store.today();
            seed::load_sample_data(&mut store, today)?;
            info!(
                customers = store.customers.len(),
                pets = store.pets.len(),
                appointments = store.appointments.len(),
                "Sample data loaded"
            );
        }

        Ok(store)
    }

    /// The calendar day used by today-scoped queries.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get_customer_by_id(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn get_pet_by_id(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn get_appointment_by_id(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// All pets owned by `customer_id`, in insertion order. Empty if none.
    pub fn get_pets_by_customer_id(&self, customer_id: &str) -> Vec<&Pet> {
        self.pets
            .iter()
            .filter(|p| p.customer_id == customer_id)
            .collect()
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Validates and appends a new customer.
    pub fn add_customer(&mut self, draft: CustomerDraft) -> StoreResult<Customer> {
        self.insert_customer(draft, Utc::now())
    }

    pub(crate) fn insert_customer(
        &mut self,
        draft: CustomerDraft,
        created_at: DateTime<Utc>,
    ) -> StoreResult<Customer> {
        let draft = validate_customer(draft)?;

        let customer = Customer {
            id: self.ids.next_id(),
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            created_at,
        };

        debug!(id = %customer.id, "Customer added");
        self.customers.push(customer.clone());
        Ok(customer)
    }

    /// Replaces every mutable field of a customer.
    pub fn update_customer(&mut self, id: &str, draft: CustomerDraft) -> StoreResult<Customer> {
        let pos = self.customer_position(id)?;
        let draft = validate_customer(draft)?;

        let customer = &mut self.customers[pos];
        customer.apply(draft);

        debug!(id = %id, "Customer updated");
        Ok(customer.clone())
    }

    /// Removes a customer, their pets, and every appointment referencing
    /// either.
    pub fn delete_customer(&mut self, id: &str) -> StoreResult<Removed> {
        let pos = self.customer_position(id)?;

        // Work out the whole cascade before touching anything
        let pet_ids: Vec<&str> = self
            .pets
            .iter()
            .filter(|p| p.customer_id == id)
            .map(|p| p.id.as_str())
            .collect();
        let removed = Removed {
            customers: vec![id.to_string()],
            pets: pet_ids.iter().map(|p| (*p).to_string()).collect(),
            appointments: self
                .appointments
                .iter()
                .filter(|a| a.customer_id == id || pet_ids.contains(&a.pet_id.as_str()))
                .map(|a| a.id.clone())
                .collect(),
        };

        self.customers.remove(pos);
        self.pets.retain(|p| p.customer_id != id);
        self.appointments
            .retain(|a| !removed.appointments.contains(&a.id));

        info!(
            id = %id,
            pets = removed.pets.len(),
            appointments = removed.appointments.len(),
            "Customer deleted"
        );
        Ok(removed)
    }

    // =========================================================================
    // Pets
    // =========================================================================

    /// Validates and appends a new pet. The owner must exist.
    pub fn add_pet(&mut self, draft: PetDraft) -> StoreResult<Pet> {
        self.insert_pet(draft, Utc::now())
    }

    pub(crate) fn insert_pet(
        &mut self,
        draft: PetDraft,
        created_at: DateTime<Utc>,
    ) -> StoreResult<Pet> {
        let draft = validate_pet(draft)?;
        self.check_owner_exists(&draft.customer_id)?;

        let pet = Pet {
            id: self.ids.next_id(),
            customer_id: draft.customer_id,
            name: draft.name,
            species: draft.species,
            breed: draft.breed,
            age: draft.age,
            weight: draft.weight,
            notes: draft.notes,
            created_at,
        };

        debug!(id = %pet.id, customer_id = %pet.customer_id, "Pet added");
        self.pets.push(pet.clone());
        Ok(pet)
    }

    /// Replaces every mutable field of a pet, including its owner.
    ///
    /// Moving a pet to another customer moves its appointments with it, so
    /// every appointment keeps naming the pet's current owner.
    pub fn update_pet(&mut self, id: &str, draft: PetDraft) -> StoreResult<Pet> {
        let pos = self.pet_position(id)?;
        let draft = validate_pet(draft)?;
        self.check_owner_exists(&draft.customer_id)?;

        if self.pets[pos].customer_id != draft.customer_id {
            let mut moved = 0;
            for appointment in self.appointments.iter_mut().filter(|a| a.pet_id == id) {
                appointment.customer_id = draft.customer_id.clone();
                moved += 1;
            }
            info!(
                id = %id,
                from = %self.pets[pos].customer_id,
                to = %draft.customer_id,
                appointments = moved,
                "Pet transferred"
            );
        }

        let pet = &mut self.pets[pos];
        pet.apply(draft);

        debug!(id = %id, "Pet updated");
        Ok(pet.clone())
    }

    /// Removes a pet and every appointment for it.
    pub fn delete_pet(&mut self, id: &str) -> StoreResult<Removed> {
        let pos = self.pet_position(id)?;

        let removed = Removed {
            pets: vec![id.to_string()],
            appointments: self
                .appointments
                .iter()
                .filter(|a| a.pet_id == id)
                .map(|a| a.id.clone())
                .collect(),
            ..Removed::default()
        };

        self.pets.remove(pos);
        self.appointments.retain(|a| a.pet_id != id);

        info!(id = %id, appointments = removed.appointments.len(), "Pet deleted");
        Ok(removed)
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    /// Validates and appends a new appointment in `scheduled` status.
    ///
    /// The customer and pet must exist and the pet must belong to the
    /// customer.
    pub fn add_appointment(&mut self, draft: AppointmentDraft) -> StoreResult<Appointment> {
        self.insert_appointment(draft, Utc::now())
    }

    pub(crate) fn insert_appointment(
        &mut self,
        draft: AppointmentDraft,
        created_at: DateTime<Utc>,
    ) -> StoreResult<Appointment> {
        let draft = validate_appointment(draft)?;
        self.check_appointment_refs(&draft)?;

        let appointment = Appointment {
            id: self.ids.next_id(),
            pet_id: draft.pet_id,
            customer_id: draft.customer_id,
            service: draft.service,
            date: draft.date,
            time: draft.time,
            status: AppointmentStatus::Scheduled,
            notes: draft.notes,
            created_at,
        };

        debug!(
            id = %appointment.id,
            pet_id = %appointment.pet_id,
            date = %appointment.date,
            time = %appointment.time,
            "Appointment added"
        );
        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Replaces every field of an appointment except its status.
    pub fn update_appointment(
        &mut self,
        id: &str,
        draft: AppointmentDraft,
    ) -> StoreResult<Appointment> {
        let pos = self.appointment_position(id)?;
        let draft = validate_appointment(draft)?;
        self.check_appointment_refs(&draft)?;

        let appointment = &mut self.appointments[pos];
        appointment.apply(draft);

        debug!(id = %id, "Appointment updated");
        Ok(appointment.clone())
    }

    pub fn delete_appointment(&mut self, id: &str) -> StoreResult<Removed> {
        let pos = self.appointment_position(id)?;
        self.appointments.remove(pos);

        debug!(id = %id, "Appointment deleted");
        Ok(Removed {
            appointments: vec![id.to_string()],
            ..Removed::default()
        })
    }

    /// Moves an appointment to `status` if the workflow allows it.
    pub fn update_appointment_status(
        &mut self,
        id: &str,
        status: AppointmentStatus,
    ) -> StoreResult<Appointment> {
        let pos = self.appointment_position(id)?;
        let appointment = &mut self.appointments[pos];

        let next = appointment.status.transition(status).map_err(|err| {
            warn!(id = %id, from = %err.from, to = %err.to, "Rejected status change");
            err
        })?;

        debug!(id = %id, from = %appointment.status, to = %next, "Appointment status changed");
        appointment.status = next;
        Ok(appointment.clone())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn customer_position(&self, id: &str) -> StoreResult<usize> {
        self.customers
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Customer, id))
    }

    fn pet_position(&self, id: &str) -> StoreResult<usize> {
        self.pets
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Pet, id))
    }

    fn appointment_position(&self, id: &str) -> StoreResult<usize> {
        self.appointments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Appointment, id))
    }

    fn check_owner_exists(&self, customer_id: &str) -> Result<(), ValidationErrors> {
        if self.get_customer_by_id(customer_id).is_none() {
            return Err(ValidationError::UnknownReference {
                field: "customerId".to_string(),
                id: customer_id.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn check_appointment_refs(&self, draft: &AppointmentDraft) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();

        if self.get_customer_by_id(&draft.customer_id).is_none() {
            errors.push(ValidationError::UnknownReference {
                field: "customerId".to_string(),
                id: draft.customer_id.clone(),
            });
        }

        match self.get_pet_by_id(&draft.pet_id) {
            None => errors.push(ValidationError::UnknownReference {
                field: "petId".to_string(),
                id: draft.pet_id.clone(),
            }),
            Some(pet) if pet.customer_id != draft.customer_id => {
                errors.push(ValidationError::OwnerMismatch {
                    field: "petId".to_string(),
                    pet_id: pet.id.clone(),
                    customer_id: draft.customer_id.clone(),
                });
            }
            Some(_) => {}
        }

        match ValidationErrors::from_vec(errors) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
