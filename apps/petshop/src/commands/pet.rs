//! # Pet Commands
//!
//! Pet forms send species as a string and age/weight as loose numbers. The
//! conversion to a [`PetDraft`] reports those fields together with every other
//! failing field, so one save attempt marks the whole form.

use chrono::{DateTime, Utc};
use petshop_core::validation::validate_pet;
use petshop_core::{Pet, PetDraft, Species, ValidationError, ValidationErrors, MAX_PET_AGE};
use petshop_store::{EntityKind, Store, StoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{search_text, DeleteResponse};
use crate::error::ApiError;
use crate::state::StoreState;

/// Pet DTO for the pet list and detail screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetDto {
    pub id: String,
    pub customer_id: String,
    /// Owner's name, empty if the owner vanished.
    pub owner_name: String,
    pub name: String,
    pub species: Species,
    pub species_label: String,
    pub breed: String,
    /// Breed, or the species label when no breed is recorded.
    pub description: String,
    pub age: u32,
    pub weight: f64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl PetDto {
    fn from_store(store: &Store, p: &Pet) -> Self {
        PetDto {
            id: p.id.clone(),
            customer_id: p.customer_id.clone(),
            owner_name: store
                .get_customer_by_id(&p.customer_id)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            name: p.name.clone(),
            species: p.species,
            species_label: p.species.label().to_string(),
            breed: p.breed.clone(),
            description: p.description().to_string(),
            age: p.age,
            weight: p.weight,
            notes: p.notes.clone(),
            created_at: p.created_at,
        }
    }
}

/// Pet form payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetInput {
    pub customer_id: String,
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub breed: String,
    /// Whole years; blank means 0.
    #[serde(default)]
    pub age: Option<i64>,
    /// Kilograms; blank means 0.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub notes: String,
}

impl TryFrom<PetInput> for PetDraft {
    type Error = ValidationErrors;

    fn try_from(input: PetInput) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let species = input.species.parse::<Species>().unwrap_or_else(|err| {
            errors.push(err);
            Species::Other
        });

        let age = match input.age {
            None => 0,
            Some(age) => u32::try_from(age)
                .ok()
                .filter(|age| *age <= MAX_PET_AGE)
                .unwrap_or_else(|| {
                    errors.push(ValidationError::OutOfRange {
                        field: "age".to_string(),
                        min: 0,
                        max: i64::from(MAX_PET_AGE),
                    });
                    0
                }),
        };

        let draft = PetDraft {
            customer_id: input.customer_id,
            name: input.name,
            species,
            breed: input.breed,
            age,
            weight: input.weight.unwrap_or_default(),
            notes: input.notes,
        };

        // Report the conversion failures alongside the regular field rules
        if !errors.is_empty() {
            if let Err(rest) = validate_pet(draft.clone()) {
                errors.extend(rest.into_vec());
            }
        }

        match ValidationErrors::from_vec(errors) {
            Some(errors) => Err(errors),
            None => Ok(draft),
        }
    }
}

/// Lists pets, filtered by name or breed when `query` is non-blank.
pub fn list_pets(state: &StoreState, query: Option<&str>) -> Result<Vec<PetDto>, ApiError> {
    let query = search_text(query);
    debug!(query = %query, "list_pets command");

    state.with_store(|store| {
        Ok(store
            .search_pets(query)
            .into_iter()
            .map(|p| PetDto::from_store(store, p))
            .collect())
    })
}

/// Lists the pets of one customer, in registration order.
///
/// An unknown customer simply has no pets.
pub fn list_pets_by_customer(
    state: &StoreState,
    customer_id: &str,
) -> Result<Vec<PetDto>, ApiError> {
    debug!(customer_id = %customer_id, "list_pets_by_customer command");
    state.with_store(|store| {
        Ok(store
            .get_pets_by_customer_id(customer_id)
            .into_iter()
            .map(|p| PetDto::from_store(store, p))
            .collect())
    })
}

pub fn get_pet(state: &StoreState, id: &str) -> Result<PetDto, ApiError> {
    debug!(id = %id, "get_pet command");
    state.with_store(|store| {
        let pet = store
            .get_pet_by_id(id)
            .ok_or_else(|| StoreError::not_found(EntityKind::Pet, id))?;
        Ok(PetDto::from_store(store, pet))
    })
}

pub fn create_pet(state: &StoreState, input: PetInput) -> Result<PetDto, ApiError> {
    debug!(customer_id = %input.customer_id, "create_pet command");
    let draft = PetDraft::try_from(input)?;

    state.with_store_mut(|store| {
        let pet = store.add_pet(draft)?;
        info!(id = %pet.id, species = %pet.species, "Pet registered");
        Ok(PetDto::from_store(store, &pet))
    })
}

pub fn update_pet(state: &StoreState, id: &str, input: PetInput) -> Result<PetDto, ApiError> {
    debug!(id = %id, "update_pet command");

    state.with_store_mut(|store| {
        // Unknown id wins over a bad payload
        if store.get_pet_by_id(id).is_none() {
            return Err(StoreError::not_found(EntityKind::Pet, id).into());
        }
        let pet = store.update_pet(id, PetDraft::try_from(input)?)?;
        Ok(PetDto::from_store(store, &pet))
    })
}

/// Deletes a pet and its appointments.
pub fn delete_pet(state: &StoreState, id: &str) -> Result<DeleteResponse, ApiError> {
    debug!(id = %id, "delete_pet command");
    state.with_store_mut(|store| Ok(store.delete_pet(id)?.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{customer_id, pet_id, seeded};
    use crate::error::ErrorCode;

    fn input(customer_id: &str) -> PetInput {
        PetInput {
            customer_id: customer_id.to_string(),
            name: "Bidu".to_string(),
            species: "dog".to_string(),
            breed: String::new(),
            age: Some(5),
            weight: Some(8.5),
            notes: String::new(),
        }
    }

    #[test]
    fn test_create_pet() {
        let state = seeded();
        let ana = customer_id(&state, "Ana Oliveira");

        let pet = create_pet(&state, input(&ana)).unwrap();
        assert_eq!(pet.owner_name, "Ana Oliveira");
        assert_eq!(pet.species, Species::Dog);
        assert_eq!(pet.species_label, "Cachorro");
        assert_eq!(pet.description, "Cachorro");
        assert_eq!(list_pets_by_customer(&state, &ana).unwrap().len(), 2);
    }

    #[test]
    fn test_conversion_errors_join_field_errors() {
        let state = seeded();
        let mut bad = input("");
        bad.name = " ".to_string();
        bad.species = "dragon".to_string();
        bad.age = Some(-1);

        let err = create_pet(&state, bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.fields, vec!["species", "age", "customerId", "name"]);
    }

    #[test]
    fn test_age_above_limit() {
        let state = seeded();
        let ana = customer_id(&state, "Ana Oliveira");
        let mut old = input(&ana);
        old.age = Some(101);

        let err = create_pet(&state, old).unwrap_err();
        assert_eq!(err.fields, vec!["age"]);
    }

    #[test]
    fn test_unknown_owner_is_rejected() {
        let state = seeded();
        let err = create_pet(&state, input("nobody")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.fields, vec!["customerId"]);
    }

    #[test]
    fn test_update_moves_pet_to_new_owner() {
        let state = seeded();
        let thor = pet_id(&state, "Thor");
        let joao = customer_id(&state, "João Santos");

        let mut change = input(&joao);
        change.name = "Thor".to_string();
        let pet = update_pet(&state, &thor, change).unwrap();

        assert_eq!(pet.id, thor);
        assert_eq!(pet.owner_name, "João Santos");
    }

    #[test]
    fn test_update_unknown_pet_is_not_found() {
        let state = seeded();
        let mut bad = input("");
        bad.species = "dragon".to_string();

        let err = update_pet(&state, "missing", bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_search_and_delete() {
        let state = seeded();
        assert_eq!(list_pets(&state, Some("golden")).unwrap().len(), 1);

        let thor = pet_id(&state, "Thor");
        let removed = delete_pet(&state, &thor).unwrap();
        assert_eq!(removed.removed_pets, 1);
        assert_eq!(removed.removed_appointments, 1);
        assert_eq!(get_pet(&state, &thor).unwrap_err().code, ErrorCode::NotFound);
    }
}
