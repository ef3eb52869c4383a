//! # Validation Module
//!
//! Field rules for customers, pets and appointments.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (presentation)                                          │
//! │  ├── Parses strings into numbers, enums, dates                         │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Trims, checks lengths, formats and ranges                         │
//! │  └── Reports EVERY failing field at once                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  ├── Re-runs layer 2 on every add/update                               │
//! │  └── Checks referenced customers/pets exist                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use petshop_core::validation::validate_customer;
//! use petshop_core::CustomerDraft;
//!
//! let draft = CustomerDraft {
//!     name: "  Maria Silva ".to_string(),
//!     email: "maria@email.com".to_string(),
//!     phone: "(11) 99999-1234".to_string(),
//!     address: None,
//! };
//! let clean = validate_customer(draft).unwrap();
//! assert_eq!(clean.name, "Maria Silva");
//! ```

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

use crate::error::{ValidationError, ValidationErrors, ValidationResult};
use crate::types::{AppointmentDraft, CustomerDraft, PetDraft};
use crate::{
    MAX_ADDRESS_LEN, MAX_BREED_LEN, MAX_CUSTOMER_NAME_LEN, MAX_EMAIL_LEN, MAX_NOTES_LEN,
    MAX_PET_AGE, MAX_PET_NAME_LEN, MAX_PET_WEIGHT,
};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// `(11) 99999-1234` or `(11) 9999-1234`; the space after the area code is optional.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\)\s?\d{4,5}-\d{4}$").expect("Invalid regex"));

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("Invalid regex"));

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field and returns it trimmed.
///
/// Length is counted in characters, not bytes.
pub fn validate_required_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    check_len(field, value, max)?;
    Ok(value.to_string())
}

/// Validates an optional text field and returns it trimmed (possibly empty).
pub fn validate_optional_text(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();
    check_len(field, value, max)?;
    Ok(value.to_string())
}

fn check_len(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(())
}

/// Validates an email address.
///
/// ## Example
/// ```rust
/// use petshop_core::validation::validate_email;
///
/// assert!(validate_email("maria@email.com").is_ok());
/// assert!(validate_email("bad").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<String> {
    let email = validate_required_text("email", email, MAX_EMAIL_LEN)?;

    if !EMAIL_RE.is_match(&email) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }

    Ok(email)
}

/// Validates a phone number in `(DD) DDDDD-DDDD` / `(DD) DDDD-DDDD` form.
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if !PHONE_RE.is_match(phone) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must look like (00) 00000-0000".to_string(),
        });
    }

    Ok(phone.to_string())
}

/// Validates a 24-hour `HH:MM` time.
///
/// ## Example
/// ```rust
/// use petshop_core::validation::validate_time;
///
/// assert!(validate_time("09:00").is_ok());
/// assert!(validate_time("23:59").is_ok());
/// assert!(validate_time("24:00").is_err());
/// assert!(validate_time("9:00").is_err());
/// ```
pub fn validate_time(time: &str) -> ValidationResult<String> {
    let time = time.trim();

    if time.is_empty() {
        return Err(ValidationError::Required {
            field: "time".to_string(),
        });
    }

    if !TIME_RE.is_match(time) {
        return Err(ValidationError::InvalidFormat {
            field: "time".to_string(),
            reason: "must be HH:MM between 00:00 and 23:59".to_string(),
        });
    }

    Ok(time.to_string())
}

/// Parses the date field of an appointment form.
///
/// Accepts a plain `YYYY-MM-DD` (date input) or an RFC 3339 timestamp, in
/// which case only its calendar date is kept.
pub fn parse_date(date: &str) -> ValidationResult<NaiveDate> {
    let date = date.trim();

    if date.is_empty() {
        return Err(ValidationError::Required {
            field: "date".to_string(),
        });
    }

    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Ok(day);
    }

    DateTime::parse_from_rfc3339(date)
        .map(|ts| ts.date_naive())
        .map_err(|_| ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: "must be a calendar date (YYYY-MM-DD)".to_string(),
        })
}

/// Validates that a reference id is present.
///
/// Existence is the store's job; this only rejects blanks.
pub fn validate_reference(field: &str, id: &str) -> ValidationResult<String> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(id.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a pet's age in whole years (0 to 100).
pub fn validate_pet_age(age: u32) -> ValidationResult<u32> {
    if age > MAX_PET_AGE {
        return Err(ValidationError::OutOfRange {
            field: "age".to_string(),
            min: 0,
            max: i64::from(MAX_PET_AGE),
        });
    }

    Ok(age)
}

/// Validates a pet's weight in kilograms (0 to 500).
pub fn validate_pet_weight(weight: f64) -> ValidationResult<f64> {
    if !weight.is_finite() || !(0.0..=MAX_PET_WEIGHT).contains(&weight) {
        return Err(ValidationError::OutOfRange {
            field: "weight".to_string(),
            min: 0,
            max: MAX_PET_WEIGHT as i64,
        });
    }

    Ok(weight)
}

// =============================================================================
// Payload Validators
// =============================================================================
// Each payload validator checks every field, collects all failures and returns
// the trimmed draft only if nothing failed.

fn keep<T: Default>(errors: &mut Vec<ValidationError>, result: ValidationResult<T>) -> T {
    result.unwrap_or_else(|err| {
        errors.push(err);
        T::default()
    })
}

fn finish<T>(errors: Vec<ValidationError>, value: T) -> Result<T, ValidationErrors> {
    match ValidationErrors::from_vec(errors) {
        Some(errors) => Err(errors),
        None => Ok(value),
    }
}

/// Validates and normalizes a customer payload.
///
/// An empty address becomes `None`.
pub fn validate_customer(draft: CustomerDraft) -> Result<CustomerDraft, ValidationErrors> {
    let mut errors = Vec::new();

    let name = keep(
        &mut errors,
        validate_required_text("name", &draft.name, MAX_CUSTOMER_NAME_LEN),
    );
    let email = keep(&mut errors, validate_email(&draft.email));
    let phone = keep(&mut errors, validate_phone(&draft.phone));
    let address = keep(
        &mut errors,
        validate_optional_text(
            "address",
            draft.address.as_deref().unwrap_or_default(),
            MAX_ADDRESS_LEN,
        ),
    );

    finish(
        errors,
        CustomerDraft {
            name,
            email,
            phone,
            address: Some(address).filter(|a| !a.is_empty()),
        },
    )
}

/// Validates and normalizes a pet payload.
pub fn validate_pet(draft: PetDraft) -> Result<PetDraft, ValidationErrors> {
    let mut errors = Vec::new();

    let customer_id = keep(
        &mut errors,
        validate_reference("customerId", &draft.customer_id),
    );
    let name = keep(
        &mut errors,
        validate_required_text("name", &draft.name, MAX_PET_NAME_LEN),
    );
    let breed = keep(
        &mut errors,
        validate_optional_text("breed", &draft.breed, MAX_BREED_LEN),
    );
    let age = keep(&mut errors, validate_pet_age(draft.age));
    let weight = keep(&mut errors, validate_pet_weight(draft.weight));
    let notes = keep(
        &mut errors,
        validate_optional_text("notes", &draft.notes, MAX_NOTES_LEN),
    );

    finish(
        errors,
        PetDraft {
            customer_id,
            name,
            species: draft.species,
            breed,
            age,
            weight,
            notes,
        },
    )
}

/// Validates and normalizes an appointment payload.
pub fn validate_appointment(draft: AppointmentDraft) -> Result<AppointmentDraft, ValidationErrors> {
    let mut errors = Vec::new();

    let customer_id = keep(
        &mut errors,
        validate_reference("customerId", &draft.customer_id),
    );
    let pet_id = keep(&mut errors, validate_reference("petId", &draft.pet_id));
    let time = keep(&mut errors, validate_time(&draft.time));
    let notes = keep(
        &mut errors,
        validate_optional_text("notes", &draft.notes, MAX_NOTES_LEN),
    );

    finish(
        errors,
        AppointmentDraft {
            pet_id,
            customer_id,
            service: draft.service,
            date: draft.date,
            time,
            notes,
        },
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ServiceType, Species};

    fn customer(name: &str, email: &str, phone: &str) -> CustomerDraft {
        CustomerDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: None,
        }
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("(11) 99999-1234").is_ok());
        assert!(validate_phone("(11) 9999-1234").is_ok());
        assert!(validate_phone("(11)99999-1234").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone("11 99999-1234").is_err());
        assert!(validate_phone("(11) 999-1234").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@email.com").is_ok());
        assert!(validate_email(" ana@email.com ").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("ana@").is_err());
        assert!(validate_email("ana email@x.com").is_err());

        let long = format!("{}@x.com", "a".repeat(255));
        assert!(matches!(
            validate_email(&long),
            Err(ValidationError::TooLong { max: 255, .. })
        ));
    }

    #[test]
    fn test_validate_time() {
        assert!(validate_time("00:00").is_ok());
        assert!(validate_time("14:30").is_ok());
        assert!(validate_time("23:59").is_ok());

        assert!(validate_time("").is_err());
        assert!(validate_time("24:00").is_err());
        assert!(validate_time("12:60").is_err());
        assert!(validate_time("7:05").is_err());
    }

    #[test]
    fn test_parse_date() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(parse_date("2024-03-10").unwrap(), day);
        assert_eq!(parse_date("2024-03-10T15:00:00Z").unwrap(), day);

        assert!(matches!(parse_date(""), Err(ValidationError::Required { .. })));
        assert!(matches!(
            parse_date("2024-02-30"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_text_length_counts_characters() {
        // 100 two-byte characters still fit in a 100 character limit
        let name = "ã".repeat(100);
        assert!(validate_required_text("name", &name, 100).is_ok());
        assert!(validate_required_text("name", &"ã".repeat(101), 100).is_err());
    }

    #[test]
    fn test_validate_pet_numbers() {
        assert!(validate_pet_age(0).is_ok());
        assert!(validate_pet_age(100).is_ok());
        assert!(validate_pet_age(101).is_err());

        assert!(validate_pet_weight(0.0).is_ok());
        assert!(validate_pet_weight(500.0).is_ok());
        assert!(validate_pet_weight(-0.5).is_err());
        assert!(validate_pet_weight(500.1).is_err());
        assert!(validate_pet_weight(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_customer_reports_every_field() {
        let errors = validate_customer(customer("", "bad", "123")).unwrap_err();
        assert_eq!(errors.fields(), vec!["name", "email", "phone"]);
    }

    #[test]
    fn test_validate_customer_normalizes() {
        let mut draft = customer(" João Santos ", "joao@email.com", "(11) 98888-5678");
        draft.address = Some("   ".to_string());

        let clean = validate_customer(draft).unwrap();
        assert_eq!(clean.name, "João Santos");
        assert_eq!(clean.address, None);
    }

    #[test]
    fn test_validate_pet() {
        let draft = PetDraft {
            customer_id: String::new(),
            name: "Thor".to_string(),
            species: Species::Dog,
            breed: "B".repeat(51),
            age: 3,
            weight: 32.0,
            notes: String::new(),
        };
        let errors = validate_pet(draft).unwrap_err();
        assert_eq!(errors.fields(), vec!["customerId", "breed"]);
    }

    #[test]
    fn test_validate_appointment() {
        let draft = AppointmentDraft {
            pet_id: "p1".to_string(),
            customer_id: "c1".to_string(),
            service: ServiceType::Grooming,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            time: "25:00".to_string(),
            notes: "n".repeat(501),
        };
        let errors = validate_appointment(draft).unwrap_err();
        assert_eq!(errors.fields(), vec!["time", "notes"]);
    }
}
