//! Advisory field checks for the registration form.
//!
//! Every check treats empty input as valid so a hint only appears once the
//! user has typed something wrong. The server re-validates everything.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::Field;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9._%+-]+@(gmail\.com|outlook\.com|cmkl\.ac\.th|[A-Za-z0-9_-]+\.ac\.th|[A-Za-z0-9_-]+\.com)$",
    )
    .unwrap()
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^0[0-9]{9}$").unwrap());

static NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Invalid email format")]
    Email,
    #[error("Must be 10 digits starting with 0")]
    Phone,
    #[error("No spaces or numbers allowed")]
    Name,
}

pub fn validate_email(value: &str) -> Result<(), FieldError> {
    check(&EMAIL, value, FieldError::Email)
}

pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    check(&PHONE, value, FieldError::Phone)
}

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    check(&NAME, value, FieldError::Name)
}

/// Runs the check bound to `field`. Fields without a check always pass.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    match field {
        Field::Email => validate_email(value),
        Field::Phone => validate_phone(value),
        Field::FirstName | Field::LastName => validate_name(value),
        _ => Ok(()),
    }
}

fn check(pattern: &Regex, value: &str, error: FieldError) -> Result<(), FieldError> {
    if value.is_empty() || pattern.is_match(value) {
        Ok(())
    } else {
        Err(error)
    }
}
