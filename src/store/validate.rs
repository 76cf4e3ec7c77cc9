//! # Field Validation
//!
//! Validation collects every violation in field order, it never stops at
//! the first. A successful validation produces a normalized, typed value
//! set so the store only ever inserts data that satisfies its invariants.

use super::user::{UserInput, UserPatch};

/// Inclusive age bounds.
pub const AGE_MIN: i64 = 1;
pub const AGE_MAX: i64 = 120;

pub(crate) const MSG_NAME_REQUIRED: &str = "Name is required";
pub(crate) const MSG_NAME_EMPTY: &str = "Name cannot be empty";
pub(crate) const MSG_EMAIL_INVALID: &str = "Valid email is required";
pub(crate) const MSG_AGE_RANGE: &str = "Age must be between 1 and 120";

/// A fully validated, normalized candidate record (everything but the id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUser {
    pub name: String,
    pub email: String,
    pub age: u32,
}

/// A validated, normalized sparse update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

/// Trim surrounding whitespace from a candidate name.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_string()
}

/// Trim and lowercase a candidate email.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn valid_email(email: &str) -> bool {
    email.contains('@')
}

fn valid_age(age: i64) -> bool {
    (AGE_MIN..=AGE_MAX).contains(&age)
}

/// Full validation: all three fields are mandatory.
pub fn validate_full(input: &UserInput) -> Result<ValidUser, Vec<String>> {
    let mut errors = Vec::new();

    let name = match &input.name {
        Some(name) if !name.trim().is_empty() => Some(normalize_name(name)),
        _ => {
            errors.push(MSG_NAME_REQUIRED.to_string());
            None
        }
    };

    let email = match &input.email {
        Some(email) if valid_email(email) => Some(normalize_email(email)),
        _ => {
            errors.push(MSG_EMAIL_INVALID.to_string());
            None
        }
    };

    let age = match input.age {
        Some(age) if valid_age(age) => Some(age as u32),
        _ => {
            errors.push(MSG_AGE_RANGE.to_string());
            None
        }
    };

    match (name, email, age) {
        (Some(name), Some(email), Some(age)) => Ok(ValidUser { name, email, age }),
        _ => Err(errors),
    }
}

/// Partial validation: only present fields are checked.
///
/// A present but empty or out-of-range value is a violation, not a no-op:
/// present means validated.
pub fn validate_partial(patch: &UserPatch) -> Result<ValidPatch, Vec<String>> {
    let mut errors = Vec::new();
    let mut valid = ValidPatch::default();

    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            errors.push(MSG_NAME_EMPTY.to_string());
        } else {
            valid.name = Some(normalize_name(name));
        }
    }

    if let Some(email) = &patch.email {
        if valid_email(email) {
            valid.email = Some(normalize_email(email));
        } else {
            errors.push(MSG_EMAIL_INVALID.to_string());
        }
    }

    if let Some(age) = patch.age {
        if valid_age(age) {
            valid.age = Some(age as u32);
        } else {
            errors.push(MSG_AGE_RANGE.to_string());
        }
    }

    if errors.is_empty() {
        Ok(valid)
    } else {
        Err(errors)
    }
}
