//! # User Record Types
//!
//! The stored record plus the two input shapes the store accepts.

use serde::{Deserialize, Serialize};

/// A live user record.
///
/// `id` is assigned by the store, immutable once assigned, and never
/// reused after deletion. `name` and `email` are stored normalized
/// (name trimmed, email trimmed + lowercased).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// Full create/replace payload.
///
/// Every field is an `Option` so that a missing JSON field reaches
/// validation as "missing" instead of failing deserialization. `age`
/// arrives as `i64` so negative and out-of-range inputs are representable
/// and rejected by validation, never silently coerced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

impl UserInput {
    pub fn new(name: &str, email: &str, age: i64) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            age: Some(age),
        }
    }
}

/// Sparse patch payload. An absent (or JSON null) field is left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

impl UserPatch {
    /// True when no field is present at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}
