//! # User Store Module
//!
//! The in-memory resource store: one record collection plus an
//! id-allocation counter, with validation and uniqueness enforced on
//! every mutating operation.
//!
//! Every operation returns a typed result; expected failures (not found,
//! validation, conflict) never panic.

pub mod error;
pub mod store;
pub mod user;
pub mod validate;

pub use error::{StoreError, StoreResult};
pub use store::UserStore;
pub use user::{User, UserInput, UserPatch};
pub use validate::{
    normalize_email, normalize_name, validate_full, validate_partial, ValidPatch, ValidUser,
    AGE_MAX, AGE_MIN,
};
