//! # User Store
//!
//! The in-memory record collection plus the id-allocation counter. A
//! single mutex serializes every operation so that concurrent transport
//! dispatch observes a consistent snapshot of the collection and the
//! counter together.
//!
//! Each operation is one atomic step: it either completes its full effect
//! or returns a typed failure leaving the collection untouched.

use std::sync::{Mutex, MutexGuard};

use super::error::{StoreError, StoreResult};
use super::user::{User, UserInput, UserPatch};
use super::validate::{normalize_email, validate_full, validate_partial};

/// Collection plus counter, guarded together.
struct StoreInner {
    users: Vec<User>,
    next_id: u64,
}

impl StoreInner {
    /// True iff some live record other than `exclude_id` already holds the
    /// normalized email. Stored emails are always normalized, so a direct
    /// comparison suffices.
    fn email_taken(&self, email: &str, exclude_id: Option<u64>) -> bool {
        self.users
            .iter()
            .any(|u| Some(u.id) != exclude_id && u.email == email)
    }

    fn position(&self, id: u64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }

    /// Monotonic allocation: ids are never reused, even after deletion.
    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// In-memory user store.
///
/// Explicitly constructed and passed by reference to the transport layer;
/// there is no process-wide singleton, so tests get isolated instances.
pub struct UserStore {
    inner: Mutex<StoreInner>,
}

impl UserStore {
    /// Empty store; ids start at 1.
    pub fn new() -> Self {
        Self::with_seed(Vec::new())
    }

    /// Store pre-populated with the default seed records.
    pub fn seeded() -> Self {
        Self::with_seed(vec![
            User::new(1, "John Doe", "john@example.com", 30),
            User::new(2, "Jane Smith", "jane@example.com", 25),
            User::new(3, "Bob Johnson", "bob@example.com", 35),
        ])
    }

    /// Store seeded with the given records; the counter starts one past
    /// the highest seed id.
    pub fn with_seed(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(StoreInner { users, next_id }),
        }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, StoreInner>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Internal("store lock poisoned".to_string()))
    }

    /// All live records in creation order. Never fails for expected input.
    pub fn list(&self) -> StoreResult<Vec<User>> {
        Ok(self.lock()?.users.clone())
    }

    /// Single record by id.
    pub fn get(&self, id: u64) -> StoreResult<User> {
        self.lock()?
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// True iff a live record other than `exclude_id` holds the candidate
    /// email after normalization.
    pub fn email_taken(&self, email: &str, exclude_id: Option<u64>) -> StoreResult<bool> {
        let email = normalize_email(email);
        Ok(self.lock()?.email_taken(&email, exclude_id))
    }

    /// Validate, normalize, enforce uniqueness, then insert with a fresh
    /// id. Exactly one of {validation failure, conflict, insertion}
    /// happens; there is no partial insert.
    pub fn create(&self, input: &UserInput) -> StoreResult<User> {
        let valid = validate_full(input).map_err(StoreError::Validation)?;

        let mut inner = self.lock()?;
        if inner.email_taken(&valid.email, None) {
            return Err(StoreError::Conflict);
        }

        let id = inner.allocate_id();
        let user = User {
            id,
            name: valid.name,
            email: valid.email,
            age: valid.age,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    /// Full update: all three fields are mandatory inputs. Any failure
    /// leaves the existing record unmodified.
    pub fn replace(&self, id: u64, input: &UserInput) -> StoreResult<User> {
        let mut inner = self.lock()?;
        let idx = inner.position(id).ok_or(StoreError::NotFound)?;

        let valid = validate_full(input).map_err(StoreError::Validation)?;
        if inner.email_taken(&valid.email, Some(id)) {
            return Err(StoreError::Conflict);
        }

        let user = &mut inner.users[idx];
        user.name = valid.name;
        user.email = valid.email;
        user.age = valid.age;
        Ok(user.clone())
    }

    /// Partial update: only present fields are validated and applied.
    /// Uniqueness is checked only when the email is present and actually
    /// changes, so a no-op self-rename succeeds.
    pub fn patch(&self, id: u64, patch: &UserPatch) -> StoreResult<User> {
        let mut inner = self.lock()?;
        let idx = inner.position(id).ok_or(StoreError::NotFound)?;

        let valid = validate_partial(patch).map_err(StoreError::Validation)?;

        if let Some(email) = &valid.email {
            if *email != inner.users[idx].email && inner.email_taken(email, Some(id)) {
                return Err(StoreError::Conflict);
            }
        }

        let user = &mut inner.users[idx];
        if let Some(name) = valid.name {
            user.name = name;
        }
        if let Some(email) = valid.email {
            user.email = email;
        }
        if let Some(age) = valid.age {
            user.age = age;
        }
        Ok(user.clone())
    }

    /// Remove a record and return a copy of it. Its id is retired
    /// permanently.
    pub fn delete(&self, id: u64) -> StoreResult<User> {
        let mut inner = self.lock()?;
        let idx = inner.position(id).ok_or(StoreError::NotFound)?;
        Ok(inner.users.remove(idx))
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
