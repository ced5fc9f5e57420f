//! In-memory user repository.
//!
//! The store owns the user collection behind a `RwLock` and is the only
//! place that mutates it. Handlers receive it through `AppState`, so
//! there is no ambient global and every find+mutate sequence holds the
//! lock for its whole duration.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::config::{FIRST_USER_ID, SEED_NAMES};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Repository abstraction over the user collection.
///
/// Async so a persistence-backed implementation can slot in without
/// touching the service layer.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Snapshot of all records in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find a record by id (linear scan)
    async fn find_by_id(&self, id: u32) -> AppResult<Option<User>>;

    /// Append a new record with the next free id
    async fn insert(&self, name: String) -> AppResult<User>;

    /// Replace the name of the record with the given id
    async fn update_name(&self, id: u32, name: String) -> AppResult<Option<User>>;

    /// Remove and return the record with the given id
    async fn remove(&self, id: u32) -> AppResult<Option<User>>;
}

/// Process-scoped in-memory implementation.
///
/// Seeded with the fixed startup records; contents reset on restart.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create a store seeded with the default records
    pub fn seeded() -> Self {
        let users = SEED_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| User::new(i as u32 + FIRST_USER_ID, *name))
            .collect();

        Self {
            users: RwLock::new(users),
        }
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Next id to hand out: one past the current maximum, or the first
    /// id when the collection is empty.
    fn next_id(users: &[User]) -> u32 {
        users
            .iter()
            .map(|u| u.id)
            .max()
            .map_or(FIRST_USER_ID, |max| max + 1)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> AppResult<Vec<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::operation("user store lock poisoned"))?;
        Ok(users.clone())
    }

    async fn find_by_id(&self, id: u32) -> AppResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|_| AppError::operation("user store lock poisoned"))?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, name: String) -> AppResult<User> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::operation("user store lock poisoned"))?;

        let user = User::new(Self::next_id(&users), name);
        users.push(user.clone());
        Ok(user)
    }

    async fn update_name(&self, id: u32, name: String) -> AppResult<Option<User>> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::operation("user store lock poisoned"))?;

        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.rename(name);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: u32) -> AppResult<Option<User>> {
        let mut users = self
            .users
            .write()
            .map_err(|_| AppError::operation("user store lock poisoned"))?;

        // Existence is decided on the found record, never on index
        // truthiness, so removing the record at index 0 works.
        match users.iter().position(|u| u.id == id) {
            Some(index) => Ok(Some(users.remove(index))),
            None => Ok(None),
        }
    }
}
