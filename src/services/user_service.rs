//! User service - Handles user-related business logic.
//!
//! Orchestrates the repository and maps missing records to the
//! NotFound error kind, so handlers only deal with `AppResult`.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get a user by id
    async fn get_user(&self, id: u32) -> AppResult<User>;

    /// Create a user with a repository-assigned id
    async fn create_user(&self, name: String) -> AppResult<User>;

    /// Replace a user's name, returning the updated record
    async fn update_user(&self, id: u32, name: String) -> AppResult<User>;

    /// Remove a user, returning the removed record
    async fn delete_user(&self, id: u32) -> AppResult<User>;
}

/// Concrete implementation of UserService backed by a repository.
pub struct UserDirectory {
    repo: Arc<dyn UserRepository>,
}

impl UserDirectory {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserDirectory {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_user(&self, id: u32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_user(&self, name: String) -> AppResult<User> {
        self.repo.insert(name).await
    }

    async fn update_user(&self, id: u32, name: String) -> AppResult<User> {
        self.repo.update_name(id, name).await?.ok_or_not_found()
    }

    async fn delete_user(&self, id: u32) -> AppResult<User> {
        self.repo.remove(id).await?.ok_or_not_found()
    }
}
