//! Application state - Dependency injection container.
//!
//! Holds the services handlers need; constructed once at startup and
//! cloned into every request by axum.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{InMemoryUserRepository, UserRepository};
use crate::services::{UserDirectory, UserService};

/// Application state containing all services.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create application state backed by the seeded in-memory store.
    pub fn from_config(config: Config) -> Self {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::seeded());
        Self::new(Arc::new(UserDirectory::new(repo)), config)
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>, config: Config) -> Self {
        Self {
            user_service,
            config,
        }
    }
}
