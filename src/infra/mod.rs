//! Infrastructure layer - Data access
//!
//! Provides the repository abstraction and its in-memory
//! implementation following the Repository pattern.

pub mod repository;

pub use repository::{InMemoryUserRepository, UserRepository};
