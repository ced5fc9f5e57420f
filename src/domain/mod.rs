//! Domain layer - Core business entities
//!
//! Contains the core domain model independent of HTTP and storage
//! concerns.

pub mod user;

pub use user::User;
