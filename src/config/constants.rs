//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Base path the user routes are mounted under
pub const USERS_BASE_PATH: &str = "/api/usuarios";

/// Directory served as static assets
pub const STATIC_DIR: &str = "public";

// =============================================================================
// Application
// =============================================================================

/// Default application display name
pub const DEFAULT_APP_NAME: &str = "Usuarios API";

/// Default database host (configured but never dialed, see DESIGN.md)
pub const DEFAULT_DATABASE_HOST: &str = "localhost";

/// Environment mode that enables request logging
pub const ENV_DEVELOPMENT: &str = "development";

// =============================================================================
// Seed Data
// =============================================================================

/// Names of the records the store starts with; ids are assigned 1..=N
/// in this order on every process start.
pub const SEED_NAMES: &[&str] = &["Fernando", "Maria", "Pedro", "Javier", "Luis", "Juan"];

/// First id handed out when the collection is empty
pub const FIRST_USER_ID: u32 = 1;
