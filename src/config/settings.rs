//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_APP_NAME, DEFAULT_DATABASE_HOST, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    ENV_DEVELOPMENT,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Display name logged at startup
    pub app_name: String,
    /// Environment mode ("development" enables request logging)
    pub environment: String,
    /// Database host, logged at startup but never dialed (no
    /// persistence layer yet)
    pub database_host: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every field has a default, so loading never fails.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
            environment: env::var("APP_ENV").unwrap_or_else(|_| ENV_DEVELOPMENT.to_string()),
            database_host: env::var("DATABASE_HOST")
                .unwrap_or_else(|_| DEFAULT_DATABASE_HOST.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Whether the app runs in development mode.
    pub fn is_development(&self) -> bool {
        self.environment == ENV_DEVELOPMENT
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_mode_detection() {
        let mut config = Config::from_env();
        config.environment = "development".to_string();
        assert!(config.is_development());

        config.environment = "production".to_string();
        assert!(!config.is_development());
    }

    #[test]
    fn test_server_addr_format() {
        let mut config = Config::from_env();
        config.server_host = "127.0.0.1".to_string();
        config.server_port = 3000;
        assert_eq!(config.server_addr(), "127.0.0.1:3000");
    }
}
