//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use serde::{Deserialize, Serialize};
use std::env;

/// Default listen port when `PORT` is unset or unparsable.
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Document database connection string. Absent means the store is not
    /// configured: the server still starts and storage-backed endpoints
    /// answer with a configuration error.
    pub database_url: Option<String>,

    /// Name of the database holding the `artifact` and `useraccount`
    /// collections. Both this and the URL must be set for the store to be
    /// considered configured.
    pub database_name: Option<String>,

    /// Listen port for the HTTP server.
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self {
            database_url: env::var("DATABASE_URL").ok(),
            database_name: env::var("DATABASE_NAME").ok(),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}
