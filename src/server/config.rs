//! Environment configuration.

use crate::server::error::config::ConfigError;

static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Settings read from the environment at startup.
pub struct Config {
    /// SeaORM connection string for the match database.
    pub database_url: String,
    /// Valkey/Redis URL of the session store shared with the auth system.
    pub valkey_url: String,
    /// Socket address the HTTP server binds to.
    pub listen_addr: String,
}

impl Config {
    /// Read the configuration, `LISTEN_ADDR` falls back to `0.0.0.0:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr =
            std::env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        if listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: format!("'{}' is not a socket address", listen_addr),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            listen_addr,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
