//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SOUK_SELLER_PHONE` - WhatsApp destination for checkout deep links,
//!   international format without `+` (e.g. `212612345678`)
//!
//! ## Optional
//! - `SOUK_HOST` - Bind address (default: 127.0.0.1)
//! - `SOUK_PORT` - Listen port (default: 3000)
//! - `SOUK_DATA_FILE` - Catalog document path (default: data/products.json)
//! - `IMGBB_API_KEY` - Image host API key; uploads fail upstream when unset

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path of the catalog JSON document
    pub data_file: PathBuf,
    /// WhatsApp number checkout messages are addressed to
    pub seller_phone: String,
    /// Image host API key (`SecretString` redacts it from Debug output)
    pub imgbb_api_key: Option<SecretString>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SOUK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SOUK_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SOUK_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SOUK_PORT".to_string(), e.to_string()))?;
        let data_file = PathBuf::from(get_env_or_default("SOUK_DATA_FILE", "data/products.json"));
        let seller_phone = get_required_env("SOUK_SELLER_PHONE")?;
        let imgbb_api_key = get_optional_env("IMGBB_API_KEY").map(SecretString::from);

        Ok(Self {
            host,
            port,
            data_file,
            seller_phone,
            imgbb_api_key,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            data_file: PathBuf::from("data/products.json"),
            seller_phone: "15551234567".to_string(),
            imgbb_api_key: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ServerConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            data_file: PathBuf::from("data/products.json"),
            seller_phone: "15551234567".to_string(),
            imgbb_api_key: Some(SecretString::from("super_secret_key")),
        };

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("super_secret_key"));
    }
}
