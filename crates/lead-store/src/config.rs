//! Configuration management for the Lead Store
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::env;

use crate::storage::StorageBackend;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API server host
    pub host: String,

    /// API server port
    pub port: u16,

    /// Where leads are kept
    pub storage_backend: StorageBackend,

    /// Redis connection URL (used by the redis backend)
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("STORE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("STORE_PORT")
                .unwrap_or_else(|_| "8090".to_string())
                .parse()
                .context("Invalid STORE_PORT")?,

            storage_backend: env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "redis".to_string())
                .parse()
                .context("Invalid STORAGE_BACKEND")?,

            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("STORE_PORT must be greater than 0");
        }

        Ok(())
    }

    /// Get the API server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        env::remove_var("STORE_HOST");
        env::remove_var("STORE_PORT");
        env::remove_var("STORAGE_BACKEND");
        env::remove_var("REDIS_URL");

        let config = Config::from_env().expect("Failed to load config");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8090);
        assert_eq!(config.storage_backend, StorageBackend::Redis);
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
    }

    #[test]
    fn test_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 9000,
            storage_backend: StorageBackend::Memory,
            redis_url: String::new(),
        };

        assert_eq!(config.address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = Config {
            host: "0.0.0.0".to_string(),
            port: 0,
            storage_backend: StorageBackend::Memory,
            redis_url: String::new(),
        };

        let result = config.validate();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("STORE_PORT must be greater than 0"));
    }
}
