//! Configuration for the landing page form
//!
//! Loads configuration from environment variables with sensible defaults.

use anyhow::{Context, Result};
use std::env;

use crate::agency::Agency;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Lead Store service
    pub store_url: String,

    /// Landing page the form is embedded in
    pub agency: Agency,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists (for local development)
        dotenvy::dotenv().ok();

        let config = Config {
            store_url: env::var("LEAD_STORE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8090".to_string()),

            agency: env::var("AGENCY")
                .unwrap_or_else(|_| "healthcare".to_string())
                .parse()
                .context("Invalid AGENCY")?,
        };

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.store_url.starts_with("http://") && !self.store_url.starts_with("https://") {
            anyhow::bail!("LEAD_STORE_URL must be an http(s) URL");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        env::remove_var("LEAD_STORE_URL");
        env::remove_var("AGENCY");

        let config = Config::from_env().expect("Failed to load config");

        assert_eq!(config.store_url, "http://127.0.0.1:8090");
        assert_eq!(config.agency, Agency::Healthcare);
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let config = Config {
            store_url: "redis://127.0.0.1:6379".to_string(),
            agency: Agency::Restaurant,
        };

        assert!(config
            .validate()
            .unwrap_err()
            .to_string()
            .contains("LEAD_STORE_URL"));
    }
}
