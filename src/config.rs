use serde::Deserialize;
use std::env;

use crate::constants::DEFAULT_TRON_API_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,
    pub environment: String,

    // Database
    pub database_url: String,
    pub database_max_connections: u32,

    // Tron node
    pub tron_api_url: String,
    pub tron_api_key: Option<String>,

    // CORS
    pub cors_allowed_origins: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            database_url: env::var("DATABASE_URL")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,

            tron_api_url: env::var("TRON_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRON_API_URL.to_string()),
            tron_api_key: env::var("TRON_API_KEY").ok(),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.database_url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL is empty");
        }
        if self.tron_api_url.trim().is_empty() {
            anyhow::bail!("TRON_API_URL is empty");
        }

        if self.tron_api_key.is_none() && self.tron_api_url.contains("trongrid.io") {
            tracing::warn!("No TRON_API_KEY set; public TronGrid rate limits will apply");
        }
        if self.cors_allowed_origins.trim().is_empty() {
            tracing::warn!("CORS_ALLOWED_ORIGINS is empty; requests may be blocked");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
            database_url: "postgres://localhost/wallet".to_string(),
            database_max_connections: 1,
            tron_api_url: DEFAULT_TRON_API_URL.to_string(),
            tron_api_key: None,
            cors_allowed_origins: "*".to_string(),
        }
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(test_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_database_url() {
        let mut config = test_config();
        config.database_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_tron_api_url() {
        let mut config = test_config();
        config.tron_api_url = String::new();
        assert!(config.validate().is_err());
    }
}
