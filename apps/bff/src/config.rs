use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_BACKEND_API_URL: &str = "http://localhost:8080/api/v1";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the BFF starts against a local backend
/// with no configuration at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_api_url: String,
    pub backend_timeout: Duration,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_api_url = lookup("BACKEND_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_API_URL.to_string());

        let timeout_secs = lookup("BACKEND_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("BACKEND_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            backend_api_url: trim_base_url(&backend_api_url),
            backend_timeout: Duration::from_secs(timeout_secs),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
