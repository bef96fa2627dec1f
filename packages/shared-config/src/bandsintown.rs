//! Bandsintown API configuration types

use crate::{get_env_or_default, get_required_env, parse_env, ConfigError, ConfigResult};

/// Public Bandsintown REST endpoint
pub const DEFAULT_BASE_URL: &str = "https://rest.bandsintown.com";

/// Bandsintown API configuration
#[derive(Debug, Clone)]
pub struct BandsintownConfig {
    /// API base URL (scheme, host and optional path prefix)
    pub base_url: String,

    /// Application id sent as `app_id` on every request
    pub app_id: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl BandsintownConfig {
    /// Load Bandsintown configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first if present;
    /// variables already set in the process environment take precedence.
    ///
    /// `BANDSINTOWN_APP_ID` is required. `BANDSINTOWN_BASE_URL`,
    /// `BANDSINTOWN_TIMEOUT` and `BANDSINTOWN_CONNECT_TIMEOUT` fall back to
    /// defaults.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();

        let app_id = get_required_env("BANDSINTOWN_APP_ID")?;
        if app_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "BANDSINTOWN_APP_ID".to_string(),
                "app id cannot be empty".to_string(),
            ));
        }

        let base_url = get_env_or_default("BANDSINTOWN_BASE_URL", DEFAULT_BASE_URL);
        validate_base_url(&base_url)?;

        Ok(Self {
            base_url,
            app_id,
            timeout_secs: parse_env("BANDSINTOWN_TIMEOUT", 10)?,
            connect_timeout_secs: parse_env("BANDSINTOWN_CONNECT_TIMEOUT", 5)?,
        })
    }

    /// Create a configuration with custom base URL and app id (useful for testing)
    pub fn new(base_url: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            app_id: app_id.into(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
        }
    }

    /// Create a configuration for the public endpoint
    pub fn with_app_id(app_id: impl Into<String>) -> Self {
        Self::new(DEFAULT_BASE_URL, app_id)
    }
}

fn validate_base_url(url: &str) -> ConfigResult<()> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidUrl(
            "BANDSINTOWN_BASE_URL".to_string(),
            "URL cannot be empty".to_string(),
        ));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(ConfigError::InvalidUrl(
            "BANDSINTOWN_BASE_URL".to_string(),
            format!("expected http:// or https:// scheme, got {}", trimmed),
        ));
    }
    Ok(())
}
