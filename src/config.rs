//! Configuration
//!
//! Backend connection settings read from the environment.

use std::time::Duration;

use thiserror::Error;

pub const ENV_BACKEND_URL: &str = "NUTRICALC_BACKEND_URL";
pub const ENV_BACKEND_KEY: &str = "NUTRICALC_BACKEND_KEY";
pub const ENV_ACCESS_TOKEN: &str = "NUTRICALC_ACCESS_TOKEN";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "NUTRICALC_HTTP_TIMEOUT_SECS";

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} is set but {1} is missing")]
    Incomplete(&'static str, &'static str),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Connection settings for the hosted backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public (anon) API key, sent as `apikey`
    pub api_key: String,
    /// User session token; the API key is used as bearer when absent
    pub access_token: Option<String>,
    /// No timeout unless set
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    /// Read the backend config from the process environment
    ///
    /// Returns Ok(None) when no backend URL is configured.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the backend config through a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let url = match get(ENV_BACKEND_URL) {
            Some(url) => url,
            None => return Ok(None),
        };

        let api_key = get(ENV_BACKEND_KEY)
            .ok_or(ConfigError::Incomplete(ENV_BACKEND_URL, ENV_BACKEND_KEY))?;

        let timeout = match get(ENV_HTTP_TIMEOUT_SECS) {
            Some(raw) => {
                let secs = raw.parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                    ConfigError::InvalidValue {
                        name: ENV_HTTP_TIMEOUT_SECS,
                        value: raw.clone(),
                    }
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Some(Self {
            url,
            api_key,
            access_token: get(ENV_ACCESS_TOKEN),
            timeout,
        }))
    }
}
