//! Backend client
//!
//! Read access to the hosted Postgres-over-REST API. One client is built
//! from a [`BackendConfig`] at startup and passed to whoever needs it.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::query::Query;
use crate::config::BackendConfig;

/// Backend error types
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid backend URL '{0}'")]
    InvalidUrl(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;

/// PostgREST error body
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
}

/// Build a [`BackendError::Api`] from a non-success response body
pub(crate) fn api_error(status: u16, body: &str) -> BackendError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => {
            let mut parts = Vec::new();
            if let Some(code) = parsed.code {
                parts.push(format!("[{}]", code));
            }
            if let Some(msg) = parsed.message {
                parts.push(msg);
            }
            if let Some(details) = parsed.details {
                parts.push(format!("({})", details));
            }
            if parts.is_empty() {
                body.trim().to_string()
            } else {
                parts.join(" ")
            }
        }
        Err(_) => body.trim().to_string(),
    };

    BackendError::Api { status, message }
}

/// Client for the backend's REST interface
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
}

impl BackendClient {
    /// Build a client from explicit configuration
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let base_url = Url::parse(config.url.trim_end_matches('/'))
            .map_err(|_| BackendError::InvalidUrl(config.url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(config.url.clone()));
        }

        let bearer = config.access_token.as_deref().unwrap_or(&config.api_key);

        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value(&config.api_key)?);
        headers.insert(
            reqwest::header::AUTHORIZATION,
            header_value(&format!("Bearer {}", bearer))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    /// The configured project URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// REST endpoint for a table
    pub fn table_url(&self, table: &str) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.as_str().trim_end_matches('/'),
            table
        )
    }

    /// Select all rows matching a query
    pub async fn select_many<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &Query,
    ) -> BackendResult<Vec<T>> {
        let url = self.table_url(table);
        let params = query.to_params();
        debug!("GET {} {:?}", url, params);

        let response = self.http.get(&url).query(&params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Select the first row matching a query, if any
    pub async fn select_optional<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Query,
    ) -> BackendResult<Option<T>> {
        let rows = self.select_many(table, &query.limit(1)).await?;
        Ok(rows.into_iter().next())
    }
}

fn header_value(value: &str) -> BackendResult<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| BackendError::InvalidHeader(e.to_string()))
}
