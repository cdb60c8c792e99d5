use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use relay_common::config::AppConfig;
use relay_common::error::PollError;

/// Source of raw status responses, keyed by a `from_date` cursor.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch statuses changed since `cursor` (seconds since epoch).
    async fn poll(&self, cursor: i64) -> Result<Value, PollError>;
}

/// HTTP client for the homework status API.
///
/// Performs exactly one request per call. Retrying is left to the next
/// cycle of the poll loop.
pub struct ApiPoller {
    client: Client,
    endpoint: String,
    auth_header: String,
}

impl ApiPoller {
    pub fn new(
        endpoint: impl Into<String>,
        token: &str,
        timeout: Duration,
    ) -> Result<Self, PollError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PollError::Request(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            auth_header: format!("OAuth {token}"),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, PollError> {
        Self::new(
            config.status_api_endpoint.clone(),
            &config.practicum_token,
            config.http_timeout(),
        )
    }
}

#[async_trait]
impl StatusSource for ApiPoller {
    async fn poll(&self, cursor: i64) -> Result<Value, PollError> {
        tracing::debug!(endpoint = %self.endpoint, from_date = cursor, "Polling status API");

        let resp = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, &self.auth_header)
            .query(&[("from_date", cursor)])
            .send()
            .await
            .map_err(|e| PollError::Request(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(PollError::HttpStatus(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| PollError::Request(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| PollError::Decode(e.to_string()))
    }
}
