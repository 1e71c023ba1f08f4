use crate::errors::{LogError, UNKNOWN_ERROR};
use crate::models::{ActionRecord, LogResponse};
use reqwest::Client;
use tracing::error;

/// Posts action records to a remote logging endpoint.
#[derive(Debug, Clone)]
pub struct LogClient {
    http: Client,
    endpoint: String,
}

impl LogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint's success message, or the message to alert with.
    pub async fn log(&self, record: &ActionRecord) -> Result<String, LogError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(record)
            .send()
            .await
            .map_err(|err| {
                error!("network error posting to {}: {err}", self.endpoint);
                LogError::network()
            })?;

        let ok = response.status().is_success();
        let body: LogResponse = response.json().await.map_err(|err| {
            error!("undecodable response from {}: {err}", self.endpoint);
            LogError::network()
        })?;

        if ok && body.is_success() {
            return Ok(body.message.unwrap_or_default());
        }

        error!("logging endpoint rejected record: {body:?}");
        Err(LogError::new(
            body.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        ))
    }
}
