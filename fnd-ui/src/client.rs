//! Classification backend client
//!
//! Sends the normalized request payload to the remote `classify-all`
//! endpoint and returns the raw structured response. Callers treat every
//! failure variant identically: connect error, timeout, non-2xx status
//! and unparseable body all end the analysis in the terminal
//! backend-unreachable result.

use std::time::Duration;

use fnd_common::RawClassificationResponse;
use serde::Serialize;
use thiserror::Error;

/// Default backend endpoint (Flask development server).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api/classify-all";

const USER_AGENT: &str = concat!("fnd-ui/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Classifier client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Backend error {0}: {1}")]
    Status(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Request body for the classify-all endpoint.
///
/// The widget only submits text; the profile, URL and image slots are
/// sent empty so the backend contract stays stable.
#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    tweet_text: &'a str,
    profile: Option<serde_json::Value>,
    urls: Vec<String>,
    image_base64: Option<String>,
}

impl<'a> ClassifyRequest<'a> {
    fn for_text(text: &'a str) -> Self {
        Self {
            tweet_text: text,
            profile: None,
            urls: Vec::new(),
            image_base64: None,
        }
    }
}

/// Classification backend API client
pub struct ClassifierClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl ClassifierClient {
    pub fn new(endpoint: String) -> Result<Self, ClientError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit text for classification and return the raw response.
    pub async fn classify(&self, text: &str) -> Result<RawClassificationResponse, ClientError> {
        let payload = ClassifyRequest::for_text(text);

        tracing::debug!(chars = text.chars().count(), "Querying classification backend");

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::Status(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_creation() {
        let client = ClassifierClient::new(DEFAULT_BACKEND_URL.to_string());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().endpoint(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_request_payload_shape() {
        let payload = ClassifyRequest::for_text("BREAKING news");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "tweet_text": "BREAKING news",
                "profile": null,
                "urls": [],
                "image_base64": null
            })
        );
    }
}
