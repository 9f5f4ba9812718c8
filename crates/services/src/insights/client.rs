use async_trait::async_trait;
use reqwest::Client;
use std::env;

use assess_core::model::AnswerSheet;

use super::transport::{InsightRequestBody, InsightResponse, InsightTransport};
use crate::error::TransportError;

const GENERATE_PATH: &str = "/api/generate-insights";

#[derive(Clone, Debug)]
pub struct InsightServiceConfig {
    pub base_url: String,
}

impl InsightServiceConfig {
    /// Reads the service location from `ASSESS_INSIGHT_BASE_URL`, defaulting
    /// to the development server.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var("ASSESS_INSIGHT_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".into());
        Self { base_url }
    }

    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// HTTP implementation of [`InsightTransport`].
///
/// The service reports generation failures as JSON bodies on non-2xx
/// statuses, so the body is parsed regardless of status; only an unreadable
/// or non-JSON body counts as a transport failure.
#[derive(Clone)]
pub struct HttpInsightTransport {
    client: Client,
    config: InsightServiceConfig,
}

impl HttpInsightTransport {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(InsightServiceConfig::from_env())
    }

    #[must_use]
    pub fn new(config: InsightServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), GENERATE_PATH)
    }

    fn classify(error: &reqwest::Error) -> TransportError {
        if error.is_connect() || error.is_timeout() {
            TransportError::Connection(error.to_string())
        } else {
            TransportError::Other(error.to_string())
        }
    }
}

#[async_trait]
impl InsightTransport for HttpInsightTransport {
    async fn request(&self, answers: &AnswerSheet) -> Result<InsightResponse, TransportError> {
        let snapshot = answers.all();
        let body = InsightRequestBody { answers: &snapshot };

        let response = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::classify(&e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::classify(&e))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            TransportError::Other(format!(
                "unexpected response from insight service (status {status}): {e}"
            ))
        })
    }
}
