use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use assess_core::model::{AnswerSheet, InsightPayload, Step};

use crate::error::TransportError;

/// Request body sent to the insight-generation service.
#[derive(Debug, Serialize)]
pub(crate) struct InsightRequestBody<'a> {
    pub answers: &'a BTreeMap<Step, String>,
}

/// One response from the insight-generation service.
///
/// Failure responses may carry a user-facing `error` message and a hint that
/// the request is worth retrying.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InsightResponse {
    pub success: bool,
    #[serde(default)]
    pub insights: Option<InsightPayload>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub retry_suggested: bool,
}

impl InsightResponse {
    /// Successful response carrying a payload (test helper shape).
    #[must_use]
    pub fn success(insights: InsightPayload) -> Self {
        Self {
            success: true,
            insights: Some(insights),
            error: None,
            retry_suggested: false,
        }
    }

    /// Failure response with an optional message and retry hint.
    #[must_use]
    pub fn failure(error: Option<String>, retry_suggested: bool) -> Self {
        Self {
            success: false,
            insights: None,
            error,
            retry_suggested,
        }
    }
}

/// One network operation: submit the full answer mapping, receive an
/// [`InsightResponse`].
///
/// Implementations perform exactly one attempt per call; all retry policy
/// lives in [`crate::insights::InsightCoordinator`].
#[async_trait]
pub trait InsightTransport: Send + Sync {
    async fn request(&self, answers: &AnswerSheet) -> Result<InsightResponse, TransportError>;
}
