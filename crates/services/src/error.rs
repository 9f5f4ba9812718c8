//! Shared error types for the services crate.

use thiserror::Error;

pub use assess_core::model::{AnswerError, NavigationError};

/// Generic user-facing message when the service reports failure without one.
pub const GENERIC_INSIGHT_FAILURE: &str = "Failed to generate AI insights";

/// Errors raised by an [`crate::insights::InsightTransport`] implementation.
///
/// The distinction matters for retry policy: connection problems are retried,
/// anything else propagates immediately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransportError {
    #[error("could not reach the insight service: {0}")]
    Connection(String),

    #[error("insight service transport failed: {0}")]
    Other(String),
}

impl TransportError {
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Failure of an insight generation attempt, after any retries.
///
/// Non-fatal by design: the session still proceeds to a baseline report and
/// the message is shown as a notice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InsightError {
    /// The service answered but could not produce insights.
    #[error("{message}")]
    Service { message: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl InsightError {
    pub(crate) fn service(message: Option<String>) -> Self {
        Self::Service {
            message: message.unwrap_or_else(|| GENERIC_INSIGHT_FAILURE.to_string()),
        }
    }

    /// Message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Service { message } => message.clone(),
            Self::Transport(_) => format!(
                "{GENERIC_INSIGHT_FAILURE}. Please try again or check your internet connection."
            ),
        }
    }
}
