use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use assess_core::model::{AnswerSheet, InsightPayload};

use super::transport::InsightTransport;
use crate::error::{InsightError, TransportError};

/// Additional attempts after the first one.
pub const MAX_INSIGHT_RETRIES: u32 = 2;

/// Fixed pause between attempts.
pub const INSIGHT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Injectable delay so the retry loop is testable without real time passing.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Obtains an insight payload from the remote service, tolerating transient
/// failure.
///
/// Policy: up to 1 + [`MAX_INSIGHT_RETRIES`] sequential attempts with a fixed
/// [`INSIGHT_RETRY_DELAY`] pause in between. A failure response flagged
/// `retry_suggested` and a connection-level transport failure are retried;
/// everything else propagates immediately. The loop has no cancellation; it
/// runs to success or exhaustion. Each call is independent, so the same
/// coordinator serves both the automatic attempt on finish and the manual
/// retry action.
#[derive(Clone)]
pub struct InsightCoordinator {
    transport: Arc<dyn InsightTransport>,
    sleeper: Arc<dyn Sleeper>,
    max_retries: u32,
    retry_delay: Duration,
}

impl InsightCoordinator {
    #[must_use]
    pub fn new(transport: Arc<dyn InsightTransport>) -> Self {
        Self {
            transport,
            sleeper: Arc::new(TokioSleeper),
            max_retries: MAX_INSIGHT_RETRIES,
            retry_delay: INSIGHT_RETRY_DELAY,
        }
    }

    /// Replace the delay implementation (tests).
    #[must_use]
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Request insights for the given answers.
    ///
    /// # Errors
    ///
    /// Returns `InsightError::Service` when the service reports failure (the
    /// server-provided message, or a generic one), and
    /// `InsightError::Transport` when the network fails in a way retries
    /// could not fix.
    pub async fn request_insights(
        &self,
        answers: &AnswerSheet,
    ) -> Result<InsightPayload, InsightError> {
        let attempts = self.max_retries + 1;

        for attempt in 1..=attempts {
            debug!(attempt, attempts, "requesting insights");

            match self.transport.request(answers).await {
                Ok(response) if response.success => {
                    return response.insights.ok_or_else(|| {
                        InsightError::service(Some(
                            "insight service returned an empty payload".to_string(),
                        ))
                    });
                }
                Ok(response) => {
                    if response.retry_suggested && attempt < attempts {
                        warn!(attempt, "insight service suggested retry");
                        self.sleeper.sleep(self.retry_delay).await;
                        continue;
                    }
                    return Err(InsightError::service(response.error));
                }
                Err(error @ TransportError::Connection(_)) => {
                    if attempt < attempts {
                        warn!(attempt, %error, "retrying after connection failure");
                        self.sleeper.sleep(self.retry_delay).await;
                        continue;
                    }
                    return Err(InsightError::Transport(error));
                }
                Err(error) => return Err(InsightError::Transport(error)),
            }
        }

        // attempts >= 1, so the loop always returns.
        Err(InsightError::service(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GENERIC_INSIGHT_FAILURE;
    use crate::insights::transport::InsightResponse;
    use std::sync::Mutex;

    use assess_core::model::Step;

    fn payload() -> InsightPayload {
        serde_json::from_value(serde_json::json!({
            "best_field": { "field": "Technology" },
            "roadmap": {},
            "result_analysis": {},
            "career_recommendations": []
        }))
        .unwrap()
    }

    fn answers() -> AnswerSheet {
        let mut sheet = AnswerSheet::new();
        sheet.record(Step::Mbti, "INTJ").unwrap();
        sheet
    }

    /// Transport that replays a fixed script of responses.
    struct ScriptedTransport {
        script: Mutex<Vec<Result<InsightResponse, TransportError>>>,
        calls: Mutex<u32>,
    }

    impl ScriptedTransport {
        fn new(script: Vec<Result<InsightResponse, TransportError>>) -> Self {
            Self {
                script: Mutex::new(script),
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl InsightTransport for ScriptedTransport {
        async fn request(
            &self,
            _answers: &AnswerSheet,
        ) -> Result<InsightResponse, TransportError> {
            *self.calls.lock().unwrap() += 1;
            let mut script = self.script.lock().unwrap();
            assert!(!script.is_empty(), "transport called more often than scripted");
            script.remove(0)
        }
    }

    /// Sleeper that records requested durations instead of waiting.
    #[derive(Default)]
    struct RecordingSleeper {
        slept: Mutex<Vec<Duration>>,
    }

    impl RecordingSleeper {
        fn slept(&self) -> Vec<Duration> {
            self.slept.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.slept.lock().unwrap().push(duration);
        }
    }

    fn coordinator(
        script: Vec<Result<InsightResponse, TransportError>>,
    ) -> (InsightCoordinator, Arc<ScriptedTransport>, Arc<RecordingSleeper>) {
        let transport = Arc::new(ScriptedTransport::new(script));
        let sleeper = Arc::new(RecordingSleeper::default());
        let coordinator =
            InsightCoordinator::new(transport.clone()).with_sleeper(sleeper.clone());
        (coordinator, transport, sleeper)
    }

    #[tokio::test]
    async fn first_attempt_success_needs_no_delay() {
        let (coordinator, transport, sleeper) =
            coordinator(vec![Ok(InsightResponse::success(payload()))]);

        let result = coordinator.request_insights(&answers()).await.unwrap();
        assert_eq!(result, payload());
        assert_eq!(transport.calls(), 1);
        assert!(sleeper.slept().is_empty());
    }

    #[tokio::test]
    async fn retry_suggested_exhausts_after_three_attempts() {
        let failure = || Ok(InsightResponse::failure(Some("model overloaded".into()), true));
        let (coordinator, transport, sleeper) =
            coordinator(vec![failure(), failure(), failure()]);

        let error = coordinator.request_insights(&answers()).await.unwrap_err();
        assert_eq!(
            error,
            InsightError::Service {
                message: "model overloaded".into()
            }
        );
        assert_eq!(transport.calls(), 3);
        // Two delays of 2 s each: at least 4 s of requested wait.
        assert_eq!(sleeper.slept(), vec![INSIGHT_RETRY_DELAY; 2]);
        assert!(sleeper.slept().iter().sum::<Duration>() >= Duration::from_millis(4000));
    }

    #[tokio::test]
    async fn second_attempt_success_sleeps_once() {
        let (coordinator, transport, sleeper) = coordinator(vec![
            Ok(InsightResponse::failure(None, true)),
            Ok(InsightResponse::success(payload())),
        ]);

        let result = coordinator.request_insights(&answers()).await.unwrap();
        assert_eq!(result, payload());
        assert_eq!(transport.calls(), 2);
        assert_eq!(sleeper.slept(), vec![INSIGHT_RETRY_DELAY]);
    }

    #[tokio::test]
    async fn failure_without_retry_hint_is_immediate() {
        let (coordinator, transport, sleeper) =
            coordinator(vec![Ok(InsightResponse::failure(None, false))]);

        let error = coordinator.request_insights(&answers()).await.unwrap_err();
        assert_eq!(
            error,
            InsightError::Service {
                message: GENERIC_INSIGHT_FAILURE.into()
            }
        );
        assert_eq!(transport.calls(), 1);
        assert!(sleeper.slept().is_empty());
    }

    #[tokio::test]
    async fn connection_failures_are_retried_then_surfaced() {
        let connect = || Err(TransportError::Connection("refused".into()));
        let (coordinator, transport, sleeper) =
            coordinator(vec![connect(), connect(), connect()]);

        let error = coordinator.request_insights(&answers()).await.unwrap_err();
        assert!(matches!(
            error,
            InsightError::Transport(TransportError::Connection(_))
        ));
        assert_eq!(transport.calls(), 3);
        assert_eq!(sleeper.slept().len(), 2);
    }

    #[tokio::test]
    async fn non_connection_transport_failure_is_not_retried() {
        let (coordinator, transport, sleeper) =
            coordinator(vec![Err(TransportError::Other("tls handshake".into()))]);

        let error = coordinator.request_insights(&answers()).await.unwrap_err();
        assert!(matches!(
            error,
            InsightError::Transport(TransportError::Other(_))
        ));
        assert_eq!(transport.calls(), 1);
        assert!(sleeper.slept().is_empty());
    }

    #[tokio::test]
    async fn success_with_missing_payload_fails_without_retry() {
        let response = InsightResponse {
            success: true,
            insights: None,
            error: None,
            retry_suggested: true,
        };
        let (coordinator, transport, sleeper) = coordinator(vec![Ok(response)]);

        let error = coordinator.request_insights(&answers()).await.unwrap_err();
        assert!(matches!(error, InsightError::Service { .. }));
        assert_eq!(transport.calls(), 1);
        assert!(sleeper.slept().is_empty());
    }

    #[tokio::test]
    async fn connection_failure_then_success_recovers() {
        let (coordinator, transport, sleeper) = coordinator(vec![
            Err(TransportError::Connection("reset".into())),
            Ok(InsightResponse::success(payload())),
        ]);

        let result = coordinator.request_insights(&answers()).await.unwrap();
        assert_eq!(result, payload());
        assert_eq!(transport.calls(), 2);
        assert_eq!(sleeper.slept(), vec![INSIGHT_RETRY_DELAY]);
    }
}
