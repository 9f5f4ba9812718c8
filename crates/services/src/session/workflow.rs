use tracing::{info, warn};

use assess_core::Error;

use super::controller::AssessmentSession;
use crate::insights::InsightCoordinator;
use crate::report::{ReportAssembler, ReportModel};

/// Result of finishing the wizard or retrying insight generation.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishOutcome {
    /// Freshly assembled report; baseline when enrichment failed.
    pub report: ReportModel,
    /// User-facing notice when the insight attempt failed.
    pub failure: Option<String>,
}

impl FinishOutcome {
    #[must_use]
    pub fn is_enriched(&self) -> bool {
        self.report.is_enriched()
    }
}

/// Orchestrates the async parts of a session: the insight attempt on finish,
/// the manual retry, and report assembly.
///
/// The caller is expected to serialize invocations: at most one finish or
/// retry in flight per session, with the retry trigger disabled while an
/// automatic attempt is outstanding.
#[derive(Clone)]
pub struct AssessmentFlow {
    coordinator: InsightCoordinator,
    assembler: ReportAssembler,
}

impl AssessmentFlow {
    #[must_use]
    pub fn new(coordinator: InsightCoordinator, assembler: ReportAssembler) -> Self {
        Self {
            coordinator,
            assembler,
        }
    }

    /// Run the insight attempt and move the session to the results screen
    /// regardless of the attempt's outcome.
    ///
    /// # Errors
    ///
    /// Returns an error only when the session is not at the final step with
    /// its answer recorded; insight failures are reported through
    /// [`FinishOutcome::failure`], never as an `Err`.
    pub async fn finish(
        &self,
        session: &mut AssessmentSession,
    ) -> Result<FinishOutcome, Error> {
        session.ensure_can_finish()?;

        self.attempt_insights(session).await;
        session.finish_navigation()?;

        Ok(self.outcome(session))
    }

    /// Re-run insight generation from the results screen; a fresh,
    /// independent invocation that leaves navigation untouched.
    ///
    /// # Errors
    ///
    /// Returns an error only when the session is not on the results screen.
    pub async fn retry_insights(
        &self,
        session: &mut AssessmentSession,
    ) -> Result<FinishOutcome, Error> {
        session.ensure_at_results()?;

        self.attempt_insights(session).await;

        Ok(self.outcome(session))
    }

    /// Assemble the report for the session's current state. Rebuilt on every
    /// call; never cached.
    #[must_use]
    pub fn report(&self, session: &AssessmentSession) -> ReportModel {
        self.assembler.build(session.answers(), session.insights())
    }

    async fn attempt_insights(&self, session: &mut AssessmentSession) {
        match self.coordinator.request_insights(session.answers()).await {
            Ok(payload) => {
                info!(session = %session.id(), "insight generation succeeded");
                session.attach_insights(payload);
            }
            Err(error) => {
                warn!(session = %session.id(), %error, "insight generation failed");
                session.record_insight_failure(error.user_message());
            }
        }
    }

    fn outcome(&self, session: &AssessmentSession) -> FinishOutcome {
        FinishOutcome {
            report: self.report(session),
            failure: session.insight_failure().map(str::to_string),
        }
    }
}
