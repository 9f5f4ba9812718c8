use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use assess_core::model::{AnswerSheet, InsightPayload, Screen, Step};
use profiles::InMemoryProfiles;
use services::{
    AssessmentFlow, AssessmentSession, Command, Effect, InsightCoordinator, InsightResponse,
    InsightTransport, ReportAssembler, Sleeper, TransportError,
};

/// Transport that replays a scripted sequence of responses.
struct ScriptedTransport {
    script: Mutex<Vec<Result<InsightResponse, TransportError>>>,
}

impl ScriptedTransport {
    fn new(script: Vec<Result<InsightResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script),
        })
    }
}

#[async_trait]
impl InsightTransport for ScriptedTransport {
    async fn request(&self, _answers: &AnswerSheet) -> Result<InsightResponse, TransportError> {
        self.script
            .lock()
            .unwrap()
            .remove(0)
    }
}

/// Sleeper that never waits.
struct InstantSleeper;

#[async_trait]
impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

fn sample_payload() -> InsightPayload {
    serde_json::from_value(serde_json::json!({
        "best_field": { "field": "Technology", "reasoning": "Analytical profile" },
        "roadmap": { "short_term": { "goals": ["Learn fundamentals"] } },
        "result_analysis": { "strengths": ["Analytical thinking"] },
        "career_recommendations": [
            { "job_role": "Software Developer", "explanation": "Fits the profile" }
        ]
    }))
    .unwrap()
}

fn flow_with(script: Vec<Result<InsightResponse, TransportError>>) -> AssessmentFlow {
    let coordinator = InsightCoordinator::new(ScriptedTransport::new(script))
        .with_sleeper(Arc::new(InstantSleeper));
    let assembler = ReportAssembler::new(Arc::new(InMemoryProfiles::builtin()));
    AssessmentFlow::new(coordinator, assembler)
}

/// Walk the wizard from the welcome screen to the final step, answering
/// every assessment.
fn complete_wizard(session: &mut AssessmentSession) {
    let options = [
        "INTJ",
        "logical",
        "openness",
        "investigative",
        "analytical",
        "student",
        "visual",
    ];
    for option in options {
        session.dispatch(Command::Advance).unwrap();
        session
            .dispatch(Command::SelectOption(option.to_string()))
            .unwrap();
    }
}

#[tokio::test]
async fn full_wizard_run_produces_enriched_report() {
    let flow = flow_with(vec![Ok(InsightResponse::success(sample_payload()))]);
    let mut session = AssessmentSession::new();

    complete_wizard(&mut session);
    assert_eq!(session.current(), Screen::Test(Step::Vark));

    let effects = session.dispatch(Command::Finish).unwrap();
    assert_eq!(effects, vec![Effect::RequestInsights]);

    let outcome = flow.finish(&mut session).await.unwrap();
    assert!(outcome.is_enriched());
    assert!(outcome.failure.is_none());
    assert_eq!(session.current(), Screen::Results);
    assert_eq!(session.progress().fraction, 1.0);

    // One block per answered step, resolved against the builtin profiles.
    assert_eq!(outcome.report.blocks.len(), Step::COUNT);
    assert_eq!(outcome.report.blocks[0].profile.title, "Architect");
    assert_eq!(outcome.report.summary.recommendations.len(), Step::COUNT);
}

#[tokio::test]
async fn failed_enrichment_still_reaches_results_with_baseline_report() {
    let failure = || Ok(InsightResponse::failure(Some("model overloaded".into()), true));
    let flow = flow_with(vec![failure(), failure(), failure()]);
    let mut session = AssessmentSession::new();

    complete_wizard(&mut session);
    let outcome = flow.finish(&mut session).await.unwrap();

    assert_eq!(session.current(), Screen::Results);
    assert!(!outcome.is_enriched());
    assert_eq!(outcome.failure.as_deref(), Some("model overloaded"));
    assert_eq!(outcome.report.blocks.len(), Step::COUNT);
}

#[tokio::test]
async fn manual_retry_upgrades_a_baseline_report() {
    let flow = flow_with(vec![
        Ok(InsightResponse::failure(None, false)),
        Ok(InsightResponse::success(sample_payload())),
    ]);
    let mut session = AssessmentSession::new();

    complete_wizard(&mut session);
    let baseline = flow.finish(&mut session).await.unwrap();
    assert!(!baseline.is_enriched());
    assert!(baseline.failure.is_some());

    let effects = session.dispatch(Command::RetryInsights).unwrap();
    assert_eq!(effects, vec![Effect::RequestInsights]);

    let retried = flow.retry_insights(&mut session).await.unwrap();
    assert!(retried.is_enriched());
    assert!(retried.failure.is_none());
    assert_eq!(session.current(), Screen::Results);
}

#[tokio::test]
async fn report_is_rebuilt_per_display_and_deterministic() {
    let flow = flow_with(vec![Ok(InsightResponse::success(sample_payload()))]);
    let mut session = AssessmentSession::new();

    complete_wizard(&mut session);
    let outcome = flow.finish(&mut session).await.unwrap();

    let rebuilt = flow.report(&session);
    assert_eq!(outcome.report, rebuilt);
    assert_eq!(
        serde_json::to_vec(&outcome.report).unwrap(),
        serde_json::to_vec(&rebuilt).unwrap()
    );
}

#[tokio::test]
async fn restart_after_finish_clears_the_whole_session() {
    let flow = flow_with(vec![Ok(InsightResponse::success(sample_payload()))]);
    let mut session = AssessmentSession::new();

    complete_wizard(&mut session);
    flow.finish(&mut session).await.unwrap();
    assert!(session.insights().is_some());

    session.dispatch(Command::Restart).unwrap();
    assert_eq!(session.current(), Screen::Welcome);
    assert!(session.answers().is_empty());
    assert!(session.insights().is_none());

    let report = flow.report(&session);
    assert!(report.blocks.is_empty());
    assert!(!report.is_enriched());
}
