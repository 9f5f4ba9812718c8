#![forbid(unsafe_code)]

pub mod error;
pub mod insights;
pub mod report;
pub mod session;

pub use assess_core::Clock;
pub use assess_core::Error;

pub use error::{InsightError, TransportError};
pub use insights::{
    HttpInsightTransport, InsightCoordinator, InsightResponse, InsightServiceConfig,
    InsightTransport, Sleeper, TokioSleeper,
};
pub use report::{ReportAssembler, ReportExporter, ReportModel};
pub use session::{
    AssessmentFlow, AssessmentProgress, AssessmentSession, Command, Effect, FinishOutcome,
    Notice, NoticeLevel,
};
