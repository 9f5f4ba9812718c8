mod command;
mod controller;
mod progress;
mod workflow;

// Public API of the session subsystem.
pub use command::{Command, Effect, Notice, NoticeLevel};
pub use controller::AssessmentSession;
pub use progress::AssessmentProgress;
pub use workflow::{AssessmentFlow, FinishOutcome};
