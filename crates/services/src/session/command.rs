use assess_core::model::Screen;

use super::progress::AssessmentProgress;

/// User actions the front end feeds into the session controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Select an option on the currently displayed test screen.
    SelectOption(String),
    /// Move to the next assessment step.
    Advance,
    /// Return to the previously displayed screen.
    Back,
    /// Run the insight workflow and move to the results screen.
    Finish,
    /// Reset the whole session to the welcome screen.
    Restart,
    /// Re-run insight generation from the results screen.
    RetryInsights,
}

/// Instructions for the embedding front end, returned by dispatch.
///
/// `RequestInsights` asks the caller to run the async insight workflow
/// ([`crate::session::AssessmentFlow`]); everything else is rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ShowScreen(Screen),
    UpdateProgress(AssessmentProgress),
    RequestInsights,
    Notify(Notice),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// User-visible notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
