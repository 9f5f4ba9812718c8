use std::fmt;

use assess_core::Error;
use assess_core::model::{
    AnswerSheet, InsightPayload, Navigation, NavigationError, Screen, SessionId, Step,
};

use super::command::{Command, Effect, Notice};
use super::progress::AssessmentProgress;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// All mutable state of one wizard session, behind a single dispatch path.
///
/// Owns the navigation history, the answer sheet, and the optional insight
/// payload. Every mutation goes through [`Self::dispatch`] (or the async
/// workflow, which calls the crate-internal completion hooks), which is what
/// keeps the invariants:
///
/// - answers only ever exist for steps present in the history, because an
///   option can only be selected for the currently displayed step and
///   going back clears the popped step's answer;
/// - the results screen is reached only through the finish workflow, after
///   an insight attempt, successful or not.
///
/// Dispatch errors are non-fatal: the state is unchanged and the caller
/// should disable the triggering control.
pub struct AssessmentSession {
    id: SessionId,
    navigation: Navigation,
    answers: AnswerSheet,
    insights: Option<InsightPayload>,
    insight_notice: Option<String>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: SessionId::generate(),
            navigation: Navigation::new(),
            answers: AnswerSheet::new(),
            insights: None,
            insight_notice: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn current(&self) -> Screen {
        self.navigation.current()
    }

    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn insights(&self) -> Option<&InsightPayload> {
        self.insights.as_ref()
    }

    /// User-facing message from the most recent failed insight attempt.
    #[must_use]
    pub fn insight_failure(&self) -> Option<&str> {
        self.insight_notice.as_deref()
    }

    #[must_use]
    pub fn progress(&self) -> AssessmentProgress {
        AssessmentProgress::from_navigation(&self.navigation)
    }

    /// True when the current step still needs a selection before Advance is
    /// allowed. The renderer uses this to disable the next button.
    #[must_use]
    pub fn awaiting_selection(&self) -> bool {
        match self.current() {
            Screen::Test(step) => !self.answers.has(step),
            Screen::Welcome | Screen::Results => false,
        }
    }

    /// Apply one user command, returning the effects the front end should
    /// execute.
    ///
    /// # Errors
    ///
    /// Returns the navigation or answer error that made the command invalid;
    /// the session state is unchanged in that case.
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<Effect>, Error> {
        match command {
            Command::SelectOption(value) => {
                self.select_option(value)?;
                Ok(Vec::new())
            }
            Command::Advance => {
                let step = self.advance()?;
                Ok(self.render_effects(Screen::Test(step)))
            }
            Command::Back => {
                let screen = self.go_back()?;
                Ok(self.render_effects(screen))
            }
            Command::Finish => {
                self.ensure_can_finish()?;
                Ok(vec![Effect::RequestInsights])
            }
            Command::Restart => {
                self.restart();
                let mut effects = self.render_effects(Screen::Welcome);
                effects.push(Effect::Notify(Notice::info(
                    "Assessment reset. Ready to start again!",
                )));
                Ok(effects)
            }
            Command::RetryInsights => {
                self.ensure_at_results()?;
                Ok(vec![Effect::RequestInsights])
            }
        }
    }

    fn render_effects(&self, screen: Screen) -> Vec<Effect> {
        vec![
            Effect::ShowScreen(screen),
            Effect::UpdateProgress(self.progress()),
        ]
    }

    fn select_option(&mut self, value: String) -> Result<(), Error> {
        let Screen::Test(step) = self.current() else {
            return Err(NavigationError::NotOnTestScreen.into());
        };
        self.answers.record(step, value)?;
        Ok(())
    }

    fn advance(&mut self) -> Result<Step, Error> {
        if let Screen::Test(step) = self.current() {
            if !self.answers.has(step) {
                return Err(NavigationError::MissingAnswer { step }.into());
            }
        }
        Ok(self.navigation.advance()?)
    }

    fn go_back(&mut self) -> Result<Screen, Error> {
        let popped = self.current();
        let screen = self.navigation.go_back()?;
        // Re-entering a step must show no prior selection.
        if let Screen::Test(step) = popped {
            self.answers.clear(step);
        }
        Ok(screen)
    }

    fn restart(&mut self) {
        self.navigation.restart();
        self.answers.reset();
        self.insights = None;
        self.insight_notice = None;
    }

    pub(crate) fn ensure_can_finish(&self) -> Result<(), Error> {
        let last = Step::last();
        if self.current() != Screen::Test(last) {
            return Err(NavigationError::NotAtFinalStep.into());
        }
        if !self.answers.has(last) {
            return Err(NavigationError::MissingAnswer { step: last }.into());
        }
        Ok(())
    }

    pub(crate) fn ensure_at_results(&self) -> Result<(), Error> {
        if self.current() != Screen::Results {
            return Err(NavigationError::NotAtResults.into());
        }
        Ok(())
    }

    pub(crate) fn attach_insights(&mut self, payload: InsightPayload) {
        self.insights = Some(payload);
        self.insight_notice = None;
    }

    pub(crate) fn record_insight_failure(&mut self, message: String) {
        self.insight_notice = Some(message);
    }

    pub(crate) fn finish_navigation(&mut self) -> Result<(), Error> {
        Ok(self.navigation.finish()?)
    }
}

impl fmt::Debug for AssessmentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentSession")
            .field("id", &self.id)
            .field("current", &self.current())
            .field("answered", &self.answers.len())
            .field("enriched", &self.insights.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
