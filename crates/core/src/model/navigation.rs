use thiserror::Error;

use crate::model::{Screen, Step};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("cannot advance past the final assessment step")]
    AtEnd,

    #[error("cannot go back from the first screen")]
    AtRoot,

    #[error("finishing requires the final assessment step to be displayed")]
    NotAtFinalStep,

    #[error("no answer recorded for {step}")]
    MissingAnswer { step: Step },

    #[error("no assessment step is currently displayed")]
    NotOnTestScreen,

    #[error("insights can only be retried from the results screen")]
    NotAtResults,
}

/// History stack of visited screens plus the redundant ordinal position.
///
/// The history always starts with `[Welcome]` and its last element is the
/// screen currently displayed; `position` tracks the tail and ranges from -1
/// (Welcome) to the catalog length (Results). Results is terminal: it is only
/// reachable through `finish`, and neither `advance` nor `go_back` leaves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    history: Vec<Screen>,
    position: i32,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![Screen::Welcome],
            position: -1,
        }
    }

    /// The screen currently displayed (the tail of the history).
    #[must_use]
    pub fn current(&self) -> Screen {
        self.history.last().copied().unwrap_or(Screen::Welcome)
    }

    #[must_use]
    pub fn position(&self) -> i32 {
        self.position
    }

    #[must_use]
    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current() == Screen::Results
    }

    /// Move to the next catalog step and push it onto the history.
    ///
    /// Valid from Welcome (to the first step) and from any step except the
    /// last one; the summary screen is reached through [`Self::finish`] only.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::AtEnd` at the final step or at Results.
    pub fn advance(&mut self) -> Result<Step, NavigationError> {
        let next = self.position + 1;
        let step = usize::try_from(next)
            .ok()
            .and_then(Step::from_ordinal)
            .ok_or(NavigationError::AtEnd)?;

        self.position = next;
        self.history.push(Screen::Test(step));
        Ok(step)
    }

    /// Push the results screen; only valid while the final step is displayed.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::NotAtFinalStep` from any other screen.
    pub fn finish(&mut self) -> Result<(), NavigationError> {
        if self.current() != Screen::Test(Step::last()) {
            return Err(NavigationError::NotAtFinalStep);
        }
        self.history.push(Screen::Results);
        self.position = Screen::Results.position();
        Ok(())
    }

    /// Pop the current screen and return the one underneath.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::AtRoot` when only the welcome screen is on
    /// the stack.
    pub fn go_back(&mut self) -> Result<Screen, NavigationError> {
        if self.history.len() <= 1 {
            return Err(NavigationError::AtRoot);
        }
        self.history.pop();
        let top = self.current();
        self.position = top.position();
        Ok(top)
    }

    /// Reset to the initial state: `[Welcome]`, position -1.
    pub fn restart(&mut self) {
        self.history.clear();
        self.history.push(Screen::Welcome);
        self.position = -1;
    }

    /// Progress through the wizard in `[0, 1]`: 0 at Welcome, 1 at Results.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        let total = Step::COUNT as f64 + 1.0;
        (f64::from(self.position + 1) / total).clamp(0.0, 1.0)
    }
}
