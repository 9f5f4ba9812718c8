use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::Step;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("selected option must not be empty")]
    EmptyOption,
}

/// Per-step answer record: at most one selected option per assessment step.
///
/// Option values are opaque identifiers owned by the step content; the sheet
/// only guarantees they are non-empty. Iteration order is catalog order
/// (`Step` orders by ordinal), which keeps everything derived from a sheet
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<Step, String>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected option for a step, replacing any previous choice.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::EmptyOption` if the value is empty or
    /// whitespace-only.
    pub fn record(&mut self, step: Step, value: impl Into<String>) -> Result<(), AnswerError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AnswerError::EmptyOption);
        }
        self.answers.insert(step, value);
        Ok(())
    }

    /// Remove the answer for a step, if any. Idempotent.
    pub fn clear(&mut self, step: Step) {
        self.answers.remove(&step);
    }

    /// Remove every recorded answer.
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    #[must_use]
    pub fn get(&self, step: Step) -> Option<&str> {
        self.answers.get(&step).map(String::as_str)
    }

    #[must_use]
    pub fn has(&self, step: Step) -> bool {
        self.answers.contains_key(&step)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Snapshot of the full mapping. Mutating the returned map does not
    /// affect the sheet.
    #[must_use]
    pub fn all(&self) -> BTreeMap<Step, String> {
        self.answers.clone()
    }

    /// Steps that currently have a recorded answer, in catalog order.
    pub fn answered_steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.answers.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_overwrites_previous_choice() {
        let mut sheet = AnswerSheet::new();
        sheet.record(Step::Mbti, "INTJ").unwrap();
        sheet.record(Step::Mbti, "ENFP").unwrap();

        assert_eq!(sheet.get(Step::Mbti), Some("ENFP"));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn record_rejects_blank_values() {
        let mut sheet = AnswerSheet::new();
        assert_eq!(sheet.record(Step::Vark, "  "), Err(AnswerError::EmptyOption));
        assert!(sheet.is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut sheet = AnswerSheet::new();
        sheet.record(Step::Riasec, "investigative").unwrap();
        sheet.clear(Step::Riasec);
        sheet.clear(Step::Riasec);
        assert!(!sheet.has(Step::Riasec));
    }

    #[test]
    fn snapshot_is_detached_from_internal_state() {
        let mut sheet = AnswerSheet::new();
        sheet.record(Step::Life, "student").unwrap();

        let mut snapshot = sheet.all();
        snapshot.insert(Step::Vark, "visual".to_string());

        assert!(!sheet.has(Step::Vark));
        assert_eq!(sheet.len(), 1);
    }

    #[test]
    fn answered_steps_follow_catalog_order() {
        let mut sheet = AnswerSheet::new();
        sheet.record(Step::Vark, "visual").unwrap();
        sheet.record(Step::Mbti, "INTJ").unwrap();
        sheet.record(Step::Decision, "analytical").unwrap();

        let steps: Vec<Step> = sheet.answered_steps().collect();
        assert_eq!(steps, vec![Step::Mbti, Step::Decision, Step::Vark]);
    }
}
