use assess_core::model::{Navigation, Step};

/// Aggregated view of wizard progress, useful for a progress indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentProgress {
    /// Fill fraction in `[0, 1]`.
    pub fraction: f64,
    /// Steps counted as done for the `completed/total` display.
    pub completed: usize,
    pub total: usize,
    /// Label of the current screen.
    pub label: &'static str,
    pub can_go_back: bool,
}

impl AssessmentProgress {
    #[must_use]
    pub fn from_navigation(navigation: &Navigation) -> Self {
        let completed = usize::try_from(navigation.position() + 1)
            .unwrap_or(0)
            .min(Step::COUNT);
        Self {
            fraction: navigation.progress_fraction(),
            completed,
            total: Step::COUNT,
            label: navigation.current().label(),
            can_go_back: navigation.can_go_back(),
        }
    }

    /// Counter display in the `3/7` form.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}/{}", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cap_at_the_catalog_length() {
        let mut navigation = Navigation::new();
        let progress = AssessmentProgress::from_navigation(&navigation);
        assert_eq!(progress.display(), "0/7");
        assert_eq!(progress.label, "Welcome");
        assert!(!progress.can_go_back);

        navigation.advance().unwrap();
        let progress = AssessmentProgress::from_navigation(&navigation);
        assert_eq!(progress.display(), "1/7");
        assert!(progress.can_go_back);

        for _ in 1..Step::COUNT {
            navigation.advance().unwrap();
        }
        navigation.finish().unwrap();
        let progress = AssessmentProgress::from_navigation(&navigation);
        assert_eq!(progress.display(), "7/7");
        assert_eq!(progress.fraction, 1.0);
        assert_eq!(progress.label, "Results");
    }
}
