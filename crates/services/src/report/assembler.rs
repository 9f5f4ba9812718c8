use std::sync::Arc;

use assess_core::model::{AnswerSheet, InsightPayload, Step};
use profiles::{OptionProfile, ProfileSource};

use super::model::{ProfileLine, ReportModel, ReportSummary, StepBlock};

/// Fallback description when the lookup has no entry for a selected option.
pub const LOOKUP_MISS_DESCRIPTION: &str =
    "Detailed information not available for this result.";

/// Merges recorded answers, static descriptive lookups and an optional
/// insight payload into a [`ReportModel`].
///
/// Assembly never fails: lookup misses degrade to a generic profile and a
/// missing payload simply yields a baseline report.
#[derive(Clone)]
pub struct ReportAssembler {
    profiles: Arc<dyn ProfileSource>,
}

impl ReportAssembler {
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileSource>) -> Self {
        Self { profiles }
    }

    /// Build the report for the given answers and optional insight payload.
    #[must_use]
    pub fn build(
        &self,
        answers: &AnswerSheet,
        insights: Option<&InsightPayload>,
    ) -> ReportModel {
        let blocks: Vec<StepBlock> = Step::CATALOG
            .into_iter()
            .filter_map(|step| {
                answers.get(step).map(|selected| StepBlock {
                    step,
                    name: step.name().to_string(),
                    selected: selected.to_string(),
                    profile: self.resolve(step, selected),
                })
            })
            .collect();

        ReportModel {
            insights: insights.cloned(),
            summary: self.summarize(answers),
            blocks,
        }
    }

    fn resolve(&self, step: Step, selected: &str) -> OptionProfile {
        self.profiles
            .profile(step, selected)
            .cloned()
            .unwrap_or_else(|| {
                OptionProfile::new(selected.to_uppercase(), LOOKUP_MISS_DESCRIPTION)
            })
    }

    fn summarize(&self, answers: &AnswerSheet) -> ReportSummary {
        let profile_lines = Step::CATALOG
            .into_iter()
            .filter_map(|step| {
                answers.get(step).map(|selected| {
                    let profile = self.resolve(step, selected);
                    ProfileLine {
                        aspect: step.aspect().to_string(),
                        title: profile.title,
                        description: profile.description,
                    }
                })
            })
            .collect();

        let recommendations = Step::CATALOG
            .into_iter()
            .map(|step| recommendation(step, answers.get(step)))
            .collect();

        ReportSummary {
            answered: answers.len(),
            profile_lines,
            recommendations,
        }
    }
}

/// One recommendation line per catalog step, falling back to the step's
/// generic placeholder when it was never answered.
fn recommendation(step: Step, answer: Option<&str>) -> String {
    let subject = answer.unwrap_or_else(|| step.placeholder());
    match step {
        Step::Mbti => format!("Leverage your {subject} strengths in professional settings"),
        Step::Intelligence => {
            format!("Develop your {subject} abilities through targeted activities")
        }
        Step::BigFive => format!("Balance your {subject} tendencies across team settings"),
        Step::Riasec => format!("Consider {subject} professional opportunities"),
        Step::Decision => format!("Apply your {subject} awareness in important choices"),
        Step::Life => format!("Plan your next steps around your {subject} priorities"),
        Step::Vark => format!("Use {subject} methods for optimal learning"),
    }
}
