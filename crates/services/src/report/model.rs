use serde::Serialize;

use assess_core::model::{InsightPayload, Step};
use profiles::OptionProfile;

/// Renderer-ready report for one completed (or partially completed) session.
///
/// This is intentionally **not** a UI view-model: no pre-formatted strings
/// beyond summary prose, no timestamps, no localization. It is derived state,
/// rebuilt on every display, and byte-identical for identical answers,
/// insight payload and lookup data. Timestamps belong to the export
/// collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportModel {
    /// AI-generated sections; absent when enrichment failed or never ran.
    pub insights: Option<InsightPayload>,
    /// One descriptive block per answered step, in catalog order.
    pub blocks: Vec<StepBlock>,
    /// Cross-test summary prose.
    pub summary: ReportSummary,
}

impl ReportModel {
    /// True when AI-generated sections are present.
    #[must_use]
    pub fn is_enriched(&self) -> bool {
        self.insights.is_some()
    }
}

/// Descriptive block for one answered step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepBlock {
    pub step: Step,
    /// Full assessment name (block heading).
    pub name: String,
    /// Raw selected option value.
    pub selected: String,
    /// Resolved descriptive profile, or the generic fallback on lookup miss.
    pub profile: OptionProfile,
}

/// Synthesized cross-test summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    /// Number of steps with a recorded answer.
    pub answered: usize,
    /// One line per answered step: aspect, resolved title, short description.
    pub profile_lines: Vec<ProfileLine>,
    /// Exactly one recommendation per catalog step, using the recorded
    /// answer or the step's generic placeholder.
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileLine {
    pub aspect: String,
    pub title: String,
    pub description: String,
}
