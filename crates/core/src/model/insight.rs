use serde::{Deserialize, Serialize};
use url::Url;

//
// ─── PAYLOAD ───────────────────────────────────────────────────────────────────
//

/// Career-guidance data generated by the remote insight service.
///
/// The schema mirrors the service's JSON report. Earlier service revisions
/// emitted several collections as plain strings instead of detail objects, so
/// every field with both shapes in the wild is an untagged variant pair here;
/// renderers go through the variant accessors and never inspect raw JSON.
///
/// `best_field`, `roadmap`, `result_analysis` and `career_recommendations`
/// are required; a response missing any of them fails deserialization. All
/// remaining sections default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightPayload {
    pub best_field: BestField,
    pub roadmap: Roadmap,
    pub result_analysis: ResultAnalysis,
    pub career_recommendations: Vec<CareerRecommendation>,
    #[serde(default)]
    pub skill_recommendations: SkillRecommendations,
    #[serde(default)]
    pub skill_gaps: Vec<SkillGapEntry>,
    #[serde(default)]
    pub future_plans: FuturePlans,
    #[serde(default)]
    pub daily_habits: Vec<HabitEntry>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub additional_insights: Option<AdditionalInsights>,
}

/// Best-matching career field recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestField {
    pub field: String,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub match_percentage: Option<u8>,
    #[serde(default)]
    pub gujarat_opportunities: Option<String>,
    #[serde(default)]
    pub indian_market_outlook: Option<String>,
    #[serde(default)]
    pub specific_companies: Vec<String>,
    #[serde(default)]
    pub salary_expectations: Option<String>,
    #[serde(default)]
    pub growth_potential: Option<String>,
    #[serde(default)]
    pub entry_requirements: Option<String>,
}

/// One recommended job role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    /// Older payloads used `role` for the same field.
    #[serde(alias = "role")]
    pub job_role: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub growth_potential: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub gujarat_companies: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

//
// ─── ROADMAP ───────────────────────────────────────────────────────────────────
//

/// Learning roadmap across three horizons. Each horizon is either a detailed
/// phase object or, in the legacy shape, a bare list of goals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(default)]
    pub short_term: Option<ShortTermEntry>,
    #[serde(default)]
    pub mid_term: Option<MidTermEntry>,
    #[serde(default)]
    pub long_term: Option<LongTermEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShortTermEntry {
    Detailed(ShortTermPhase),
    Goals(Vec<String>),
}

impl ShortTermEntry {
    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        match self {
            Self::Detailed(phase) => phase.duration.as_deref(),
            Self::Goals(_) => None,
        }
    }

    #[must_use]
    pub fn goals(&self) -> &[String] {
        match self {
            Self::Detailed(phase) => &phase.goals,
            Self::Goals(goals) => goals,
        }
    }
}

/// Immediate horizon: goals plus concrete actions to take now.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortTermPhase {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub skills_to_develop: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub specific_actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MidTermEntry {
    Detailed(MidTermPhase),
    Goals(Vec<String>),
}

impl MidTermEntry {
    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        match self {
            Self::Detailed(phase) => phase.duration.as_deref(),
            Self::Goals(_) => None,
        }
    }

    #[must_use]
    pub fn goals(&self) -> &[String] {
        match self {
            Self::Detailed(phase) => &phase.goals,
            Self::Goals(goals) => goals,
        }
    }
}

/// Mid horizon: goals plus checkpoints to hit along the way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MidTermPhase {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub skills_to_develop: Vec<String>,
    #[serde(default)]
    pub milestones: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LongTermEntry {
    Detailed(LongTermPhase),
    Goals(Vec<String>),
}

impl LongTermEntry {
    #[must_use]
    pub fn duration(&self) -> Option<&str> {
        match self {
            Self::Detailed(phase) => phase.duration.as_deref(),
            Self::Goals(_) => None,
        }
    }

    #[must_use]
    pub fn goals(&self) -> &[String] {
        match self {
            Self::Detailed(phase) => &phase.goals,
            Self::Goals(goals) => goals,
        }
    }
}

/// Long horizon: goals, expertise areas, entrepreneurship notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LongTermPhase {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub expertise_areas: Vec<String>,
    #[serde(default)]
    pub entrepreneurship_opportunities: Option<String>,
}

//
// ─── ANALYSIS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultAnalysis {
    #[serde(default)]
    pub strengths: Vec<StrengthEntry>,
    #[serde(default)]
    pub weaknesses: Vec<WeaknessEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrengthEntry {
    Detailed(StrengthDetail),
    Plain(String),
}

impl StrengthEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Detailed(detail) => &detail.strength,
            Self::Plain(name) => name,
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&StrengthDetail> {
        match self {
            Self::Detailed(detail) => Some(detail),
            Self::Plain(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthDetail {
    pub strength: String,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub career_application: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeaknessEntry {
    Detailed(WeaknessDetail),
    Plain(String),
}

impl WeaknessEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Detailed(detail) => &detail.weakness,
            Self::Plain(name) => name,
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&WeaknessDetail> {
        match self {
            Self::Detailed(detail) => Some(detail),
            Self::Plain(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaknessDetail {
    pub weakness: String,
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub improvement_strategy: Option<String>,
}

//
// ─── SKILLS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillRecommendations {
    #[serde(default)]
    pub technical_skills: Vec<SkillEntry>,
    #[serde(default)]
    pub soft_skills: Vec<SkillEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillEntry {
    Detailed(SkillDetail),
    Plain(String),
}

impl SkillEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Detailed(detail) => &detail.skill,
            Self::Plain(name) => name,
        }
    }

    #[must_use]
    pub fn importance(&self) -> Option<&str> {
        match self {
            Self::Detailed(detail) => detail.importance.as_deref(),
            Self::Plain(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDetail {
    pub skill: String,
    #[serde(default)]
    pub importance: Option<String>,
    #[serde(default)]
    pub learning_resources: Vec<String>,
    #[serde(default)]
    pub development_approach: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillGapEntry {
    Detailed(SkillGapDetail),
    Plain(String),
}

impl SkillGapEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Detailed(detail) => &detail.gap,
            Self::Plain(name) => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGapDetail {
    pub gap: String,
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub learning_path: Option<String>,
    #[serde(default)]
    pub free_resources: Vec<String>,
}

//
// ─── PLANS, HABITS, CERTIFICATIONS ─────────────────────────────────────────────
//

/// Growth expectations at the 3/5/10-year marks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuturePlans {
    #[serde(rename = "3_year_plan", default)]
    pub three_year: Option<FuturePlanEntry>,
    #[serde(rename = "5_year_plan", default)]
    pub five_year: Option<FuturePlanEntry>,
    #[serde(rename = "10_year_plan", default)]
    pub ten_year: Option<FuturePlanEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FuturePlanEntry {
    Detailed(FuturePlanDetail),
    Plain(String),
}

impl FuturePlanEntry {
    /// The expected position or vision statement, whichever the plan carries.
    #[must_use]
    pub fn headline(&self) -> Option<&str> {
        match self {
            Self::Detailed(detail) => detail
                .career_position
                .as_deref()
                .or(detail.career_vision.as_deref()),
            Self::Plain(text) => Some(text),
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&FuturePlanDetail> {
        match self {
            Self::Detailed(detail) => Some(detail),
            Self::Plain(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FuturePlanDetail {
    #[serde(default)]
    pub career_position: Option<String>,
    #[serde(default)]
    pub career_vision: Option<String>,
    #[serde(default)]
    pub key_achievements: Vec<String>,
    #[serde(default)]
    pub expertise_areas: Vec<String>,
    #[serde(default)]
    pub entrepreneurial_potential: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HabitEntry {
    Detailed(HabitDetail),
    Plain(String),
}

impl HabitEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Detailed(detail) => &detail.habit,
            Self::Plain(name) => name,
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&HabitDetail> {
        match self {
            Self::Detailed(detail) => Some(detail),
            Self::Plain(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDetail {
    pub habit: String,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub implementation: Option<String>,
}

/// One recommended certification, with an optional enrollment link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub direct_enrollment_link: Option<String>,
    #[serde(default)]
    pub why_recommended: Option<String>,
    #[serde(default)]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub estimated_duration: Option<String>,
}

impl Certification {
    /// Enrollment link parsed as a URL. Malformed links from the service are
    /// dropped rather than surfaced.
    #[must_use]
    pub fn enrollment_url(&self) -> Option<Url> {
        self.direct_enrollment_link
            .as_deref()
            .and_then(|link| Url::parse(link).ok())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalInsights {
    #[serde(default)]
    pub work_environment: Option<String>,
    #[serde(default)]
    pub stress_management: Option<String>,
    #[serde(default)]
    pub gujarat_specific_advice: Option<String>,
}
