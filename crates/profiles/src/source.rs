use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use assess_core::model::Step;

/// A descriptive field that authors sometimes write as one string and
/// sometimes as a list of phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    /// Renders the field as a single comma-joined string.
    #[must_use]
    pub fn joined(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for TextOrList {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<&str>> for TextOrList {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

/// Descriptive record for one selectable option of one assessment step.
///
/// All fields beyond title and description are optional; a renderer simply
/// omits what is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionProfile {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub strengths: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub careers: Option<String>,
    #[serde(default)]
    pub traits: Option<TextOrList>,
    #[serde(default)]
    pub work_environment: Option<String>,
    #[serde(default)]
    pub learning_methods: Option<TextOrList>,
    #[serde(default)]
    pub study_tips: Option<TextOrList>,
}

impl OptionProfile {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            strengths: None,
            challenges: None,
            careers: None,
            traits: None,
            work_environment: None,
            learning_methods: None,
            study_tips: None,
        }
    }

    #[must_use]
    pub fn with_strengths(mut self, strengths: impl Into<String>) -> Self {
        self.strengths = Some(strengths.into());
        self
    }

    #[must_use]
    pub fn with_challenges(mut self, challenges: impl Into<String>) -> Self {
        self.challenges = Some(challenges.into());
        self
    }

    #[must_use]
    pub fn with_careers(mut self, careers: impl Into<String>) -> Self {
        self.careers = Some(careers.into());
        self
    }

    #[must_use]
    pub fn with_traits(mut self, traits: impl Into<TextOrList>) -> Self {
        self.traits = Some(traits.into());
        self
    }

    #[must_use]
    pub fn with_work_environment(mut self, environment: impl Into<String>) -> Self {
        self.work_environment = Some(environment.into());
        self
    }

    #[must_use]
    pub fn with_learning_methods(mut self, methods: impl Into<TextOrList>) -> Self {
        self.learning_methods = Some(methods.into());
        self
    }

    #[must_use]
    pub fn with_study_tips(mut self, tips: impl Into<TextOrList>) -> Self {
        self.study_tips = Some(tips.into());
        self
    }
}

/// Read-only source of descriptive profiles, keyed by step and option.
///
/// Categories correspond 1:1 with the catalog steps, so the step itself is
/// the category key. A miss is an `Option`, not an error; callers fall back
/// to generic copy.
pub trait ProfileSource: Send + Sync {
    fn profile(&self, step: Step, option: &str) -> Option<&OptionProfile>;
}

/// In-memory profile source, used both for the builtin dataset and for
/// custom datasets in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfiles {
    entries: HashMap<(Step, String), OptionProfile>,
}

impl InMemoryProfiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The dataset shipped with the wizard.
    #[must_use]
    pub fn builtin() -> Self {
        crate::builtin::builtin_profiles()
    }

    pub fn insert(&mut self, step: Step, option: impl Into<String>, profile: OptionProfile) {
        self.entries.insert((step, option.into()), profile);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProfileSource for InMemoryProfiles {
    fn profile(&self, step: Step, option: &str) -> Option<&OptionProfile> {
        self.entries.get(&(step, option.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut profiles = InMemoryProfiles::new();
        profiles.insert(
            Step::Mbti,
            "INTJ",
            OptionProfile::new("Architect", "Strategic and independent."),
        );

        let hit = profiles.profile(Step::Mbti, "INTJ").unwrap();
        assert_eq!(hit.title, "Architect");
        assert!(profiles.profile(Step::Mbti, "ZZZZ").is_none());
        assert!(profiles.profile(Step::Vark, "INTJ").is_none());
    }

    #[test]
    fn text_or_list_joins_consistently() {
        let text = TextOrList::from("independent");
        assert_eq!(text.joined(), "independent");

        let list = TextOrList::from(vec!["strategic", "private", "driven"]);
        assert_eq!(list.joined(), "strategic, private, driven");
    }

    #[test]
    fn profile_deserializes_string_or_list_fields() {
        let profile: OptionProfile = serde_json::from_value(serde_json::json!({
            "title": "Visual",
            "description": "Learns through images.",
            "learning_methods": ["diagrams", "mind maps"],
            "study_tips": "Sketch what you read."
        }))
        .unwrap();

        assert_eq!(
            profile.learning_methods.unwrap().joined(),
            "diagrams, mind maps"
        );
        assert_eq!(profile.study_tips.unwrap().joined(), "Sketch what you read.");
    }
}
