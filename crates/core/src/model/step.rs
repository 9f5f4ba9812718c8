use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//
// ─── STEP ──────────────────────────────────────────────────────────────────────
//

/// One assessment instrument in the fixed linear sequence.
///
/// The catalog order is the order the wizard presents the screens in; it is
/// defined at compile time and never changes during a session. Serde encodes a
/// `Step` as its wire key (`"mbtiScreen"` through `"varkScreen"`), which is also the
/// key the insight service receives in the answers mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    #[serde(rename = "mbtiScreen")]
    Mbti,
    #[serde(rename = "intelligenceScreen")]
    Intelligence,
    #[serde(rename = "bigFiveScreen")]
    BigFive,
    #[serde(rename = "riasecScreen")]
    Riasec,
    #[serde(rename = "decisionScreen")]
    Decision,
    #[serde(rename = "lifeScreen")]
    Life,
    #[serde(rename = "varkScreen")]
    Vark,
}

impl Step {
    /// All assessment steps in presentation order.
    pub const CATALOG: [Step; 7] = [
        Step::Mbti,
        Step::Intelligence,
        Step::BigFive,
        Step::Riasec,
        Step::Decision,
        Step::Life,
        Step::Vark,
    ];

    /// Number of steps in the catalog.
    pub const COUNT: usize = Self::CATALOG.len();

    /// Zero-based position of this step in the catalog.
    #[must_use]
    pub fn ordinal(self) -> usize {
        match self {
            Step::Mbti => 0,
            Step::Intelligence => 1,
            Step::BigFive => 2,
            Step::Riasec => 3,
            Step::Decision => 4,
            Step::Life => 5,
            Step::Vark => 6,
        }
    }

    /// Looks up a step by catalog position.
    #[must_use]
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::CATALOG.get(ordinal).copied()
    }

    /// The last step of the catalog, after which only `finish` is valid.
    #[must_use]
    pub fn last() -> Self {
        Self::CATALOG[Self::COUNT - 1]
    }

    /// Stable wire identifier, shared with the front end and the insight
    /// service.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Step::Mbti => "mbtiScreen",
            Step::Intelligence => "intelligenceScreen",
            Step::BigFive => "bigFiveScreen",
            Step::Riasec => "riasecScreen",
            Step::Decision => "decisionScreen",
            Step::Life => "lifeScreen",
            Step::Vark => "varkScreen",
        }
    }

    /// Full assessment name, used as the heading of a result block.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Step::Mbti => "MBTI Personality",
            Step::Intelligence => "Multiple Intelligence",
            Step::BigFive => "Big Five Personality",
            Step::Riasec => "RIASEC Career Interest",
            Step::Decision => "Decision Making Style",
            Step::Life => "Life Situation",
            Step::Vark => "VARK Learning Style",
        }
    }

    /// Short label shown by the progress indicator while the step is active.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Step::Mbti => "MBTI Test",
            Step::Intelligence => "Intelligence Test",
            Step::BigFive => "Big Five Test",
            Step::Riasec => "RIASEC Test",
            Step::Decision => "Decision Test",
            Step::Life => "Life Assessment",
            Step::Vark => "Learning Style",
        }
    }

    /// The profile aspect this step measures, used in summary prose.
    #[must_use]
    pub fn aspect(self) -> &'static str {
        match self {
            Step::Mbti => "Personality",
            Step::Intelligence => "Intelligence",
            Step::BigFive => "Personality Trait",
            Step::Riasec => "Career Interest",
            Step::Decision => "Decision Style",
            Step::Life => "Life Focus",
            Step::Vark => "Learning Style",
        }
    }

    /// Generic stand-in used when the step has no recorded answer.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Step::Mbti => "personality type",
            Step::Intelligence => "dominant intelligence",
            Step::BigFive => "dominant trait",
            Step::Riasec => "career-aligned",
            Step::Decision => "decision-making style",
            Step::Life => "current life stage",
            Step::Vark => "your learning style",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error type for parsing a step from its wire key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStepError {
    key: String,
}

impl fmt::Display for ParseStepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown assessment step key: {}", self.key)
    }
}

impl std::error::Error for ParseStepError {}

impl FromStr for Step {
    type Err = ParseStepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CATALOG
            .into_iter()
            .find(|step| step.key() == s)
            .ok_or_else(|| ParseStepError { key: s.to_string() })
    }
}

//
// ─── SCREEN ────────────────────────────────────────────────────────────────────
//

/// A displayable screen: a catalog step or one of the two sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Entry sentinel shown before the first assessment.
    Welcome,
    /// One of the catalog steps.
    Test(Step),
    /// Summary sentinel shown after the wizard finishes.
    Results,
}

impl Screen {
    /// Ordinal position: -1 for Welcome, the step ordinal for a test screen,
    /// the catalog length for Results.
    #[must_use]
    pub fn position(self) -> i32 {
        match self {
            Screen::Welcome => -1,
            // The catalog length fits in i32 by construction.
            Screen::Test(step) => step.ordinal() as i32,
            Screen::Results => Step::COUNT as i32,
        }
    }

    /// Display label for the progress indicator.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Test(step) => step.label(),
            Screen::Results => "Results",
        }
    }

    /// Returns the step when this screen is a test screen.
    #[must_use]
    pub fn step(self) -> Option<Step> {
        match self {
            Screen::Test(step) => Some(step),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ordinals_round_trip() {
        for (index, step) in Step::CATALOG.into_iter().enumerate() {
            assert_eq!(step.ordinal(), index);
            assert_eq!(Step::from_ordinal(index), Some(step));
        }
        assert_eq!(Step::from_ordinal(Step::COUNT), None);
    }

    #[test]
    fn wire_keys_round_trip() {
        for step in Step::CATALOG {
            let parsed: Step = step.key().parse().unwrap();
            assert_eq!(parsed, step);
        }
        assert!("resultsScreen".parse::<Step>().is_err());
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_string(&Step::BigFive).unwrap();
        assert_eq!(json, "\"bigFiveScreen\"");
        let step: Step = serde_json::from_str("\"varkScreen\"").unwrap();
        assert_eq!(step, Step::Vark);
    }

    #[test]
    fn screen_positions_span_sentinels() {
        assert_eq!(Screen::Welcome.position(), -1);
        assert_eq!(Screen::Test(Step::Mbti).position(), 0);
        assert_eq!(Screen::Test(Step::last()).position(), 6);
        assert_eq!(Screen::Results.position(), 7);
    }

    #[test]
    fn screen_labels_match_catalog() {
        assert_eq!(Screen::Welcome.label(), "Welcome");
        assert_eq!(Screen::Test(Step::Life).label(), "Life Assessment");
        assert_eq!(Screen::Results.label(), "Results");
    }
}
