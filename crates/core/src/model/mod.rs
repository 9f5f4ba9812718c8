mod answers;
mod ids;
mod insight;
mod navigation;
mod step;

pub use answers::{AnswerError, AnswerSheet};
pub use ids::SessionId;
pub use insight::{
    AdditionalInsights, BestField, CareerRecommendation, Certification, FuturePlanDetail,
    FuturePlanEntry, FuturePlans, HabitDetail, HabitEntry, InsightPayload, LongTermEntry,
    LongTermPhase, MidTermEntry, MidTermPhase, ResultAnalysis, Roadmap, ShortTermEntry,
    ShortTermPhase, SkillDetail, SkillEntry, SkillGapDetail, SkillGapEntry,
    SkillRecommendations, StrengthDetail, StrengthEntry, WeaknessDetail, WeaknessEntry,
};
pub use navigation::{Navigation, NavigationError};
pub use step::{ParseStepError, Screen, Step};
