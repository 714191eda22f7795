pub mod location;
pub mod pipeline;
pub mod position;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use location::{evaluate_location, LocationEvaluation};
pub use pipeline::{
    RecommendationEngine, RecommendationError, RecommendationParams, ResumeRecommendation,
    VacancyRecommendation, DEFAULT_LIMIT, DEFAULT_MIN_SCORE,
};
pub use position::{evaluate_position, PositionEvaluation, PositionMatchType};
pub use scoring::{calculate_match_score, MatchDetails, MatchScore, ScoreBreakdown};
pub use skills::{evaluate_skills, SkillsEvaluation};
pub use weights::MAX_POINTS;

/// Округление до одного десятичного знака, как в итоговом балле.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
