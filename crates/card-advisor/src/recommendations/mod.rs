//! Card recommendation pipeline: eligibility filter, scoring, ranking, explanations and reward
//! estimates, plus the service and HTTP surface around it.
//!
//! The engine stages are pure functions of `(catalog, profile)`. They never mutate catalog
//! records and keep no state between calls, so one catalog snapshot can serve concurrent
//! requests without coordination.

pub mod eligibility;
pub mod engine;
pub mod explanation;
pub mod profile;
pub mod ranking;
pub mod repository;
pub mod rewards;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use engine::{generate_recommendations, Recommendation, RecommendationEngine, RecommendationSet};
pub use profile::{CreditScoreBand, SessionId, SpendCategory, SpendingHabits, UserProfile};
pub use ranking::{rank, RankedCards, ScoredCard, DEFAULT_LIMIT};
pub use repository::{PreferenceRepository, RepositoryError};
pub use rewards::{InsufficientData, RewardEstimate, RewardEstimateDisplay, RewardProjection};
pub use router::{recommendation_router, CompareRequest};
pub use scoring::{score, score_breakdown, ScoreBreakdown, ScoreComponent, ScoreFactor, BASE_SCORE};
pub use service::{RecommendationService, RecommendationServiceError};
