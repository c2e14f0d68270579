use std::num::NonZeroUsize;

use serde::Serialize;
use tracing::debug;

use crate::catalog::CardProfile;

use super::eligibility;
use super::explanation::explain;
use super::profile::UserProfile;
use super::ranking::{rank, ScoredCard, DEFAULT_LIMIT};
use super::rewards::{estimate, RewardProjection};
use super::scoring::{score_breakdown, ScoreComponent};

/// A ranked card annotated with the reasons it was picked and its projected rewards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(flatten)]
    pub card: CardProfile,
    pub score: u32,
    pub reasons: Vec<String>,
    pub estimated_rewards: RewardProjection,
    pub score_breakdown: Vec<ScoreComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
    pub total_eligible: usize,
}

/// Stateless pipeline: eligibility filter, scoring, ranking, then explanation and reward
/// estimates for the cards that made the cut. Holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationEngine {
    limit: usize,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

impl RecommendationEngine {
    pub fn new(limit: NonZeroUsize) -> Self {
        Self { limit: limit.get() }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn generate(&self, profile: &UserProfile, catalog: &[CardProfile]) -> RecommendationSet {
        let scored: Vec<ScoredCard<'_>> = eligibility::filter(catalog, profile)
            .into_iter()
            .map(|card| {
                let breakdown = score_breakdown(card, profile);
                ScoredCard {
                    card,
                    score: breakdown.total,
                    components: breakdown.components,
                }
            })
            .collect();

        let ranked = rank(scored, self.limit);

        let recommendations: Vec<Recommendation> = ranked
            .cards
            .into_iter()
            .map(|entry| Recommendation {
                card: entry.card.clone(),
                score: entry.score,
                reasons: explain(entry.card, profile),
                estimated_rewards: estimate(entry.card, profile),
                score_breakdown: entry.components,
            })
            .collect();

        debug!(
            catalog = catalog.len(),
            eligible = ranked.total_eligible,
            returned = recommendations.len(),
            "generated card recommendations"
        );

        RecommendationSet {
            recommendations,
            total_eligible: ranked.total_eligible,
        }
    }
}

/// Runs the pipeline with the default shortlist size.
pub fn generate_recommendations(profile: &UserProfile, catalog: &[CardProfile]) -> RecommendationSet {
    RecommendationEngine::default().generate(profile, catalog)
}
