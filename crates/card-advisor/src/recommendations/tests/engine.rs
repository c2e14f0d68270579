use std::num::NonZeroUsize;

use super::common::*;
use crate::catalog::{CardCatalog, CardProfile};
use crate::recommendations::profile::UserProfile;
use crate::recommendations::rewards::{InsufficientData, RewardProjection};
use crate::recommendations::scoring::{ScoreFactor, BASE_SCORE};
use crate::recommendations::{generate_recommendations, RecommendationEngine};

#[test]
fn annotates_each_recommendation() {
    let catalog = vec![fuel_card(), cashback_card()];

    let set = generate_recommendations(&fuel_spender(), &catalog);

    assert_eq!(set.total_eligible, 2);
    let top = &set.recommendations[0];
    assert_eq!(top.card.id, fuel_card().id);
    assert_eq!(top.score, BASE_SCORE + 15);
    assert_eq!(top.reasons.len(), 1);
    assert!(top
        .score_breakdown
        .iter()
        .any(|component| component.factor == ScoreFactor::SpendingCategory));

    let estimate = top.estimated_rewards.estimate().expect("spending declared");
    assert_eq!(estimate.annual_spending, 48000.0);
    assert_eq!(estimate.rounded_estimated_rewards(), 1920);
    assert_eq!(estimate.rounded_net_benefit(), 1421);
}

#[test]
fn engine_limit_truncates_but_reports_all_eligible() {
    let catalog = CardCatalog::standard();
    let engine = RecommendationEngine::new(NonZeroUsize::new(2).expect("non-zero"));

    let set = engine.generate(&UserProfile::default(), catalog.cards());

    assert_eq!(set.recommendations.len(), 2);
    assert_eq!(set.total_eligible, catalog.len());
}

#[test]
fn missing_spending_yields_sentinel_for_every_card() {
    let catalog = CardCatalog::standard();

    let set = generate_recommendations(&good_credit_profile(), catalog.cards());

    assert!(set.recommendations.iter().all(|recommendation| {
        recommendation.estimated_rewards
            == RewardProjection::Unavailable(InsufficientData::MissingSpending)
    }));
}

#[test]
fn leaves_catalog_untouched_and_is_repeatable() {
    let catalog = CardCatalog::standard();
    let snapshot: Vec<CardProfile> = catalog.cards().to_vec();
    let profile = UserProfile {
        preferred_benefits: Some(vec!["cashback".to_string(), "lounge_access".to_string()]),
        ..fuel_spender()
    };

    let first = generate_recommendations(&profile, catalog.cards());
    let second = generate_recommendations(&profile, catalog.cards());

    assert_eq!(first, second);
    assert_eq!(catalog.cards(), snapshot.as_slice());
}

#[test]
fn serializes_with_flattened_card_fields() {
    let catalog = vec![mid_tier_card()];

    let set = generate_recommendations(&good_credit_profile(), &catalog);
    let value = serde_json::to_value(&set).expect("serializes");

    assert_eq!(value["totalEligible"], 1);
    let first = &value["recommendations"][0];
    assert_eq!(first["name"], "Mid Tier Platinum");
    assert_eq!(first["annualFee"], 500.0);
    assert_eq!(first["score"], 75);
    assert_eq!(
        first["estimatedRewards"],
        "Unable to calculate without spending data"
    );
    assert!(first["scoreBreakdown"].is_array());
}
