use card_advisor::catalog::{CardCatalog, CardCategory, CardId, CardProfile, RewardType};
use card_advisor::recommendations::rewards::parse_reward_rate;
use card_advisor::recommendations::{
    generate_recommendations, score, CreditScoreBand, InsufficientData, RewardProjection,
    SpendingHabits, UserProfile, BASE_SCORE,
};

fn card(id: u32, name: &str) -> CardProfile {
    CardProfile {
        id: CardId(id),
        name: name.to_string(),
        issuer: "Integration Bank".to_string(),
        joining_fee: 0.0,
        annual_fee: 0.0,
        reward_type: RewardType::Points,
        reward_rate: "1% on all spends".to_string(),
        eligibility_criteria: "Salaried or self-employed".to_string(),
        perks: "Welcome vouchers".to_string(),
        affiliate_link: None,
        image_url: None,
        min_income: 0,
        credit_score: 0,
        category: CardCategory::General,
    }
}

fn sample_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile::default(),
        UserProfile {
            monthly_income: Some(50000),
            max_annual_fee: Some(1000),
            credit_score: Some(CreditScoreBand::Good),
            ..UserProfile::default()
        },
        UserProfile {
            spending_habits: Some(SpendingHabits {
                fuel: Some(4000),
                travel: Some(8000),
                dining: Some(2500),
                ..SpendingHabits::default()
            }),
            preferred_benefits: Some(vec!["cashback".to_string(), "lounge_access".to_string()]),
            ..UserProfile::default()
        },
        UserProfile {
            monthly_income: Some(200000),
            credit_score: Some(CreditScoreBand::Excellent),
            max_annual_fee: Some(10000),
            ..UserProfile::default()
        },
    ]
}

#[test]
fn mid_tier_card_scores_fee_income_and_credit_bonuses() {
    let profile = UserProfile {
        monthly_income: Some(50000),
        max_annual_fee: Some(1000),
        credit_score: Some(CreditScoreBand::Good),
        ..UserProfile::default()
    };
    let catalog = vec![CardProfile {
        min_income: 30000,
        annual_fee: 500.0,
        credit_score: 720,
        ..card(1, "Mid Tier")
    }];

    let set = generate_recommendations(&profile, &catalog);

    assert_eq!(set.total_eligible, 1);
    assert_eq!(set.recommendations[0].score, 75);
}

#[test]
fn cashback_preference_earns_type_and_perk_bonuses() {
    let profile = UserProfile {
        preferred_benefits: Some(vec!["cashback".to_string()]),
        ..UserProfile::default()
    };
    let cashback = CardProfile {
        reward_type: RewardType::Cashback,
        perks: "5% cashback on groceries".to_string(),
        ..card(1, "Cashback Plus")
    };

    assert_eq!(score(&cashback, &profile), BASE_SCORE + 30);
}

#[test]
fn fuel_spend_bonus_and_explanation() {
    let profile = UserProfile {
        spending_habits: Some(SpendingHabits {
            fuel: Some(4000),
            ..SpendingHabits::default()
        }),
        ..UserProfile::default()
    };
    let fuel = CardProfile {
        category: CardCategory::Fuel,
        ..card(1, "Fuel Saver")
    };

    let set = generate_recommendations(&profile, &[fuel]);
    let top = &set.recommendations[0];

    assert_eq!(top.score, BASE_SCORE + 15);
    assert!(top.reasons.iter().any(|reason| reason.contains("fuel")));
    assert!(!top
        .reasons
        .iter()
        .any(|reason| reason.contains("travel") || reason.contains("dining")));
}

#[test]
fn empty_catalog_returns_empty_set() {
    let set = generate_recommendations(&sample_profiles()[1], &[]);

    assert!(set.recommendations.is_empty());
    assert_eq!(set.total_eligible, 0);
}

#[test]
fn reward_rate_uses_first_number() {
    assert_eq!(parse_reward_rate("Up to 10% on dining, 1% other"), 10.0);
    assert_eq!(parse_reward_rate("1.5 miles per ₹100"), 1.5);
    assert_eq!(parse_reward_rate("Flat rewards"), 0.0);
}

#[test]
fn results_are_bounded_sorted_and_never_below_base() {
    let catalog = CardCatalog::standard();

    for profile in sample_profiles() {
        let set = generate_recommendations(&profile, catalog.cards());

        assert!(set.recommendations.len() <= 5);
        assert!(set.recommendations.len() <= set.total_eligible);
        assert!(set.total_eligible <= catalog.len());
        assert!(set
            .recommendations
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
        assert!(set
            .recommendations
            .iter()
            .all(|recommendation| recommendation.score >= BASE_SCORE));
    }
}

#[test]
fn equal_scores_keep_catalog_order() {
    let catalog = vec![card(3, "Alpha"), card(1, "Bravo"), card(2, "Charlie")];

    let set = generate_recommendations(&UserProfile::default(), &catalog);

    let ids: Vec<u32> = set
        .recommendations
        .iter()
        .map(|recommendation| recommendation.card.id.0)
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn repeated_calls_are_identical() {
    let catalog = CardCatalog::standard();

    for profile in sample_profiles() {
        assert_eq!(
            generate_recommendations(&profile, catalog.cards()),
            generate_recommendations(&profile, catalog.cards())
        );
    }
}

#[test]
fn tightening_fee_budget_never_grows_eligibility() {
    let catalog = CardCatalog::standard();
    let mut previous = usize::MAX;

    for budget in [10000, 5000, 2500, 1000, 500, 0] {
        let profile = UserProfile {
            max_annual_fee: Some(budget),
            ..UserProfile::default()
        };
        let eligible = generate_recommendations(&profile, catalog.cards()).total_eligible;
        assert!(eligible <= previous, "budget {budget} admitted more cards");
        previous = eligible;
    }
    assert_eq!(previous, 2, "only the lifetime-free cards remain");
}

#[test]
fn zero_spend_yields_no_spending_sentinel() {
    let profile = UserProfile {
        spending_habits: Some(SpendingHabits {
            fuel: Some(0),
            ..SpendingHabits::default()
        }),
        ..UserProfile::default()
    };

    let set = generate_recommendations(&profile, CardCatalog::standard().cards());

    assert!(set.recommendations.iter().all(|recommendation| {
        recommendation.estimated_rewards
            == RewardProjection::Unavailable(InsufficientData::NoSpending)
    }));
}
