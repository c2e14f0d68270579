use serde::{Deserialize, Serialize};

use crate::catalog::{CardCategory, CardProfile};

use super::profile::{SpendCategory, UserProfile};

pub const BASE_SCORE: u32 = 50;

const REWARD_TYPE_POINTS: u32 = 20;
const PERK_KEYWORD_POINTS: u32 = 10;
const SPENDING_CATEGORY_POINTS: u32 = 15;

/// A monthly spend above `threshold` in `spend` favors cards in `card_category`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SpendingRule {
    pub spend: SpendCategory,
    pub threshold: u32,
    pub card_category: CardCategory,
}

// Grocery spend feeds the shopping category; there is no groceries card category.
pub(crate) const SPENDING_RULES: [SpendingRule; 4] = [
    SpendingRule {
        spend: SpendCategory::Travel,
        threshold: 5000,
        card_category: CardCategory::Travel,
    },
    SpendingRule {
        spend: SpendCategory::Fuel,
        threshold: 3000,
        card_category: CardCategory::Fuel,
    },
    SpendingRule {
        spend: SpendCategory::Dining,
        threshold: 2000,
        card_category: CardCategory::Dining,
    },
    SpendingRule {
        spend: SpendCategory::Groceries,
        threshold: 3000,
        card_category: CardCategory::Shopping,
    },
];

/// Factors that can contribute points to a card's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Base,
    RewardType,
    PerkKeyword,
    SpendingCategory,
    FeeAffordability,
    IncomeHeadroom,
    CreditBand,
}

/// Discrete contribution to a card's score so rankings can be audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u32,
    pub components: Vec<ScoreComponent>,
}

impl ScoreBreakdown {
    fn new() -> Self {
        Self {
            total: BASE_SCORE,
            components: vec![ScoreComponent {
                factor: ScoreFactor::Base,
                points: BASE_SCORE,
                notes: "base score".to_string(),
            }],
        }
    }

    fn award(&mut self, factor: ScoreFactor, points: u32, notes: String) {
        self.total += points;
        self.components.push(ScoreComponent {
            factor,
            points,
            notes,
        });
    }
}

pub fn score(card: &CardProfile, profile: &UserProfile) -> u32 {
    score_breakdown(card, profile).total
}

/// Additive point model starting from [`BASE_SCORE`]. No factor subtracts points.
pub fn score_breakdown(card: &CardProfile, profile: &UserProfile) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::new();

    let benefits = profile.preferred_benefits();
    if !benefits.is_empty() {
        if profile.prefers_benefit(card.reward_type.as_str()) {
            breakdown.award(
                ScoreFactor::RewardType,
                REWARD_TYPE_POINTS,
                format!("prefers {} rewards", card.reward_type),
            );
        }

        // Deliberately independent of the reward type bonus above; both may fire.
        let perks = card.perks.to_lowercase();
        for benefit in benefits {
            let keyword = normalize_benefit(benefit);
            if perks.contains(&keyword) {
                breakdown.award(
                    ScoreFactor::PerkKeyword,
                    PERK_KEYWORD_POINTS,
                    format!("perks mention '{keyword}'"),
                );
            }
        }
    }

    if let Some(habits) = &profile.spending_habits {
        if habits.monthly_total() > 0 {
            for rule in SPENDING_RULES {
                let spend = habits.amount(rule.spend);
                if spend > rule.threshold && card.category == rule.card_category {
                    breakdown.award(
                        ScoreFactor::SpendingCategory,
                        SPENDING_CATEGORY_POINTS,
                        format!(
                            "{} spend {} above {} suits a {} card",
                            rule.spend.as_str(),
                            spend,
                            rule.threshold,
                            rule.card_category
                        ),
                    );
                }
            }
        }
    }

    if let Some(max_fee) = profile.max_annual_fee.filter(|fee| *fee > 0) {
        let ratio = card.annual_fee / f64::from(max_fee);
        let points = if ratio <= 0.5 {
            10
        } else if ratio <= 0.8 {
            5
        } else {
            0
        };
        if points > 0 {
            breakdown.award(
                ScoreFactor::FeeAffordability,
                points,
                format!("annual fee uses {:.0}% of budget", ratio * 100.0),
            );
        }
    }

    if let Some(income) = profile.monthly_income {
        if card.min_income > 0 {
            let ratio = f64::from(income) / f64::from(card.min_income);
            let points = if ratio >= 2.0 {
                10
            } else if ratio >= 1.5 {
                5
            } else {
                0
            };
            if points > 0 {
                breakdown.award(
                    ScoreFactor::IncomeHeadroom,
                    points,
                    format!("income is {ratio:.2}x the card minimum"),
                );
            }
        }
    }

    if let Some(band) = profile.known_credit_band() {
        if let Some(range) = band.score_range() {
            if range.contains(&card.credit_score) {
                breakdown.award(
                    ScoreFactor::CreditBand,
                    10,
                    format!(
                        "card minimum score {} fits the {band} band",
                        card.credit_score
                    ),
                );
            }
        }
    }

    breakdown
}

/// "travel_points" becomes "travel points"; matching is case-insensitive.
pub(crate) fn normalize_benefit(benefit: &str) -> String {
    benefit.replace('_', " ").to_lowercase()
}
