use crate::catalog::CardProfile;

use super::profile::{SpendCategory, UserProfile};
use super::rewards::format_rupees;
use super::scoring::SPENDING_RULES;

/// Human-readable reasons a card suits the profile, in a fixed check order. Each check is
/// independent, so a card can collect several reasons or none.
pub fn explain(card: &CardProfile, profile: &UserProfile) -> Vec<String> {
    let mut reasons = Vec::new();

    if profile.prefers_benefit(card.reward_type.as_str()) {
        reasons.push(format!(
            "Matches your preferred {} rewards",
            card.reward_type
        ));
    }

    if let Some(habits) = &profile.spending_habits {
        for rule in SPENDING_RULES {
            let spend = habits.amount(rule.spend);
            if spend <= rule.threshold || card.category != rule.card_category {
                continue;
            }
            let amount = format_rupees(f64::from(spend));
            match rule.spend {
                SpendCategory::Travel => reasons.push(format!(
                    "Great for your travel spending ({amount}/month)"
                )),
                SpendCategory::Fuel => reasons.push(format!(
                    "Excellent fuel rewards for your spending ({amount}/month)"
                )),
                SpendCategory::Dining => {
                    reasons.push(format!("Perfect for dining rewards ({amount}/month)"))
                }
                // grocery spend scores but has no reason of its own
                SpendCategory::Groceries | SpendCategory::Shopping => {}
            }
        }
    }

    if let Some(max_fee) = profile.max_annual_fee {
        if card.annual_fee <= f64::from(max_fee) * 0.8 {
            reasons.push(format!(
                "Low annual fee ({}) within your budget",
                format_rupees(card.annual_fee)
            ));
        }
    }

    if let Some(income) = profile.monthly_income {
        if card.min_income > 0 && f64::from(income) >= f64::from(card.min_income) * 1.5 {
            reasons.push("Income requirement well within your range".to_string());
        }
    }

    reasons
}
