use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::catalog::CardProfile;

use super::profile::UserProfile;

static RATE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+)?)").expect("reward rate pattern compiles"));

/// Projected yearly value of a card for the declared spending. Values are kept unrounded;
/// use the `rounded_*` accessors or [`RewardEstimate::display`] for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardEstimate {
    pub annual_spending: f64,
    pub reward_rate: String,
    pub estimated_rewards: f64,
    pub net_benefit: f64,
}

impl RewardEstimate {
    pub fn rounded_annual_spending(&self) -> i64 {
        round_currency(self.annual_spending)
    }

    pub fn rounded_estimated_rewards(&self) -> i64 {
        round_currency(self.estimated_rewards)
    }

    pub fn rounded_net_benefit(&self) -> i64 {
        round_currency(self.net_benefit)
    }

    pub fn display(&self) -> RewardEstimateDisplay {
        RewardEstimateDisplay {
            annual_spending: format_rupees(self.annual_spending),
            estimated_rewards: format_rupees(self.estimated_rewards),
            net_benefit: format_rupees(self.net_benefit),
        }
    }
}

/// Pre-formatted rupee strings for a [`RewardEstimate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardEstimateDisplay {
    pub annual_spending: String,
    pub estimated_rewards: String,
    pub net_benefit: String,
}

/// Why no estimate could be produced. Not an error: the recommendation is still returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsufficientData {
    MissingSpending,
    NoSpending,
}

impl InsufficientData {
    pub const fn message(self) -> &'static str {
        match self {
            InsufficientData::MissingSpending => "Unable to calculate without spending data",
            InsufficientData::NoSpending => "No spending data available",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RewardProjection {
    Estimated(RewardEstimate),
    Unavailable(InsufficientData),
}

impl RewardProjection {
    pub fn estimate(&self) -> Option<&RewardEstimate> {
        match self {
            RewardProjection::Estimated(estimate) => Some(estimate),
            RewardProjection::Unavailable(_) => None,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RewardEstimateWire<'a> {
    annual_spending: i64,
    reward_rate: &'a str,
    estimated_rewards: i64,
    net_benefit: i64,
    display: RewardEstimateDisplay,
}

/// Estimates serialize as an object of rounded numbers plus display strings; the
/// insufficient-data sentinel serializes as its message.
impl Serialize for RewardProjection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RewardProjection::Estimated(estimate) => RewardEstimateWire {
                annual_spending: estimate.rounded_annual_spending(),
                reward_rate: &estimate.reward_rate,
                estimated_rewards: estimate.rounded_estimated_rewards(),
                net_benefit: estimate.rounded_net_benefit(),
                display: estimate.display(),
            }
            .serialize(serializer),
            RewardProjection::Unavailable(reason) => serializer.serialize_str(reason.message()),
        }
    }
}

pub fn estimate(card: &CardProfile, profile: &UserProfile) -> RewardProjection {
    let Some(habits) = &profile.spending_habits else {
        return RewardProjection::Unavailable(InsufficientData::MissingSpending);
    };

    let monthly_total = habits.monthly_total();
    if monthly_total == 0 {
        return RewardProjection::Unavailable(InsufficientData::NoSpending);
    }

    let rate = parse_reward_rate(&card.reward_rate);
    let annual_spending = monthly_total as f64 * 12.0;
    let estimated_rewards = annual_spending * (rate / 100.0);

    RewardProjection::Estimated(RewardEstimate {
        annual_spending,
        reward_rate: card.reward_rate.clone(),
        estimated_rewards,
        net_benefit: estimated_rewards - card.annual_fee,
    })
}

/// First decimal number in the text, read as a percentage. Text without a number yields 0.
pub fn parse_reward_rate(text: &str) -> f64 {
    RATE_NUMBER
        .find(text)
        .and_then(|found| found.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Rounds half-way values up, toward positive infinity.
fn round_currency(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Whole rupees with thousands separators, e.g. `₹120,000`.
pub fn format_rupees(value: f64) -> String {
    let rounded = round_currency(value);
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded < 0 { "-" } else { "" };
    format!("₹{sign}{grouped}")
}
