use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a card pays out its rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardType {
    Cashback,
    Points,
    Miles,
    Rewards,
}

impl RewardType {
    pub const fn as_str(self) -> &'static str {
        match self {
            RewardType::Cashback => "cashback",
            RewardType::Points => "points",
            RewardType::Miles => "miles",
            RewardType::Rewards => "rewards",
        }
    }
}

impl fmt::Display for RewardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spending category a card is marketed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardCategory {
    Travel,
    Shopping,
    Fuel,
    Dining,
    General,
}

impl CardCategory {
    pub const ALL: [CardCategory; 5] = [
        CardCategory::Travel,
        CardCategory::Shopping,
        CardCategory::Fuel,
        CardCategory::Dining,
        CardCategory::General,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CardCategory::Travel => "travel",
            CardCategory::Shopping => "shopping",
            CardCategory::Fuel => "fuel",
            CardCategory::Dining => "dining",
            CardCategory::General => "general",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for CardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A credit card product as published in the catalog. Fees are in rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProfile {
    pub id: CardId,
    pub name: String,
    pub issuer: String,
    pub joining_fee: f64,
    pub annual_fee: f64,
    pub reward_type: RewardType,
    /// Free text led by a percentage, e.g. "2.5% on dining".
    pub reward_rate: String,
    pub eligibility_criteria: String,
    pub perks: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub min_income: u32,
    /// Minimum bureau score the issuer typically asks for.
    pub credit_score: u16,
    pub category: CardCategory,
}
