use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::catalog::CardCategory;

/// Identifier of the conversation session that collected a profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Self-reported credit standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Unknown,
}

impl CreditScoreBand {
    pub const fn as_str(self) -> &'static str {
        match self {
            CreditScoreBand::Excellent => "excellent",
            CreditScoreBand::Good => "good",
            CreditScoreBand::Fair => "fair",
            CreditScoreBand::Poor => "poor",
            CreditScoreBand::Unknown => "unknown",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "fair" => Some(Self::Fair),
            "poor" => Some(Self::Poor),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Card minimum scores a user in this band can plausibly obtain.
    pub fn eligibility_range(self) -> Option<RangeInclusive<u16>> {
        match self {
            CreditScoreBand::Excellent => Some(750..=u16::MAX),
            CreditScoreBand::Good => Some(700..=749),
            CreditScoreBand::Fair => Some(650..=699),
            CreditScoreBand::Poor => Some(0..=649),
            CreditScoreBand::Unknown => None,
        }
    }

    /// Bureau score range the band stands for; a card whose minimum falls inside it is a match.
    pub fn score_range(self) -> Option<RangeInclusive<u16>> {
        match self {
            CreditScoreBand::Excellent => Some(750..=900),
            CreditScoreBand::Good => Some(700..=749),
            CreditScoreBand::Fair => Some(650..=699),
            CreditScoreBand::Poor => Some(300..=649),
            CreditScoreBand::Unknown => None,
        }
    }
}

impl fmt::Display for CreditScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spending buckets collected by the conversation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpendCategory {
    Fuel,
    Travel,
    Groceries,
    Dining,
    Shopping,
}

impl SpendCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            SpendCategory::Fuel => "fuel",
            SpendCategory::Travel => "travel",
            SpendCategory::Groceries => "groceries",
            SpendCategory::Dining => "dining",
            SpendCategory::Shopping => "shopping",
        }
    }
}

/// Monthly spend per category in rupees. A missing bucket counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingHabits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groceries: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dining: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping: Option<u32>,
}

impl SpendingHabits {
    pub fn amount(&self, category: SpendCategory) -> u32 {
        let value = match category {
            SpendCategory::Fuel => self.fuel,
            SpendCategory::Travel => self.travel,
            SpendCategory::Groceries => self.groceries,
            SpendCategory::Dining => self.dining,
            SpendCategory::Shopping => self.shopping,
        };
        value.unwrap_or(0)
    }

    pub fn monthly_total(&self) -> u64 {
        [
            self.fuel,
            self.travel,
            self.groceries,
            self.dining,
            self.shopping,
        ]
        .into_iter()
        .map(|value| u64::from(value.unwrap_or(0)))
        .sum()
    }
}

/// A user's declared financial profile. Every field is optional and an absent field means
/// "no preference", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spending_habits: Option<SpendingHabits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_benefits: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_cards: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_score: Option<CreditScoreBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_card_type: Option<CardCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_annual_fee: Option<u32>,
}

impl UserProfile {
    pub fn preferred_benefits(&self) -> &[String] {
        self.preferred_benefits.as_deref().unwrap_or(&[])
    }

    /// The declared band, ignoring `unknown`.
    pub fn known_credit_band(&self) -> Option<CreditScoreBand> {
        self.credit_score
            .filter(|band| *band != CreditScoreBand::Unknown)
    }

    pub fn prefers_benefit(&self, tag: &str) -> bool {
        self.preferred_benefits()
            .iter()
            .any(|benefit| benefit == tag)
    }
}
