use crate::catalog::CardProfile;

use super::profile::UserProfile;

/// Narrows the catalog to cards the user could plausibly obtain. Each rule only applies when
/// the matching profile field is present; active rules are ANDed.
pub fn filter<'a>(catalog: &'a [CardProfile], profile: &UserProfile) -> Vec<&'a CardProfile> {
    catalog
        .iter()
        .filter(|card| is_eligible(card, profile))
        .collect()
}

pub fn is_eligible(card: &CardProfile, profile: &UserProfile) -> bool {
    if let Some(income) = profile.monthly_income {
        if card.min_income > income {
            return false;
        }
    }

    if let Some(max_fee) = profile.max_annual_fee {
        if card.annual_fee > f64::from(max_fee) {
            return false;
        }
    }

    if let Some(band) = profile.known_credit_band() {
        if let Some(range) = band.eligibility_range() {
            if !range.contains(&card.credit_score) {
                return false;
            }
        }
    }

    true
}
