use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::catalog::{CardCatalog, CardCategory, CardId, CardProfile, RewardType};
use crate::recommendations::profile::{CreditScoreBand, SessionId, SpendingHabits, UserProfile};
use crate::recommendations::repository::{PreferenceRepository, RepositoryError};
use crate::recommendations::{recommendation_router, RecommendationEngine, RecommendationService};

pub(super) fn card(id: u32, name: &str) -> CardProfile {
    CardProfile {
        id: CardId(id),
        name: name.to_string(),
        issuer: "Test Bank".to_string(),
        joining_fee: 0.0,
        annual_fee: 0.0,
        reward_type: RewardType::Points,
        reward_rate: "1% on all spends".to_string(),
        eligibility_criteria: "Salaried".to_string(),
        perks: "Welcome vouchers".to_string(),
        affiliate_link: None,
        image_url: None,
        min_income: 0,
        credit_score: 0,
        category: CardCategory::General,
    }
}

/// Card from the scenario where income, fee, and credit band all line up.
pub(super) fn mid_tier_card() -> CardProfile {
    CardProfile {
        min_income: 30000,
        annual_fee: 500.0,
        credit_score: 720,
        ..card(10, "Mid Tier Platinum")
    }
}

pub(super) fn cashback_card() -> CardProfile {
    CardProfile {
        reward_type: RewardType::Cashback,
        perks: "5% cashback on groceries".to_string(),
        reward_rate: "5% cashback on groceries".to_string(),
        category: CardCategory::Shopping,
        ..card(11, "Grocer Cashback")
    }
}

pub(super) fn fuel_card() -> CardProfile {
    CardProfile {
        reward_type: RewardType::Rewards,
        reward_rate: "4% value back on fuel".to_string(),
        perks: "Fuel surcharge waiver".to_string(),
        annual_fee: 499.0,
        category: CardCategory::Fuel,
        ..card(12, "Fuel Saver")
    }
}

pub(super) fn good_credit_profile() -> UserProfile {
    UserProfile {
        monthly_income: Some(50000),
        max_annual_fee: Some(1000),
        credit_score: Some(CreditScoreBand::Good),
        ..UserProfile::default()
    }
}

pub(super) fn fuel_spender() -> UserProfile {
    UserProfile {
        spending_habits: Some(SpendingHabits {
            fuel: Some(4000),
            ..SpendingHabits::default()
        }),
        ..UserProfile::default()
    }
}

pub(super) fn benefits(tags: &[&str]) -> UserProfile {
    UserProfile {
        preferred_benefits: Some(tags.iter().map(|tag| tag.to_string()).collect()),
        ..UserProfile::default()
    }
}

pub(super) fn build_service() -> (
    RecommendationService<MemoryPreferences>,
    Arc<MemoryPreferences>,
) {
    let preferences = Arc::new(MemoryPreferences::default());
    let service = RecommendationService::new(
        Arc::new(CardCatalog::standard()),
        preferences.clone(),
        RecommendationEngine::default(),
    );
    (service, preferences)
}

pub(super) fn router_with_service(
    service: RecommendationService<MemoryPreferences>,
) -> axum::Router {
    recommendation_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryPreferences {
    pub(super) records: Arc<Mutex<HashMap<SessionId, UserProfile>>>,
}

impl PreferenceRepository for MemoryPreferences {
    fn upsert(&self, session_id: &SessionId, profile: UserProfile) -> Result<(), RepositoryError> {
        self.records
            .lock()
            .expect("preferences mutex poisoned")
            .insert(session_id.clone(), profile);
        Ok(())
    }

    fn fetch(&self, session_id: &SessionId) -> Result<Option<UserProfile>, RepositoryError> {
        let guard = self.records.lock().expect("preferences mutex poisoned");
        Ok(guard.get(session_id).cloned())
    }
}

pub(super) struct UnavailablePreferences;

impl PreferenceRepository for UnavailablePreferences {
    fn upsert(&self, _session_id: &SessionId, _profile: UserProfile) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _session_id: &SessionId) -> Result<Option<UserProfile>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
