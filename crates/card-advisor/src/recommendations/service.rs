use std::sync::Arc;

use tracing::info;

use crate::catalog::{CardCatalog, CardId, CardProfile, CompareError};

use super::engine::{RecommendationEngine, RecommendationSet};
use super::profile::{SessionId, UserProfile};
use super::repository::{PreferenceRepository, RepositoryError};

/// Service composing the catalog snapshot, the preference store, and the engine.
pub struct RecommendationService<P> {
    catalog: Arc<CardCatalog>,
    preferences: Arc<P>,
    engine: RecommendationEngine,
}

impl<P> RecommendationService<P>
where
    P: PreferenceRepository + 'static,
{
    pub fn new(catalog: Arc<CardCatalog>, preferences: Arc<P>, engine: RecommendationEngine) -> Self {
        Self {
            catalog,
            preferences,
            engine,
        }
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Recommend cards for an ad-hoc profile that is not tied to a session.
    pub fn personalized(&self, profile: &UserProfile) -> RecommendationSet {
        let set = self.engine.generate(profile, self.catalog.cards());
        info!(
            eligible = set.total_eligible,
            returned = set.recommendations.len(),
            "personalized recommendations generated"
        );
        set
    }

    /// Recommend cards using the profile stored for a session.
    pub fn for_session(
        &self,
        session_id: &SessionId,
    ) -> Result<RecommendationSet, RecommendationServiceError> {
        let profile = self.preferences(session_id)?;
        let set = self.engine.generate(&profile, self.catalog.cards());
        info!(
            session = %session_id,
            eligible = set.total_eligible,
            returned = set.recommendations.len(),
            "session recommendations generated"
        );
        Ok(set)
    }

    pub fn save_preferences(
        &self,
        session_id: &SessionId,
        profile: UserProfile,
    ) -> Result<(), RecommendationServiceError> {
        self.preferences.upsert(session_id, profile)?;
        Ok(())
    }

    pub fn preferences(
        &self,
        session_id: &SessionId,
    ) -> Result<UserProfile, RecommendationServiceError> {
        let profile = self
            .preferences
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(profile)
    }

    pub fn compare(&self, ids: &[CardId]) -> Result<Vec<CardProfile>, RecommendationServiceError> {
        let cards = self.catalog.compare(ids)?;
        Ok(cards.into_iter().cloned().collect())
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Compare(#[from] CompareError),
}
