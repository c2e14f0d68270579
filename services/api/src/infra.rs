use card_advisor::catalog::{CardCatalog, CatalogImporter};
use card_advisor::error::AppError;
use card_advisor::recommendations::{
    CreditScoreBand, PreferenceRepository, RepositoryError, SessionId, UserProfile,
};
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) started_at: DateTime<Utc>,
}

/// Session preferences held in process memory; lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryPreferenceRepository {
    records: Arc<Mutex<HashMap<SessionId, UserProfile>>>,
}

impl PreferenceRepository for InMemoryPreferenceRepository {
    fn upsert(&self, session_id: &SessionId, profile: UserProfile) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        guard.insert(session_id.clone(), profile);
        Ok(())
    }

    fn fetch(&self, session_id: &SessionId) -> Result<Option<UserProfile>, RepositoryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        Ok(guard.get(session_id).cloned())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> RepositoryError {
    RepositoryError::Unavailable("preference store lock poisoned".to_string())
}

/// Reads the catalog CSV when a path is configured, otherwise falls back to the built-in cards.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<CardCatalog, AppError> {
    match path {
        Some(path) => {
            let catalog = CatalogImporter::from_path(path)?;
            info!(path = %path.display(), cards = catalog.len(), "card catalog imported");
            Ok(catalog)
        }
        None => Ok(CardCatalog::standard()),
    }
}

pub(crate) fn parse_credit_band(raw: &str) -> Result<CreditScoreBand, String> {
    CreditScoreBand::parse(raw)
        .ok_or_else(|| format!("unknown credit band '{raw}' (expected excellent, good, fair, poor or unknown)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_upserts_and_fetches() {
        let repository = InMemoryPreferenceRepository::default();
        let session = SessionId("chat-1".to_string());
        let profile = UserProfile {
            monthly_income: Some(42000),
            ..UserProfile::default()
        };

        assert_eq!(repository.fetch(&session).expect("fetch"), None);
        repository
            .upsert(&session, profile.clone())
            .expect("upsert");
        assert_eq!(repository.fetch(&session).expect("fetch"), Some(profile));
    }

    #[test]
    fn missing_catalog_path_uses_standard_cards() {
        let catalog = load_catalog(None).expect("standard catalog");
        assert_eq!(catalog, CardCatalog::standard());
    }

    #[test]
    fn unreadable_catalog_path_is_a_catalog_error() {
        let error = load_catalog(Some(Path::new("./no-such-catalog.csv"))).expect_err("io failure");
        assert!(matches!(error, AppError::Catalog(_)));
    }

    #[test]
    fn credit_band_parser_is_case_insensitive() {
        assert_eq!(parse_credit_band("Excellent"), Ok(CreditScoreBand::Excellent));
        assert!(parse_credit_band("stellar").is_err());
    }
}
