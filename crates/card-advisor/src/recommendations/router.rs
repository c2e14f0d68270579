use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use crate::catalog::{CardCategory, CardId, CompareError};

use super::profile::{SessionId, UserProfile};
use super::repository::{PreferenceRepository, RepositoryError};
use super::service::{RecommendationService, RecommendationServiceError};

/// Body of a side-by-side comparison request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub card_ids: Vec<u32>,
}

/// Router builder exposing catalog lookups, preference storage, and recommendations.
pub fn recommendation_router<P>(service: Arc<RecommendationService<P>>) -> Router
where
    P: PreferenceRepository + 'static,
{
    Router::new()
        .route("/api/v1/cards", get(list_cards_handler::<P>))
        .route("/api/v1/cards/:card_id", get(card_handler::<P>))
        .route(
            "/api/v1/cards/category/:category",
            get(category_handler::<P>),
        )
        .route("/api/v1/cards/search/:query", get(search_handler::<P>))
        .route(
            "/api/v1/recommendations/personalized",
            post(personalized_handler::<P>),
        )
        .route(
            "/api/v1/recommendations/compare",
            post(compare_handler::<P>),
        )
        .route(
            "/api/v1/recommendations/:session_id",
            get(session_recommendations_handler::<P>),
        )
        .route(
            "/api/v1/preferences/:session_id",
            get(get_preferences_handler::<P>).put(put_preferences_handler::<P>),
        )
        .with_state(service)
}

pub(crate) async fn list_cards_handler<P>(
    State(service): State<Arc<RecommendationService<P>>>,
) -> Response
where
    P: PreferenceRepository + 'static,
{
    let cards = service.catalog().cards();
    (StatusCode::OK, Json(json!({ "success": true, "cards": cards }))).into_response()
}

pub(crate) async fn card_handler<P>(
    State(service): State<Arc<RecommendationService<P>>>,
    Path(card_id): Path<u32>,
) -> Response
where
    P: PreferenceRepository + 'static,
{
    match service.catalog().find(CardId(card_id)) {
        Some(card) => (StatusCode::OK, Json(json!({ "success": true, "card": card }))).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Card not found"),
    }
}

/// Unknown categories match nothing rather than failing.
pub(crate) async fn category_handler<P>(
    State(service): State<Arc<RecommendationService<P>>>,
    Path(category): Path<String>,
) -> Response
where
    P: PreferenceRepository + 'static,
{
    let cards = match CardCategory::parse(&category) {
        Some(category) => service.catalog().by_category(category),
        None => Vec::new(),
    };
    (StatusCode::OK, Json(json!({ "success": true, "cards": cards }))).into_response()
}

pub(crate) async fn search_handler<P>(
    State(service): State<Arc<RecommendationService<P>>>,
    Path(query): Path<String>,
) -> Response
where
    P: PreferenceRepository + 'static,
{
    let cards = service.catalog().search(&query);
    (StatusCode::OK, Json(json!({ "success": true, "cards": cards }))).into_response()
}

pub(crate) async fn personalized_handler<P>(
    State(service): State<Arc<RecommendationService<P>>>,
    Json(profile): Json<UserProfile>,
) -> Response
where
    P: PreferenceRepository + 'static,
{
    let recommendations = service.personalized(&profile);
    (
        StatusCode::OK,
        Json(json!({ "success": true, "recommendations": recommendations })),
    )
        .into_response()
}

pub(crate) async fn compare_handler<P>(
    State(service): State<Arc<RecommendationService<P>>>,
    Json(request): Json<CompareRequest>,
) -> Response
where
    P: PreferenceRepository + 'static,
{
    let ids: Vec<CardId> = request.card_ids.into_iter().map(CardId).collect();
    match service.compare(&ids) {
        Ok(cards) => (
            StatusCode::OK,
            Json(json!({ "success": true, "comparison": cards })),
        )
            .into_response(),
        Err(RecommendationServiceError::Compare(CompareError::TooFewCards)) => error_response(
            StatusCode::BAD_REQUEST,
            "At least 2 card IDs are required for comparison",
        ),
        Err(RecommendationServiceError::Compare(CompareError::NotFound(_))) => {
            error_response(StatusCode::NOT_FOUND, "Some cards not found")
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn session_recommendations_handler<P>(
    State(service): State<Arc<RecommendationService<P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    P: PreferenceRepository + 'static,
{
    let session_id = SessionId(session_id);
    match service.for_session(&session_id) {
        Ok(recommendations) => (
            StatusCode::OK,
            Json(json!({ "success": true, "recommendations": recommendations })),
        )
            .into_response(),
        Err(RecommendationServiceError::Repository(RepositoryError::NotFound)) => {
            error_response(StatusCode::NOT_FOUND, "User preferences not found")
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn put_preferences_handler<P>(
    State(service): State<Arc<RecommendationService<P>>>,
    Path(session_id): Path<String>,
    Json(profile): Json<UserProfile>,
) -> Response
where
    P: PreferenceRepository + 'static,
{
    let session_id = SessionId(session_id);
    match service.save_preferences(&session_id, profile.clone()) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "sessionId": session_id,
                "preferences": profile,
            })),
        )
            .into_response(),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn get_preferences_handler<P>(
    State(service): State<Arc<RecommendationService<P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    P: PreferenceRepository + 'static,
{
    let session_id = SessionId(session_id);
    match service.preferences(&session_id) {
        Ok(profile) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "sessionId": session_id,
                "preferences": profile,
            })),
        )
            .into_response(),
        Err(RecommendationServiceError::Repository(RepositoryError::NotFound)) => {
            error_response(StatusCode::NOT_FOUND, "User preferences not found")
        }
        Err(other) => internal_error(other),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn internal_error(error: RecommendationServiceError) -> Response {
    warn!(%error, "recommendation request failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, &error.to_string())
}
