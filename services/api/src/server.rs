use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemoryPreferenceRepository};
use crate::routes::with_recommendation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use card_advisor::config::AppConfig;
use card_advisor::error::AppError;
use card_advisor::recommendations::{RecommendationEngine, RecommendationService};
use card_advisor::telemetry;
use chrono::Utc;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(catalog) = args.catalog.take() {
        config.catalog.path = Some(catalog);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        started_at: Utc::now(),
    };

    let catalog = Arc::new(load_catalog(config.catalog.path.as_deref())?);
    let preferences = Arc::new(InMemoryPreferenceRepository::default());
    let engine = RecommendationEngine::new(config.recommendations.limit);
    let service = Arc::new(RecommendationService::new(
        catalog.clone(),
        preferences,
        engine,
    ));

    let app = with_recommendation_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        cards = catalog.len(),
        limit = engine.limit(),
        "card recommendation service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
