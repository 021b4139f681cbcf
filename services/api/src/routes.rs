use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;

use talent_track::workflows::applications::application_router;
use talent_track::workflows::complaints::complaint_router;
use talent_track::workflows::dashboard::dashboard_router;
use talent_track::workflows::directory::account_router;
use talent_track::workflows::jobs::job_router;
use talent_track::workflows::moderation::moderation_router;
use talent_track::workflows::network::network_router;
use talent_track::workflows::notifications::notification_router;

use crate::infra::{AppState, Services};

pub(crate) fn api_router(services: Services) -> Router {
    Router::new()
        .merge(account_router(services.accounts))
        .merge(job_router(services.jobs))
        .merge(application_router(services.applications))
        .merge(network_router(services.network))
        .merge(notification_router(services.notifications))
        .merge(complaint_router(services.complaints))
        .merge(moderation_router(services.moderation))
        .merge(dashboard_router(services.dashboard))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
