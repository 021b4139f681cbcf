use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::service::{DashboardError, DashboardService};
use crate::workflows::directory::domain::UserId;

/// Router builder for the per-role dashboard.
pub fn dashboard_router(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/v1/dashboard/:user_id", get(stats_handler))
        .with_state(service)
}

async fn stats_handler(
    State(service): State<Arc<DashboardService>>,
    Path(user_id): Path<UserId>,
) -> Response {
    match service.stats(user_id) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => {
            let status = match &error {
                DashboardError::UserNotFound => StatusCode::NOT_FOUND,
                DashboardError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(json!({ "error": error.to_string() }))).into_response()
        }
    }
}
