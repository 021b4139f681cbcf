use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::domain::NotificationId;
use super::service::NotificationService;
use crate::store::StoreError;
use crate::workflows::directory::domain::UserId;

/// Router builder for the per-user notification inbox.
pub fn notification_router(service: Arc<NotificationService>) -> Router {
    Router::new()
        .route("/api/v1/notifications/:user_id", get(list_handler))
        .route(
            "/api/v1/notifications/:notification_id/read",
            post(mark_read_handler),
        )
        .with_state(service)
}

fn error_response(error: StoreError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": error.to_string() })),
    )
        .into_response()
}

async fn list_handler(
    State(service): State<Arc<NotificationService>>,
    Path(user_id): Path<UserId>,
) -> Response {
    match service.list(user_id) {
        Ok(notifications) => (StatusCode::OK, Json(notifications)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn mark_read_handler(
    State(service): State<Arc<NotificationService>>,
    Path(notification_id): Path<NotificationId>,
) -> Response {
    match service.mark_read(notification_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
