use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ComplaintId, ComplaintRequest};
use super::service::{ComplaintError, ComplaintService};

/// Router builder for complaint intake and admin resolution.
pub fn complaint_router(service: Arc<ComplaintService>) -> Router {
    Router::new()
        .route(
            "/api/v1/complaints",
            get(list_handler).post(submit_handler),
        )
        .route(
            "/api/v1/complaints/:complaint_id/status",
            put(update_status_handler),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct StatusUpdateRequest {
    status: String,
}

fn error_response(error: ComplaintError) -> Response {
    let status = match &error {
        ComplaintError::NotFound => StatusCode::NOT_FOUND,
        ComplaintError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

async fn submit_handler(
    State(service): State<Arc<ComplaintService>>,
    Json(request): Json<ComplaintRequest>,
) -> Response {
    match service.submit(request) {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn list_handler(State(service): State<Arc<ComplaintService>>) -> Response {
    match service.all() {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn update_status_handler(
    State(service): State<Arc<ComplaintService>>,
    Path(complaint_id): Path<ComplaintId>,
    Json(request): Json<StatusUpdateRequest>,
) -> Response {
    match service.update_status(complaint_id, &request.status) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
