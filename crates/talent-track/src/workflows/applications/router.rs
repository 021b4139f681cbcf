use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{ApplicationId, InterviewForm};
use super::service::{ApplicationService, ApplicationServiceError};
use crate::workflows::directory::domain::UserId;
use crate::workflows::jobs::domain::JobId;

/// Router builder for the application lifecycle.
pub fn application_router(service: Arc<ApplicationService>) -> Router {
    Router::new()
        .route("/api/v1/applications", post(apply_handler))
        .route("/api/v1/applications/job/:job_id", get(by_job_handler))
        .route(
            "/api/v1/applications/user/:user_id",
            get(by_applicant_handler),
        )
        .route(
            "/api/v1/applications/:application_id/status",
            put(update_status_handler),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct ApplyRequest {
    job_id: JobId,
    applicant_id: UserId,
}

#[derive(Debug, Deserialize)]
struct StatusUpdateRequest {
    status: String,
    #[serde(default)]
    interview: Option<InterviewForm>,
}

fn error_response(error: ApplicationServiceError) -> Response {
    let status = match &error {
        ApplicationServiceError::AlreadyApplied => StatusCode::CONFLICT,
        ApplicationServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

async fn apply_handler(
    State(service): State<Arc<ApplicationService>>,
    Json(request): Json<ApplyRequest>,
) -> Response {
    match service.apply(request.job_id, request.applicant_id) {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn by_job_handler(
    State(service): State<Arc<ApplicationService>>,
    Path(job_id): Path<JobId>,
) -> Response {
    match service.by_job(job_id) {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn by_applicant_handler(
    State(service): State<Arc<ApplicationService>>,
    Path(user_id): Path<UserId>,
) -> Response {
    match service.by_applicant(user_id) {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn update_status_handler(
    State(service): State<Arc<ApplicationService>>,
    Path(application_id): Path<ApplicationId>,
    Json(request): Json<StatusUpdateRequest>,
) -> Response {
    match service.update_status(application_id, &request.status, request.interview) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
