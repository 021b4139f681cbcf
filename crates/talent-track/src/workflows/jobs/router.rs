use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{JobDraft, JobId};
use super::service::{JobService, JobServiceError};
use crate::workflows::directory::domain::{CompanyId, UserId};

/// Router builder for posting, browsing, and closing jobs.
pub fn job_router(service: Arc<JobService>) -> Router {
    Router::new()
        .route("/api/v1/jobs", post(post_job_handler).get(list_jobs_handler))
        .route(
            "/api/v1/jobs/recommended/:user_id",
            get(recommended_handler),
        )
        .route("/api/v1/jobs/company/:company_id", get(by_company_handler))
        .route(
            "/api/v1/jobs/consultant/:consultant_id",
            get(by_consultant_handler),
        )
        .route("/api/v1/jobs/:job_id", get(job_handler))
        .route("/api/v1/jobs/:job_id/close", post(close_job_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct PostJobRequest {
    posted_by: UserId,
    #[serde(default)]
    company_id: Option<CompanyId>,
    #[serde(flatten)]
    draft: JobDraft,
}

#[derive(Debug, Deserialize)]
struct CloseJobRequest {
    user_id: UserId,
}

#[derive(Debug, Deserialize)]
struct ViewerQuery {
    #[serde(default)]
    viewer: Option<UserId>,
}

fn error_response(error: JobServiceError) -> Response {
    let status = match &error {
        JobServiceError::PosterNotFound | JobServiceError::JobNotFound => StatusCode::NOT_FOUND,
        JobServiceError::EmployerRequired | JobServiceError::InvalidEmployer => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        JobServiceError::NotPoster => StatusCode::FORBIDDEN,
        JobServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

async fn post_job_handler(
    State(service): State<Arc<JobService>>,
    Json(request): Json<PostJobRequest>,
) -> Response {
    match service.post_job(request.draft, request.posted_by, request.company_id) {
        Ok(view) => (StatusCode::CREATED, Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn list_jobs_handler(
    State(service): State<Arc<JobService>>,
    Query(query): Query<ViewerQuery>,
) -> Response {
    match service.all_jobs(query.viewer) {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn job_handler(
    State(service): State<Arc<JobService>>,
    Path(job_id): Path<JobId>,
) -> Response {
    match service.job(job_id) {
        Ok(Some(view)) => (StatusCode::OK, Json(view)).into_response(),
        Ok(None) => error_response(JobServiceError::JobNotFound),
        Err(error) => error_response(error),
    }
}

async fn by_company_handler(
    State(service): State<Arc<JobService>>,
    Path(company_id): Path<CompanyId>,
) -> Response {
    match service.by_company(company_id) {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn by_consultant_handler(
    State(service): State<Arc<JobService>>,
    Path(consultant_id): Path<UserId>,
) -> Response {
    match service.by_consultant(consultant_id) {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn recommended_handler(
    State(service): State<Arc<JobService>>,
    Path(user_id): Path<UserId>,
) -> Response {
    match service.recommended_jobs(user_id) {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn close_job_handler(
    State(service): State<Arc<JobService>>,
    Path(job_id): Path<JobId>,
    Json(request): Json<CloseJobRequest>,
) -> Response {
    match service.close_job(job_id, request.user_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
