use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use super::service::{ModerationError, ModerationService};
use crate::workflows::directory::domain::{CompanyId, UserId};

/// Router builder for admin moderation.
pub fn moderation_router(service: Arc<ModerationService>) -> Router {
    Router::new()
        .route("/api/v1/admin/users", get(users_handler))
        .route("/api/v1/admin/users/:user_id/block", post(block_user_handler))
        .route(
            "/api/v1/admin/users/:user_id/unblock",
            post(unblock_user_handler),
        )
        .route("/api/v1/admin/users/:user_id", delete(delete_user_handler))
        .route("/api/v1/admin/companies", get(companies_handler))
        .route(
            "/api/v1/admin/companies/:company_id/block",
            post(block_company_handler),
        )
        .route(
            "/api/v1/admin/companies/:company_id/unblock",
            post(unblock_company_handler),
        )
        .route(
            "/api/v1/admin/companies/:company_id",
            delete(delete_company_handler),
        )
        .route("/api/v1/admin/stats", get(stats_handler))
        .with_state(service)
}

fn error_response(error: ModerationError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": error.to_string() })),
    )
        .into_response()
}

fn no_content(result: Result<(), ModerationError>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn users_handler(State(service): State<Arc<ModerationService>>) -> Response {
    match service.users() {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn block_user_handler(
    State(service): State<Arc<ModerationService>>,
    Path(user_id): Path<UserId>,
) -> Response {
    no_content(service.block_user(user_id))
}

async fn unblock_user_handler(
    State(service): State<Arc<ModerationService>>,
    Path(user_id): Path<UserId>,
) -> Response {
    no_content(service.unblock_user(user_id))
}

async fn delete_user_handler(
    State(service): State<Arc<ModerationService>>,
    Path(user_id): Path<UserId>,
) -> Response {
    no_content(service.delete_user(user_id))
}

async fn companies_handler(State(service): State<Arc<ModerationService>>) -> Response {
    match service.companies() {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn block_company_handler(
    State(service): State<Arc<ModerationService>>,
    Path(company_id): Path<CompanyId>,
) -> Response {
    no_content(service.block_company(company_id))
}

async fn unblock_company_handler(
    State(service): State<Arc<ModerationService>>,
    Path(company_id): Path<CompanyId>,
) -> Response {
    no_content(service.unblock_company(company_id))
}

async fn delete_company_handler(
    State(service): State<Arc<ModerationService>>,
    Path(company_id): Path<CompanyId>,
) -> Response {
    no_content(service.delete_company(company_id))
}

async fn stats_handler(State(service): State<Arc<ModerationService>>) -> Response {
    match service.platform_stats() {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(error) => error_response(error),
    }
}
