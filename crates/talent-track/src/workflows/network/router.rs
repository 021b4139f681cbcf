use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{EngagementNote, LinkId};
use super::service::{NetworkError, NetworkService};
use crate::workflows::directory::domain::UserId;

/// Router builder for the consultant-employer access workflow.
pub fn network_router(service: Arc<NetworkService>) -> Router {
    Router::new()
        .route("/api/v1/consultants", get(search_handler))
        .route("/api/v1/network/requests", post(request_access_handler))
        .route("/api/v1/network/grants", post(grant_access_handler))
        .route(
            "/api/v1/network/requests/:link_id/approve",
            post(approve_handler),
        )
        .route(
            "/api/v1/network/requests/:link_id/reject",
            post(reject_handler),
        )
        .route(
            "/api/v1/network/employers/:employer_id",
            get(employer_network_handler),
        )
        .route(
            "/api/v1/network/consultants/:consultant_id",
            get(consultant_clients_handler),
        )
        .route(
            "/api/v1/network/employers/:employer_id/consultants/:consultant_id",
            delete(remove_handler),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct AccessRequest {
    employer_id: UserId,
    consultant_id: UserId,
    #[serde(default)]
    note: Option<EngagementNote>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    query: String,
}

fn error_response(error: NetworkError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": error.to_string() })),
    )
        .into_response()
}

async fn search_handler(
    State(service): State<Arc<NetworkService>>,
    Query(query): Query<SearchQuery>,
) -> Response {
    match service.search_consultants(&query.query) {
        Ok(results) => (StatusCode::OK, Json(results)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn request_access_handler(
    State(service): State<Arc<NetworkService>>,
    Json(request): Json<AccessRequest>,
) -> Response {
    match service.request_access(request.employer_id, request.consultant_id, request.note) {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(error) => error_response(error),
    }
}

async fn grant_access_handler(
    State(service): State<Arc<NetworkService>>,
    Json(request): Json<AccessRequest>,
) -> Response {
    match service.grant_access(request.employer_id, request.consultant_id, request.note) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn approve_handler(
    State(service): State<Arc<NetworkService>>,
    Path(link_id): Path<LinkId>,
) -> Response {
    match service.approve_request(link_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn reject_handler(
    State(service): State<Arc<NetworkService>>,
    Path(link_id): Path<LinkId>,
) -> Response {
    match service.reject_request(link_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn employer_network_handler(
    State(service): State<Arc<NetworkService>>,
    Path(employer_id): Path<UserId>,
) -> Response {
    match service.employer_network(employer_id) {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn consultant_clients_handler(
    State(service): State<Arc<NetworkService>>,
    Path(consultant_id): Path<UserId>,
) -> Response {
    match service.consultant_clients(consultant_id) {
        Ok(views) => (StatusCode::OK, Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn remove_handler(
    State(service): State<Arc<NetworkService>>,
    Path((employer_id, consultant_id)): Path<(UserId, UserId)>,
) -> Response {
    match service.remove_consultant(employer_id, consultant_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
