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

use super::domain::{
    ChangePasswordRequest, LoginRequest, ProfileUpdate, RegistrationRequest, UserId,
};
use super::service::{AccountError, AccountService};

/// Router builder for registration, login, and profile management.
pub fn account_router(service: Arc<AccountService>) -> Router {
    Router::new()
        .route("/api/v1/auth/register", post(register_handler))
        .route("/api/v1/auth/login", post(login_handler))
        .route("/api/v1/auth/change-password", post(change_password_handler))
        .route("/api/v1/users/employers", get(employers_handler))
        .route("/api/v1/users/:user_id", get(user_handler))
        .route("/api/v1/users/:user_id/profile", put(profile_handler))
        .route(
            "/api/v1/users/:user_id/completeness",
            get(completeness_handler),
        )
        .route("/api/v1/users/:user_id/resume", put(resume_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct ResumeUpload {
    file_name: String,
}

fn error_response(error: AccountError) -> Response {
    let status = match &error {
        AccountError::InvalidCredentials | AccountError::RoleMismatch => StatusCode::UNAUTHORIZED,
        AccountError::AccountBlocked => StatusCode::FORBIDDEN,
        AccountError::DuplicateIdentity => StatusCode::CONFLICT,
        AccountError::UnknownRole(_) | AccountError::InvalidOldPassword => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        AccountError::UserNotFound => StatusCode::NOT_FOUND,
        AccountError::Password(_) | AccountError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

async fn register_handler(
    State(service): State<Arc<AccountService>>,
    Json(request): Json<RegistrationRequest>,
) -> Response {
    match service.register(request) {
        Ok(session) => (StatusCode::CREATED, Json(session)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn login_handler(
    State(service): State<Arc<AccountService>>,
    Json(request): Json<LoginRequest>,
) -> Response {
    match service.login(request) {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(error) => error_response(error),
    }
}

async fn change_password_handler(
    State(service): State<Arc<AccountService>>,
    Json(request): Json<ChangePasswordRequest>,
) -> Response {
    match service.change_password(request) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn user_handler(
    State(service): State<Arc<AccountService>>,
    Path(user_id): Path<UserId>,
) -> Response {
    match service.user(user_id) {
        Ok(Some(account)) => (StatusCode::OK, Json(account)).into_response(),
        Ok(None) => error_response(AccountError::UserNotFound),
        Err(error) => error_response(error),
    }
}

async fn profile_handler(
    State(service): State<Arc<AccountService>>,
    Path(user_id): Path<UserId>,
    Json(update): Json<ProfileUpdate>,
) -> Response {
    match service.update_profile(user_id, update) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

async fn completeness_handler(
    State(service): State<Arc<AccountService>>,
    Path(user_id): Path<UserId>,
) -> Response {
    match service.profile_completeness(user_id) {
        Ok(percent) => (StatusCode::OK, Json(json!({ "completeness": percent }))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn resume_handler(
    State(service): State<Arc<AccountService>>,
    Path(user_id): Path<UserId>,
    Json(upload): Json<ResumeUpload>,
) -> Response {
    match service.store_resume(user_id, &upload.file_name) {
        Ok(reference) => (StatusCode::OK, Json(json!({ "resume_ref": reference }))).into_response(),
        Err(error) => error_response(error),
    }
}

async fn employers_handler(State(service): State<Arc<AccountService>>) -> Response {
    match service.employers() {
        Ok(employers) => (StatusCode::OK, Json(employers)).into_response(),
        Err(error) => error_response(error),
    }
}
