use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::workflows::directory::domain::UserRole;
use crate::workflows::jobs::router::job_router;

async fn read_json_body(response: axum::response::Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

#[tokio::test]
async fn consultant_posting_without_employer_is_unprocessable() {
    let (service, store) = build_service();
    let consultant = add_user(store.as_ref(), "Cid", UserRole::Consultant, None);
    let router = job_router(Arc::new(service));

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/jobs")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({
                "posted_by": consultant.id,
                "title": "Dev",
            }))
            .expect("serialize request"),
        ))
        .expect("request");

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("Employer is required for consultant job posting"),
    );
}

#[tokio::test]
async fn missing_job_is_not_found() {
    let (service, _) = build_service();
    let router = job_router(Arc::new(service));

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/jobs/42")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn closing_a_foreign_job_is_forbidden() {
    let (service, store) = build_service();
    let employer = add_user(store.as_ref(), "Bea", UserRole::Employer, None);
    let other = add_user(store.as_ref(), "Mallory", UserRole::Employer, None);
    let job = add_open_job(store.as_ref(), "Dev", &["React"], employer.id, 0);
    let router = job_router(Arc::new(service));

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/v1/jobs/{}/close", job.id))
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({ "user_id": other.id })).expect("serialize"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn posting_returns_resolved_view() {
    let (service, store) = build_service();
    let company = add_company(store.as_ref(), "Acme");
    let employer = add_user(store.as_ref(), "Bea", UserRole::Employer, Some(company.id));
    let router = job_router(Arc::new(service));

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/jobs")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&json!({
                "posted_by": employer.id,
                "company_id": company.id,
                "title": "Dev",
                "skills": ["React", "Node"],
            }))
            .expect("serialize request"),
        ))
        .expect("request");

    let response = router.oneshot(request).await.expect("router dispatch");
    assert_eq!(response.status(), StatusCode::CREATED);

    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("company_name").and_then(Value::as_str),
        Some("Acme")
    );
    assert_eq!(
        payload.get("posted_by_name").and_then(Value::as_str),
        Some("Bea")
    );
    assert_eq!(payload.get("status").and_then(Value::as_str), Some("open"));
}
