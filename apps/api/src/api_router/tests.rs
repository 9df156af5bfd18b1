use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::test_support::app_state_with;

use super::build_router;

fn router() -> Router {
    build_router(app_state_with(""), None)
        .unwrap_or_else(|error| panic!("router should build: {error}"))
}

async fn send(uri: &str, principal_id: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(principal_id) = principal_id {
        request = request.header("x-user-id", principal_id);
    }
    let request = request
        .body(Body::empty())
        .unwrap_or_else(|error| panic!("request should build: {error}"));

    let response = router()
        .oneshot(request)
        .await
        .unwrap_or_else(|error| panic!("router is infallible: {error}"));
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_else(|error| panic!("body should be readable: {error}"));
    let value = serde_json::from_slice(&body)
        .unwrap_or_else(|error| panic!("body should be json: {error}"));

    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn percent_encoded_email_is_decoded_before_lookup() {
    let (status, body) = send("/users/email/alice%40example.com?context=edit", Some("7")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ID"], json!(7));
    assert_eq!(body["email"], json!("alice@example.com"));
}

#[tokio::test]
async fn email_route_accepts_slashes_in_key() {
    let (status, body) = send("/users/email/a/b@x", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
}

#[tokio::test]
async fn principal_header_is_resolved_by_route_layer() {
    let (status, body) = send("/users/user/alice", Some("5")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], json!("user_cannot_list"));

    let (status, body) = send("/users/user/alice", Some("1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], json!("alice"));
}

#[tokio::test]
async fn missing_principal_header_is_anonymous() {
    let (status, body) = send("/users/user/alice", None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], json!("user_cannot_list"));
}

#[tokio::test]
async fn non_numeric_principal_header_is_rejected() {
    let (status, body) = send("/users/user/alice", Some("alice")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("rest_invalid_param"));
    assert_eq!(body["status"], json!(400));
}

#[tokio::test]
async fn unknown_path_falls_back_to_no_route() {
    let (status, body) = send("/users/posts/7", Some("1")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!("rest_no_route"));
    assert_eq!(body["status"], json!(404));
}
