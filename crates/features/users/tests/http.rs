#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use sledger_domain::config::ApiConfig;
use sledger_kernel::server::ApiState;
use tower::ServiceExt;

fn app() -> Router {
    let state = ApiState::builder()
        .register_slice(sledger_users::init().unwrap())
        .config(ApiConfig::default())
        .build()
        .unwrap();
    sledger_users::router().with_state(state).split_for_parts().0
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    };
    let response = app.clone().oneshot(request.unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn register_then_edit_profile() {
    let app = app();
    let (status, user) = call(
        &app,
        Method::POST,
        "/users/register",
        Some(json!({"email": "ravi@acme.io", "name": "Ravi"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["account_type"], "Standard");
    assert_eq!(user["company_name"], Value::Null);

    let id = user["id"].as_u64().unwrap();
    let (status, updated) = call(
        &app,
        Method::PUT,
        &format!("/users/profile/{id}"),
        Some(json!({"address": "12 Dock Road"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["address"], "12 Dock Road");
    assert_eq!(updated["name"], "Ravi");

    let (status, fetched) = call(&app, Method::GET, &format!("/users/profile/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let app = app();
    let body = json!({"email": "ravi@acme.io", "name": "Ravi"});
    call(&app, Method::POST, "/users/register", Some(body.clone())).await;

    let (status, err) = call(&app, Method::POST, "/users/register", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["detail"], "Email already registered");
}

#[tokio::test]
async fn search_by_email() {
    let app = app();
    call(
        &app,
        Method::POST,
        "/users/register",
        Some(json!({"email": "ravi@acme.io", "name": "Ravi"})),
    )
    .await;

    let (status, user) = call(&app, Method::GET, "/users/search?email=ravi@acme.io", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["name"], "Ravi");

    let (status, err) = call(&app, Method::GET, "/users/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["detail"], "Email parameter required");

    let (status, _) = call(&app, Method::GET, "/users/search?email=nobody@acme.io", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_profile_is_not_found() {
    let (status, err) = call(&app(), Method::GET, "/users/profile/41", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["detail"], "User not found");
}
