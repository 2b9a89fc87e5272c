use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use sledger::domain::config::{ApiConfig, SslConfig};
use sledger_server::Server;
use tower::ServiceExt;

fn app_with(config: ApiConfig) -> Router {
    let server = Server::builder().config(config).build().unwrap();
    sledger_server::app(server.state().clone())
}

fn app() -> Router {
    app_with(ApiConfig::default())
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
async fn banner_and_health() {
    let app = app();
    let (status, body) = call(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "SupplyLedger backend is running");

    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
}

#[tokio::test]
async fn end_to_end_order_flow() {
    let app = app();

    let (status, user) = call(
        &app,
        Method::POST,
        "/users/register",
        Some(json!({"email": "meera@acme.io", "name": "Meera"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let user_id = user["id"].as_u64().unwrap();

    let (status, risk) = call(
        &app,
        Method::POST,
        "/forecast/estimate",
        Some(json!({"priority": "critical", "weight": 10.0, "shipment_type": "international"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(risk["estimated_days"], 5);

    let (status, order) = call(
        &app,
        Method::POST,
        &format!("/orders/create?user_id={user_id}"),
        Some(json!({
            "origin": "Bangalore",
            "destination": "Chennai",
            "weight": 10.0,
            "priority": "critical",
            "due_date": "2031-06-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{order}");
    let order_id = order["order_id"].as_str().unwrap();

    let (status, shipment) = call(
        &app,
        Method::POST,
        "/shipments/create",
        Some(json!({
            "order_id": order_id,
            "source": "Bangalore",
            "destination": "Chennai",
            "distance_km": 350
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let shipment_id = shipment["id"].as_u64().unwrap();

    let (_, stats) = call(&app, Method::GET, &format!("/orders/stats/{user_id}"), None).await;
    assert_eq!(stats["in_transit"], 1);

    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("/shipments/{shipment_id}?user_id={user_id}"),
        Some(json!({"status": "DELIVERED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, dashboard) =
        call(&app, Method::GET, &format!("/analytics/dashboard/{user_id}"), None).await;
    assert_eq!(dashboard["delivered"], 1);

    let (_, verification) = call(
        &app,
        Method::GET,
        &format!("/shipments/ledger/verify/{shipment_id}"),
        None,
    )
    .await;
    assert_eq!(verification["valid"], true);
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/orders/create?user_id=1")
        .header(header::ORIGIN, "https://app.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn configured_origins_are_enforced() {
    let mut config = ApiConfig::default();
    config.cors.allow_origins = vec!["https://app.example.com".to_owned()];
    let app = app_with(config);

    let request = |origin: &str| {
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app.clone().oneshot(request("https://app.example.com")).await.unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example.com"
    );

    let denied = app.oneshot(request("https://evil.example.com")).await.unwrap();
    assert!(!denied.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn openapi_reference_is_served() {
    let request = Request::builder().uri("/api").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[test]
fn missing_certificate_fails_build() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ApiConfig::default();
    config.server.ssl = Some(SslConfig {
        cert: dir.path().join("cert.pem"),
        key: dir.path().join("key.pem"),
    });

    let err = Server::builder().config(config).build().unwrap_err();
    assert!(err.to_string().contains("SSL certificate not found"));
}
