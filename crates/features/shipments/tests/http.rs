#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use sledger_domain::config::ApiConfig;
use sledger_forecast::delay::DelayPredictor;
use sledger_kernel::server::ApiState;
use sledger_orders::Orders;
use tower::ServiceExt;

fn app() -> Router {
    let config = ApiConfig::default();
    let orders = sledger_orders::init(&config).unwrap();
    let book = orders.downcast::<Orders>().unwrap().book.clone();
    let shipments = sledger_shipments::init(&config, book, DelayPredictor::default()).unwrap();

    let state = ApiState::builder()
        .register_slices([orders, shipments])
        .config(config)
        .build()
        .unwrap();
    sledger_orders::router()
        .merge(sledger_shipments::router())
        .with_state(state)
        .split_for_parts()
        .0
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

async fn order_with_shipment(app: &Router) -> (String, u64) {
    let (_, order) = call(
        app,
        Method::POST,
        "/orders/create?user_id=1",
        Some(json!({
            "origin": "Mumbai",
            "destination": "Delhi",
            "weight": 2.0,
            "due_date": "2030-03-01T10:00:00"
        })),
    )
    .await;
    let order_id = order["order_id"].as_str().unwrap().to_owned();

    let (status, shipment) = call(
        app,
        Method::POST,
        "/shipments/create",
        Some(json!({
            "order_id": order_id,
            "source": "Mumbai",
            "destination": "Delhi",
            "distance_km": 1400
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{shipment}");
    (order_id, shipment["id"].as_u64().unwrap())
}

#[tokio::test]
async fn shipment_drives_order_status() {
    let app = app();
    let (order_id, id) = order_with_shipment(&app).await;

    let (_, order) = call(&app, Method::GET, &format!("/orders/detail/{order_id}?user_id=1"), None).await;
    assert_eq!(order["status"], "In Transit");

    let (status, shipment) = call(
        &app,
        Method::PUT,
        &format!("/shipments/{id}?user_id=1"),
        Some(json!({"status": "DELIVERED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shipment["status"], "DELIVERED");

    let (_, order) = call(&app, Method::GET, &format!("/orders/detail/{order_id}?user_id=1"), None).await;
    assert_eq!(order["status"], "Delivered");
}

#[tokio::test]
async fn shipment_reads_are_owner_scoped() {
    let app = app();
    let (_, id) = order_with_shipment(&app).await;

    let (status, shipment) = call(&app, Method::GET, &format!("/shipments/{id}?user_id=1"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shipment["source_coords"], json!([72.8479, 19.076]));

    let (status, body) = call(&app, Method::GET, &format!("/shipments/{id}?user_id=2"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["detail"], "Unauthorized - Shipment belongs to another user");

    let (status, body) = call(&app, Method::GET, "/shipments/404?user_id=1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Shipment not found");
}

#[tokio::test]
async fn ledger_endpoints() {
    let app = app();
    let (order_id, id) = order_with_shipment(&app).await;

    let (status, report) = call(&app, Method::GET, &format!("/shipments/ledger/verify/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["valid"], true);
    assert_eq!(report["tampered"], false);

    let (_, patched) = call(
        &app,
        Method::PATCH,
        &format!("/shipments/{id}/status"),
        Some(json!({"status": "PICKED_UP"})),
    )
    .await;
    assert_eq!(patched["status"], "PICKED_UP");

    let (_, seal) = call(&app, Method::GET, &format!("/shipments/ledger/hash/{id}"), None).await;
    assert_eq!(seal["blockchain_hash"], patched["blockchain_hash"]);

    let (status, ledger) =
        call(&app, Method::GET, &format!("/shipments/ledger/all-hashes/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ledger["total_shipments"], 1);

    let (status, _) = call(&app, Method::GET, "/shipments/ledger/all-hashes/ORD-NONE0000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lookup_by_order_and_delay_prediction() {
    let app = app();
    let (order_id, id) = order_with_shipment(&app).await;

    let (status, shipment) =
        call(&app, Method::GET, &format!("/shipments/order/{order_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shipment["id"], id);

    let (status, report) =
        call(&app, Method::GET, &format!("/shipments/{id}/predict-delay"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["prediction"]["risk_level"], "HIGH");
    assert_eq!(report["order_id"], order_id);
}

#[tokio::test]
async fn unknown_status_is_unprocessable() {
    let app = app();
    let (_, id) = order_with_shipment(&app).await;

    let (status, body) = call(
        &app,
        Method::PATCH,
        &format!("/shipments/{id}/status"),
        Some(json!({"status": "LOST"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}
