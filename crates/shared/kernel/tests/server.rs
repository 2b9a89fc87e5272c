#![cfg(feature = "server")]

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use sledger_domain::config::ApiConfig;
use sledger_domain::registry::InitializedSlice;
use sledger_kernel::prelude::*;
use sledger_kernel::server::router::system_router;
use tower::ServiceExt;

#[derive(Debug)]
struct Probe(u8);

impl sledger_domain::registry::FeatureSlice for Probe {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[test]
fn state_requires_config() {
    assert!(ApiState::builder().build().is_err());
}

#[test]
fn slices_are_fetched_by_type() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(Probe(9)))
        .build()
        .expect("state");

    assert_eq!(state.try_get_slice::<Probe>().expect("registered").0, 9);
    assert_eq!(state.slice_names().count(), 1);
}

#[tokio::test]
async fn missing_slice_renders_internal_error() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state");
    let err: ApiError = state.try_get_slice::<Probe>().unwrap_err().into();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(body["detail"].as_str().unwrap_or_default().contains("Probe"));
}

#[tokio::test]
async fn health_and_root_respond() {
    let (router, _) = system_router::<()>().split_for_parts();

    let response = router
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["pragma"], "no-cache");
    assert_eq!(body_json(response).await["status"], "up");

    let response = router.oneshot(Request::get("/").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(body_json(response).await["message"], "SupplyLedger backend is running");
}

#[tokio::test]
async fn malformed_json_is_a_detail_body() {
    #[derive(serde::Deserialize)]
    struct Input {
        #[allow(dead_code)]
        weight: f64,
    }

    async fn echo(ApiJson(_input): ApiJson<Input>) -> StatusCode {
        StatusCode::NO_CONTENT
    }

    let router = axum::Router::new().route("/echo", post(echo));
    let response = router
        .oneshot(
            Request::post("/echo")
                .header("content-type", "application/json")
                .body(Body::from("{\"weight\": \"heavy\"}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(response).await["detail"].is_string());
}
