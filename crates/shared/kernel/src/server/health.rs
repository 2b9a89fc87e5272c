use axum::Json;
use axum::http::header;
use axum::response::IntoResponse;
use super::MessageResponse;
use sledger_derive::{api_handler, api_model};
use sledger_domain::constants::{SERVICE_NAME, SYSTEM_TAG};
use std::sync::LazyLock;
use std::time::Instant;

/// Liveness report.
#[api_model]
pub struct HealthResponse {
    /// Always `up` while the process serves requests.
    pub status: String,
    pub service: String,
    pub version: String,
    /// Seconds since the system router was built.
    pub uptime: u64,
}

pub(super) static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

#[api_handler(
    get,
    path = "/health",
    responses((status = OK, description = "Service is alive", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let body = HealthResponse {
        status: "up".to_owned(),
        service: SERVICE_NAME.to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}

#[api_handler(
    get,
    path = "/",
    responses((status = OK, description = "Service banner", body = MessageResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("{SERVICE_NAME} backend is running")))
}
