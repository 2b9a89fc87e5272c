use axum::Router;
use axum::http::HeaderValue;
use sledger::domain::config::CorsConfig;
use sledger::features::{forecast, orders, shipments, users};
use sledger::kernel::prelude::ApiState;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "SupplyLedger API"))]
struct ApiDoc;

/// Full application router: system routes, every feature slice and the Scalar reference.
pub fn init(state: ApiState) -> Router {
    let cors = cors_layer(&state.config.cors);

    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(sledger::server::router::system_router())
        .merge(forecast::router())
        .merge(users::router())
        .merge(orders::router())
        .merge(shipments::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new().merge(openapi_routes).merge(scalar_routes)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if cors.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = cors
        .allow_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring malformed CORS origin");
                None
            },
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
