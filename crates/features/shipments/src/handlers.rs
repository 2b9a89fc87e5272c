use crate::ledger::{LedgerVerification, OrderLedger, ShipmentSeal};
use crate::{
    DelayReport, NewShipment, Shipment, ShipmentPatch, ShipmentRegistry, Shipments, StatusPatch,
};
use axum::extract::State;
use sledger_derive::api_handler;
use sledger_domain::constants::SHIPMENTS_TAG;
use sledger_kernel::prelude::*;
use sledger_kernel::server::ErrorBody;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

fn registry(state: &ApiState) -> ApiResult<&ShipmentRegistry> {
    Ok(&state.try_get_slice::<Shipments>()?.registry)
}

#[api_handler(
    post,
    path = "/shipments/create",
    request_body = NewShipment,
    responses((status = OK, description = "Sealed shipment", body = Shipment)),
    tag = SHIPMENTS_TAG,
)]
async fn create_handler(
    State(state): State<ApiState>,
    ApiJson(new): ApiJson<NewShipment>,
) -> ApiResult<ApiJson<Shipment>> {
    Ok(ApiJson(registry(&state)?.create(new)))
}

#[api_handler(
    get,
    path = "/shipments/{shipment_id}",
    params(
        ("shipment_id" = u64, Path, description = "Shipment id"),
        ("user_id" = u64, Query, description = "Requesting user"),
    ),
    responses(
        (status = OK, description = "The shipment", body = Shipment),
        (status = FORBIDDEN, description = "Order belongs to another user", body = ErrorBody),
        (status = NOT_FOUND, description = "Unknown shipment", body = ErrorBody),
    ),
    tag = SHIPMENTS_TAG,
)]
async fn get_handler(
    State(state): State<ApiState>,
    ApiPath(shipment_id): ApiPath<u64>,
    ApiQuery(OwnerQuery { user_id }): ApiQuery<OwnerQuery>,
) -> ApiResult<ApiJson<Shipment>> {
    Ok(ApiJson(registry(&state)?.get(shipment_id, user_id)?))
}

#[api_handler(
    put,
    path = "/shipments/{shipment_id}",
    params(
        ("shipment_id" = u64, Path, description = "Shipment id"),
        ("user_id" = u64, Query, description = "Requesting user"),
    ),
    request_body = ShipmentPatch,
    responses(
        (status = OK, description = "Updated shipment", body = Shipment),
        (status = FORBIDDEN, description = "Order belongs to another user", body = ErrorBody),
        (status = NOT_FOUND, description = "Unknown shipment", body = ErrorBody),
    ),
    tag = SHIPMENTS_TAG,
)]
async fn update_handler(
    State(state): State<ApiState>,
    ApiPath(shipment_id): ApiPath<u64>,
    ApiQuery(OwnerQuery { user_id }): ApiQuery<OwnerQuery>,
    ApiJson(patch): ApiJson<ShipmentPatch>,
) -> ApiResult<ApiJson<Shipment>> {
    Ok(ApiJson(registry(&state)?.update(shipment_id, user_id, patch)?))
}

#[api_handler(
    patch,
    path = "/shipments/{shipment_id}/status",
    params(("shipment_id" = u64, Path, description = "Shipment id")),
    request_body = StatusPatch,
    responses(
        (status = OK, description = "Resealed shipment", body = Shipment),
        (status = NOT_FOUND, description = "Unknown shipment", body = ErrorBody),
    ),
    tag = SHIPMENTS_TAG,
)]
async fn status_handler(
    State(state): State<ApiState>,
    ApiPath(shipment_id): ApiPath<u64>,
    ApiJson(StatusPatch { status }): ApiJson<StatusPatch>,
) -> ApiResult<ApiJson<Shipment>> {
    Ok(ApiJson(registry(&state)?.patch_status(shipment_id, status)?))
}

#[api_handler(
    get,
    path = "/shipments/order/{order_id}",
    params(("order_id" = String, Path, description = "Public order id")),
    responses(
        (status = OK, description = "First shipment of the order", body = Shipment),
        (status = NOT_FOUND, description = "Order has no shipment", body = ErrorBody),
    ),
    tag = SHIPMENTS_TAG,
)]
async fn by_order_handler(
    State(state): State<ApiState>,
    ApiPath(order_id): ApiPath<String>,
) -> ApiResult<ApiJson<Shipment>> {
    Ok(ApiJson(registry(&state)?.by_order(&order_id)?))
}

#[api_handler(
    get,
    path = "/shipments/{shipment_id}/predict-delay",
    params(("shipment_id" = u64, Path, description = "Shipment id")),
    responses(
        (status = OK, description = "Delay breakdown", body = DelayReport),
        (status = BAD_REQUEST, description = "Coordinates unknown", body = ErrorBody),
        (status = NOT_FOUND, description = "Unknown shipment", body = ErrorBody),
    ),
    tag = SHIPMENTS_TAG,
)]
async fn predict_delay_handler(
    State(state): State<ApiState>,
    ApiPath(shipment_id): ApiPath<u64>,
) -> ApiResult<ApiJson<DelayReport>> {
    Ok(ApiJson(registry(&state)?.predict_delay(shipment_id)?))
}

#[api_handler(
    get,
    path = "/shipments/ledger/verify/{shipment_id}",
    params(("shipment_id" = u64, Path, description = "Shipment id")),
    responses(
        (status = OK, description = "Seal check result", body = LedgerVerification),
        (status = NOT_FOUND, description = "Unknown shipment", body = ErrorBody),
    ),
    tag = SHIPMENTS_TAG,
)]
async fn verify_handler(
    State(state): State<ApiState>,
    ApiPath(shipment_id): ApiPath<u64>,
) -> ApiResult<ApiJson<LedgerVerification>> {
    Ok(ApiJson(registry(&state)?.verify(shipment_id)?))
}

#[api_handler(
    get,
    path = "/shipments/ledger/hash/{shipment_id}",
    params(("shipment_id" = u64, Path, description = "Shipment id")),
    responses(
        (status = OK, description = "Seal and sealed fields", body = ShipmentSeal),
        (status = NOT_FOUND, description = "Unknown shipment", body = ErrorBody),
    ),
    tag = SHIPMENTS_TAG,
)]
async fn hash_handler(
    State(state): State<ApiState>,
    ApiPath(shipment_id): ApiPath<u64>,
) -> ApiResult<ApiJson<ShipmentSeal>> {
    Ok(ApiJson(registry(&state)?.seal(shipment_id)?))
}

#[api_handler(
    get,
    path = "/shipments/ledger/all-hashes/{order_id}",
    params(("order_id" = String, Path, description = "Public order id")),
    responses(
        (status = OK, description = "Seals of every shipment of the order", body = OrderLedger),
        (status = NOT_FOUND, description = "Order has no shipments", body = ErrorBody),
    ),
    tag = SHIPMENTS_TAG,
)]
async fn order_ledger_handler(
    State(state): State<ApiState>,
    ApiPath(order_id): ApiPath<String>,
) -> ApiResult<ApiJson<OrderLedger>> {
    Ok(ApiJson(registry(&state)?.order_ledger(&order_id)?))
}

/// `/shipments/*` routes.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(create_handler))
        .routes(routes!(get_handler, update_handler))
        .routes(routes!(status_handler))
        .routes(routes!(by_order_handler))
        .routes(routes!(predict_delay_handler))
        .routes(routes!(verify_handler))
        .routes(routes!(hash_handler))
        .routes(routes!(order_ledger_handler))
}
