use super::book;
use crate::export::CSV_FILE_NAME;
use crate::{NewOrder, Order, OrderFilter, OrderPatch, OrderStats};
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use sledger_derive::api_handler;
use sledger_domain::constants::ORDERS_TAG;
use sledger_kernel::prelude::*;
use sledger_kernel::server::ErrorBody;

#[api_handler(
    post,
    path = "/orders/create",
    params(("user_id" = u64, Query, description = "Owner of the new order")),
    request_body = NewOrder,
    responses(
        (status = OK, description = "Order placed", body = Order),
        (status = BAD_REQUEST, description = "Invalid weight", body = ErrorBody),
    ),
    tag = ORDERS_TAG,
)]
pub(super) async fn create_handler(
    State(state): State<ApiState>,
    ApiQuery(OwnerQuery { user_id }): ApiQuery<OwnerQuery>,
    ApiJson(new): ApiJson<NewOrder>,
) -> ApiResult<ApiJson<Order>> {
    Ok(ApiJson(book(&state)?.create(user_id, new)?))
}

#[api_handler(
    get,
    path = "/orders/list/{user_id}",
    params(
        ("user_id" = u64, Path, description = "Owner"),
        ("q" = Option<String>, Query, description = "Substring of order id or destination"),
        ("status" = Option<String>, Query, description = "`all` or comma separated statuses"),
    ),
    responses((status = OK, description = "Orders in creation order", body = Vec<Order>)),
    tag = ORDERS_TAG,
)]
pub(super) async fn list_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
    ApiQuery(filter): ApiQuery<OrderFilter>,
) -> ApiResult<ApiJson<Vec<Order>>> {
    Ok(ApiJson(book(&state)?.list(user_id, &filter)))
}

#[api_handler(
    get,
    path = "/orders/export/{user_id}",
    params(
        ("user_id" = u64, Path, description = "Owner"),
        ("q" = Option<String>, Query, description = "Substring of order id or destination"),
        ("status" = Option<String>, Query, description = "`all` or comma separated statuses"),
    ),
    responses((status = OK, description = "CSV attachment", body = String, content_type = "text/csv")),
    tag = ORDERS_TAG,
)]
pub(super) async fn export_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
    ApiQuery(filter): ApiQuery<OrderFilter>,
) -> ApiResult<impl IntoResponse> {
    let csv = book(&state)?.export_csv(user_id, &filter);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_owned()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{CSV_FILE_NAME}\"")),
        ],
        csv,
    ))
}

#[api_handler(
    get,
    path = "/orders/detail/{order_id}",
    params(
        ("order_id" = String, Path, description = "Public order id"),
        ("user_id" = u64, Query, description = "Requesting user"),
    ),
    responses(
        (status = OK, description = "The order", body = Order),
        (status = FORBIDDEN, description = "Order belongs to another user", body = ErrorBody),
        (status = NOT_FOUND, description = "Unknown order", body = ErrorBody),
    ),
    tag = ORDERS_TAG,
)]
pub(super) async fn detail_handler(
    State(state): State<ApiState>,
    ApiPath(order_id): ApiPath<String>,
    ApiQuery(OwnerQuery { user_id }): ApiQuery<OwnerQuery>,
) -> ApiResult<ApiJson<Order>> {
    Ok(ApiJson(book(&state)?.detail(&order_id, user_id)?))
}

#[api_handler(
    put,
    path = "/orders/update/{order_id}",
    params(
        ("order_id" = String, Path, description = "Public order id"),
        ("user_id" = u64, Query, description = "Requesting user"),
    ),
    request_body = OrderPatch,
    responses(
        (status = OK, description = "Updated order", body = Order),
        (status = FORBIDDEN, description = "Order belongs to another user", body = ErrorBody),
        (status = NOT_FOUND, description = "Unknown order", body = ErrorBody),
    ),
    tag = ORDERS_TAG,
)]
pub(super) async fn update_handler(
    State(state): State<ApiState>,
    ApiPath(order_id): ApiPath<String>,
    ApiQuery(OwnerQuery { user_id }): ApiQuery<OwnerQuery>,
    ApiJson(patch): ApiJson<OrderPatch>,
) -> ApiResult<ApiJson<Order>> {
    Ok(ApiJson(book(&state)?.update(&order_id, user_id, patch)?))
}

#[api_handler(
    put,
    path = "/orders/cancel/{order_id}",
    params(
        ("order_id" = String, Path, description = "Public order id"),
        ("user_id" = u64, Query, description = "Requesting user"),
    ),
    responses(
        (status = OK, description = "Cancelled order", body = Order),
        (status = BAD_REQUEST, description = "Delivered or already cancelled", body = ErrorBody),
        (status = FORBIDDEN, description = "Order belongs to another user", body = ErrorBody),
        (status = NOT_FOUND, description = "Unknown order", body = ErrorBody),
    ),
    tag = ORDERS_TAG,
)]
pub(super) async fn cancel_handler(
    State(state): State<ApiState>,
    ApiPath(order_id): ApiPath<String>,
    ApiQuery(OwnerQuery { user_id }): ApiQuery<OwnerQuery>,
) -> ApiResult<ApiJson<Order>> {
    Ok(ApiJson(book(&state)?.cancel(&order_id, user_id)?))
}

#[api_handler(
    delete,
    path = "/orders/delete/{order_id}",
    params(
        ("order_id" = String, Path, description = "Public order id"),
        ("user_id" = u64, Query, description = "Requesting user"),
    ),
    responses(
        (status = OK, description = "Order removed", body = MessageResponse),
        (status = FORBIDDEN, description = "Order belongs to another user", body = ErrorBody),
        (status = NOT_FOUND, description = "Unknown order", body = ErrorBody),
    ),
    tag = ORDERS_TAG,
)]
pub(super) async fn delete_handler(
    State(state): State<ApiState>,
    ApiPath(order_id): ApiPath<String>,
    ApiQuery(OwnerQuery { user_id }): ApiQuery<OwnerQuery>,
) -> ApiResult<ApiJson<MessageResponse>> {
    book(&state)?.delete(&order_id, user_id)?;
    Ok(ApiJson(MessageResponse::new("Order deleted successfully")))
}

#[api_handler(
    get,
    path = "/orders/stats/{user_id}",
    params(("user_id" = u64, Path, description = "Owner")),
    responses((status = OK, description = "Order counters", body = OrderStats)),
    tag = ORDERS_TAG,
)]
pub(super) async fn stats_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
) -> ApiResult<ApiJson<OrderStats>> {
    Ok(ApiJson(book(&state)?.stats(user_id)))
}
