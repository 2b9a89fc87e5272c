use super::book;
use crate::{
    DashboardStats, DestinationBreakdown, OrderAnalytics, PriorityBreakdown, StatusBreakdown,
    ValueMetrics,
};
use axum::extract::State;
use sledger_derive::api_handler;
use sledger_domain::constants::ANALYTICS_TAG;
use sledger_kernel::prelude::*;
use sledger_kernel::server::ErrorBody;

#[api_handler(
    get,
    path = "/analytics/dashboard/{user_id}",
    params(("user_id" = u64, Path, description = "Owner")),
    responses((status = OK, description = "Dashboard counters", body = DashboardStats)),
    tag = ANALYTICS_TAG,
)]
pub(super) async fn dashboard_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
) -> ApiResult<ApiJson<DashboardStats>> {
    Ok(ApiJson(book(&state)?.dashboard(user_id)))
}

#[api_handler(
    get,
    path = "/analytics/user-analytics/{user_id}",
    params(("user_id" = u64, Path, description = "Owner")),
    responses(
        (status = OK, description = "Stored analytics snapshot", body = OrderAnalytics),
        (status = NOT_FOUND, description = "No order activity yet", body = ErrorBody),
    ),
    tag = ANALYTICS_TAG,
)]
pub(super) async fn user_analytics_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
) -> ApiResult<ApiJson<OrderAnalytics>> {
    Ok(ApiJson(book(&state)?.user_analytics(user_id)?))
}

#[api_handler(
    get,
    path = "/analytics/order-status-breakdown/{user_id}",
    params(("user_id" = u64, Path, description = "Owner")),
    responses((status = OK, description = "Orders per status", body = StatusBreakdown)),
    tag = ANALYTICS_TAG,
)]
pub(super) async fn status_breakdown_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
) -> ApiResult<ApiJson<StatusBreakdown>> {
    Ok(ApiJson(book(&state)?.status_breakdown(user_id)))
}

#[api_handler(
    get,
    path = "/analytics/priority-breakdown/{user_id}",
    params(("user_id" = u64, Path, description = "Owner")),
    responses((status = OK, description = "Orders per priority", body = PriorityBreakdown)),
    tag = ANALYTICS_TAG,
)]
pub(super) async fn priority_breakdown_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
) -> ApiResult<ApiJson<PriorityBreakdown>> {
    Ok(ApiJson(book(&state)?.priority_breakdown(user_id)))
}

#[api_handler(
    get,
    path = "/analytics/destination-breakdown/{user_id}",
    params(("user_id" = u64, Path, description = "Owner")),
    responses((status = OK, description = "Busiest destinations", body = DestinationBreakdown)),
    tag = ANALYTICS_TAG,
)]
pub(super) async fn destination_breakdown_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
) -> ApiResult<ApiJson<DestinationBreakdown>> {
    Ok(ApiJson(book(&state)?.destination_breakdown(user_id)))
}

#[api_handler(
    get,
    path = "/analytics/value-metrics/{user_id}",
    params(("user_id" = u64, Path, description = "Owner")),
    responses((status = OK, description = "Order value totals", body = ValueMetrics)),
    tag = ANALYTICS_TAG,
)]
pub(super) async fn value_metrics_handler(
    State(state): State<ApiState>,
    ApiPath(user_id): ApiPath<u64>,
) -> ApiResult<ApiJson<ValueMetrics>> {
    Ok(ApiJson(book(&state)?.value_metrics(user_id)))
}
