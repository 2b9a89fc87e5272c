mod analytics;
mod orders;

use crate::{OrderBook, Orders};
use sledger_kernel::prelude::*;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

fn book(state: &ApiState) -> ApiResult<&OrderBook> {
    Ok(&state.try_get_slice::<Orders>()?.book)
}

/// `/orders/*` and `/analytics/*` routes.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(orders::create_handler))
        .routes(routes!(orders::list_handler))
        .routes(routes!(orders::export_handler))
        .routes(routes!(orders::detail_handler))
        .routes(routes!(orders::update_handler))
        .routes(routes!(orders::cancel_handler))
        .routes(routes!(orders::delete_handler))
        .routes(routes!(orders::stats_handler))
        .routes(routes!(analytics::dashboard_handler))
        .routes(routes!(analytics::user_analytics_handler))
        .routes(routes!(analytics::status_breakdown_handler))
        .routes(routes!(analytics::priority_breakdown_handler))
        .routes(routes!(analytics::destination_breakdown_handler))
        .routes(routes!(analytics::value_metrics_handler))
}
