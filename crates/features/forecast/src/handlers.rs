use crate::error::ForecastError;
use crate::estimator::{RiskLevel, estimate};
use crate::{ShipmentDescriptor, tier::Tier};
use sledger_derive::{api_handler, api_model};
use sledger_domain::constants::FORECAST_TAG;
use sledger_kernel::prelude::*;
use sledger_kernel::server::ErrorBody;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Estimate plus how to render it.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct EstimateResponse {
    pub estimated_days: u32,
    pub risk_level: RiskLevel,
    pub tier: Tier,
}

#[api_handler(
    post,
    path = "/forecast/estimate",
    request_body = ShipmentDescriptor,
    responses(
        (status = OK, description = "Delivery estimate", body = EstimateResponse),
        (status = BAD_REQUEST, description = "Negative or non-finite weight", body = ErrorBody),
    ),
    tag = FORECAST_TAG,
)]
pub(crate) async fn estimate_handler(
    ApiJson(descriptor): ApiJson<ShipmentDescriptor>,
) -> ApiResult<ApiJson<EstimateResponse>> {
    if !descriptor.weight.is_finite() || descriptor.weight < 0.0 {
        return Err(ForecastError::InvalidDescriptor {
            message: "Weight must be a non-negative number".into(),
            context: None,
        }
        .into());
    }

    let assessment = estimate(&descriptor);
    tracing::debug!(
        priority = %descriptor.priority,
        weight = descriptor.weight,
        days = assessment.estimated_days,
        "Estimated delivery"
    );

    Ok(ApiJson(EstimateResponse {
        estimated_days: assessment.estimated_days,
        risk_level: assessment.risk_level,
        tier: assessment.risk_level.tier(),
    }))
}

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(estimate_handler))
}
