//! Delivery forecasting.
//!
//! * [`estimator`]: the rule-based days/risk estimate shown on order screens.
//! * [`tier`]: tone and icon for each risk level.
//! * [`delay`]: route delay prediction for shipments with coordinates.
//!
//! ```rust
//! use sledger_forecast::{RiskLevel, ShipmentDescriptor, estimate};
//!
//! let assessment = estimate(&ShipmentDescriptor::from_form("72", "critical"));
//! assert_eq!(assessment.estimated_days, 3);
//! assert_eq!(assessment.risk_level, RiskLevel::High);
//! ```

pub mod delay;
mod descriptor;
mod error;
pub mod estimator;
#[cfg(feature = "server")]
mod handlers;
pub mod tier;

pub use crate::descriptor::ShipmentDescriptor;
pub use crate::error::{ForecastError, ForecastErrorExt};
pub use crate::estimator::{RiskAssessment, RiskLevel, estimate};
#[cfg(feature = "server")]
pub use crate::handlers::{EstimateResponse, router};

use crate::delay::{DelayPredictor, OfflineConditions, Weather};
use sledger_kernel::domain::config::ApiConfig;
use sledger_kernel::domain::registry::InitializedSlice;

/// Forecast feature state.
#[sledger_derive::sledger_slice]
pub struct Forecast {
    pub predictor: DelayPredictor,
}

impl Forecast {
    /// Offline predictor assuming the configured default weather.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        let weather = Weather::from(config.shipments.default_weather.as_str());
        Self::new(ForecastInner { predictor: DelayPredictor::new(OfflineConditions::new(weather)) })
    }
}

/// Initialize the forecast feature.
///
/// # Errors
/// Never fails today; the signature matches the other slices.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, ForecastError> {
    let slice = Forecast::from_config(config);
    tracing::info!(weather = %config.shipments.default_weather, "Forecast slice initialized");
    Ok(InitializedSlice::new(slice))
}
