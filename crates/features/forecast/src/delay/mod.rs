//! Route delay prediction for stored shipments.
//!
//! The base travel time is scaled by a traffic factor (how much slower the route runs than
//! [`EXPECTED_SPEED_KMH`]) and a weather factor; the summed delay decides the risk band.

mod conditions;
mod geo;

pub use conditions::{ConditionsProvider, EXPECTED_SPEED_KMH, OfflineConditions, Route, Weather};
pub use geo::{GeoPoint, city_coordinates};

use sledger_derive::api_model;
use std::sync::Arc;

const HIGH_DELAY_MIN: f64 = 45.0;
const MEDIUM_DELAY_MIN: f64 = 20.0;

#[api_model(rename_all = "UPPERCASE")]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum DelayRisk {
    Low,
    Medium,
    High,
}

impl DelayRisk {
    /// Bands are exclusive at the bottom: exactly 45 minutes is still `MEDIUM`.
    #[must_use]
    pub fn classify(total_delay_min: f64) -> Self {
        if total_delay_min > HIGH_DELAY_MIN {
            Self::High
        } else if total_delay_min > MEDIUM_DELAY_MIN {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Delay breakdown; every number is rounded to two decimals.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct DelayPrediction {
    pub distance_km: f64,
    pub base_time_min: f64,
    pub traffic_factor: f64,
    pub traffic_delay_min: f64,
    pub weather_factor: f64,
    pub weather_delay_min: f64,
    pub total_delay_min: f64,
    pub risk_level: DelayRisk,
    pub data_source: String,
}

/// Congestion factor from actual versus expected duration.
#[must_use]
pub fn traffic_factor(distance_km: f64, duration_min: f64) -> f64 {
    let expected_min = distance_km / EXPECTED_SPEED_KMH * 60.0;
    let ratio = if expected_min > 0.0 { duration_min / expected_min } else { 1.0 };

    if ratio > 1.5 {
        0.30
    } else if ratio > 1.2 {
        0.15
    } else {
        0.05
    }
}

impl Weather {
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Thunderstorm => 0.30,
            Self::Rain => 0.15,
            Self::Clouds => 0.05,
            Self::Clear => 0.0,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone)]
pub struct DelayPredictor {
    provider: Arc<dyn ConditionsProvider>,
}

impl Default for DelayPredictor {
    fn default() -> Self {
        Self::new(OfflineConditions::default())
    }
}

impl DelayPredictor {
    pub fn new(provider: impl ConditionsProvider + 'static) -> Self {
        Self { provider: Arc::new(provider) }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn predict(&self, from: GeoPoint, to: GeoPoint, destination: &str) -> DelayPrediction {
        let Route { distance_km, duration_min } = self.provider.route(from, to);
        let traffic = traffic_factor(distance_km, duration_min);
        let weather = self.provider.weather(destination).factor();

        let traffic_delay = duration_min * traffic;
        let weather_delay = duration_min * weather;
        let total_delay = traffic_delay + weather_delay;

        DelayPrediction {
            distance_km: round2(distance_km),
            base_time_min: round2(duration_min),
            traffic_factor: round2(traffic),
            traffic_delay_min: round2(traffic_delay),
            weather_factor: round2(weather),
            weather_delay_min: round2(weather_delay),
            total_delay_min: round2(total_delay),
            risk_level: DelayRisk::classify(total_delay),
            data_source: self.provider.source_label().to_owned(),
        }
    }
}
