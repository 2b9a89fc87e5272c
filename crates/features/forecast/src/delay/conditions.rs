use super::geo::GeoPoint;
use std::fmt::Debug;

/// Assumed road speed in km/h.
pub const EXPECTED_SPEED_KMH: f64 = 60.0;

/// Distance and travel time between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Route {
    pub distance_km: f64,
    pub duration_min: f64,
}

/// Weather at the destination, reduced to the conditions that slow deliveries down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weather {
    Thunderstorm,
    Rain,
    Clouds,
    #[default]
    Clear,
}

impl From<&str> for Weather {
    /// Condition names as weather services report them; anything unrecognized is `Clear`.
    fn from(raw: &str) -> Self {
        match raw.trim() {
            "Thunderstorm" => Self::Thunderstorm,
            "Rain" => Self::Rain,
            "Clouds" => Self::Clouds,
            _ => Self::Clear,
        }
    }
}

/// Source of route and weather data for the delay predictor.
pub trait ConditionsProvider: Debug + Send + Sync {
    fn route(&self, from: GeoPoint, to: GeoPoint) -> Route;

    fn weather(&self, city: &str) -> Weather;

    /// Label reported alongside predictions.
    fn source_label(&self) -> &'static str;
}

/// Network-free provider: great-circle routes at [`EXPECTED_SPEED_KMH`] and a fixed weather.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineConditions {
    weather: Weather,
}

impl OfflineConditions {
    #[must_use]
    pub const fn new(weather: Weather) -> Self {
        Self { weather }
    }
}

impl ConditionsProvider for OfflineConditions {
    fn route(&self, from: GeoPoint, to: GeoPoint) -> Route {
        let distance_km = from.haversine_km(to);
        Route { distance_km, duration_min: distance_km / EXPECTED_SPEED_KMH * 60.0 }
    }

    fn weather(&self, _city: &str) -> Weather {
        self.weather
    }

    fn source_label(&self) -> &'static str {
        "Offline (great-circle route + configured weather)"
    }
}
