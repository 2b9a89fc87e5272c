use chrono::{DateTime, Utc};
use sledger_derive::api_model;
use sledger_domain::vocabulary::ShipmentStatus;
use sledger_forecast::delay::{DelayPrediction, GeoPoint};
use sledger_kernel::time;

/// A physical movement of (part of) an order.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct Shipment {
    pub id: u64,
    pub order_id: String,
    pub source: String,
    pub destination: String,
    /// `[longitude, latitude]`.
    #[cfg_attr(feature = "server", schema(value_type = Option<Vec<f64>>))]
    pub source_coords: Option<GeoPoint>,
    #[cfg_attr(feature = "server", schema(value_type = Option<Vec<f64>>))]
    pub dest_coords: Option<GeoPoint>,
    pub distance_km: u32,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "IN_TRANSIT"))]
    pub status: ShipmentStatus,
    /// Hex SHA-256 ledger seal over the sealed fields.
    pub blockchain_hash: String,
    /// Instant the current seal was computed; part of the sealed data.
    pub sealed_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Shipment creation request; coordinates fall back to the city table.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct NewShipment {
    pub order_id: String,
    pub source: String,
    pub destination: String,
    pub distance_km: u32,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<Vec<f64>>))]
    pub source_coords: Option<GeoPoint>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<Vec<f64>>))]
    pub dest_coords: Option<GeoPoint>,
}

#[api_model]
#[derive(Clone, PartialEq, Default)]
pub struct ShipmentPatch {
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub status: Option<ShipmentStatus>,
    #[serde(default, deserialize_with = "time::lenient_opt")]
    pub estimated_delivery: Option<DateTime<Utc>>,
}

#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StatusPatch {
    #[cfg_attr(feature = "server", schema(value_type = String, example = "DELIVERED"))]
    pub status: ShipmentStatus,
}

/// Delay prediction with the shipment it was computed for.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct DelayReport {
    pub shipment_id: u64,
    pub order_id: String,
    pub source: String,
    pub destination: String,
    pub prediction: DelayPrediction,
    pub estimated_delivery: DateTime<Utc>,
}
