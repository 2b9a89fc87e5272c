use sledger_derive::api_model;
use sledger_domain::vocabulary::{OrderStatus, Priority};
use chrono::{DateTime, Utc};
use sledger_kernel::time;

/// A customer order.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct Order {
    pub id: u64,
    /// Public identifier, `ORD-` plus eight characters.
    pub order_id: String,
    pub user_id: u64,
    pub origin: String,
    pub destination: String,
    /// Kilograms.
    pub weight: f64,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "medium"))]
    pub priority: Priority,
    #[cfg_attr(feature = "server", schema(value_type = String, example = "Pending"))]
    pub status: OrderStatus,
    pub due_date: DateTime<Utc>,
    /// Declared value: weight times the configured price per kilogram.
    pub value: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order creation form.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct NewOrder {
    pub origin: String,
    pub destination: String,
    pub weight: f64,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "medium"))]
    pub priority: Priority,
    #[serde(deserialize_with = "time::lenient")]
    pub due_date: DateTime<Utc>,
}

/// Partial update; absent fields stay as they are.
#[api_model]
#[derive(Clone, PartialEq, Default)]
pub struct OrderPatch {
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "time::lenient_opt")]
    pub due_date: Option<DateTime<Utc>>,
}

/// Per-user counters returned by `/orders/stats`.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct OrderStats {
    pub total_orders: usize,
    pub delivered: usize,
    pub in_transit: usize,
    pub pending: usize,
    pub total_value: f64,
    pub average_value: f64,
}

/// Stored per-user snapshot, rewritten after every order mutation.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct OrderAnalytics {
    pub id: u64,
    pub user_id: u64,
    pub total_orders: usize,
    pub completed_orders: usize,
    pub in_transit_orders: usize,
    pub pending_orders: usize,
    pub cancelled_orders: usize,
    pub total_shipment_value: f64,
    pub average_order_value: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
