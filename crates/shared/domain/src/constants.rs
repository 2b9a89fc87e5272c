//! OpenAPI tags and fixed strings shared across slices.

pub const SYSTEM_TAG: &str = "System";
pub const FORECAST_TAG: &str = "Forecast";
pub const ORDERS_TAG: &str = "Orders";
pub const ANALYTICS_TAG: &str = "Analytics";
pub const SHIPMENTS_TAG: &str = "Shipments";
pub const USERS_TAG: &str = "Users";

pub const SERVICE_NAME: &str = "SupplyLedger";

/// Prefix of every public order identifier (`ORD-7KQ2M9XA`).
pub const ORDER_ID_PREFIX: &str = "ORD-";
/// Random characters following [`ORDER_ID_PREFIX`].
pub const ORDER_ID_LEN: usize = 8;

/// Account tier assigned at registration.
pub const DEFAULT_ACCOUNT_TYPE: &str = "Standard";
