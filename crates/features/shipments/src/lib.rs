//! Shipments feature slice.
//!
//! Tracks shipments against orders, keeps a SHA-256 integrity seal per shipment (see
//! [`ledger`]) and predicts route delays. Shipment progress is pushed into the shared
//! [`OrderBook`](sledger_orders::OrderBook): creation moves the order `In Transit`, a
//! `DELIVERED` update delivers it.

#[cfg(feature = "server")]
mod handlers;
pub mod ledger;
mod error;
mod model;
mod registry;

pub use crate::error::{ShipmentsError, ShipmentsErrorExt};
#[cfg(feature = "server")]
pub use crate::handlers::router;
pub use crate::model::{DelayReport, NewShipment, Shipment, ShipmentPatch, StatusPatch};
pub use crate::registry::ShipmentRegistry;

use sledger_forecast::delay::DelayPredictor;
use sledger_kernel::domain::config::ApiConfig;
use sledger_kernel::domain::registry::InitializedSlice;
use sledger_orders::OrderBook;

/// Shipments feature state.
#[sledger_derive::sledger_slice]
pub struct Shipments {
    pub registry: ShipmentRegistry,
}

/// Initialize the shipments feature over the shared order book.
///
/// # Errors
/// Returns [`ShipmentsError::Internal`] when the configured transit time is zero.
pub fn init(
    config: &ApiConfig,
    orders: OrderBook,
    predictor: DelayPredictor,
) -> Result<InitializedSlice, ShipmentsError> {
    let transit_days = config.shipments.default_transit_days;
    if transit_days == 0 {
        return Err("shipments.default_transit_days must be at least one day".into());
    }

    let registry = ShipmentRegistry::new(orders, predictor, transit_days);
    tracing::info!(transit_days, "Shipments slice initialized");
    Ok(InitializedSlice::new(Shipments::new(ShipmentsInner { registry })))
}
