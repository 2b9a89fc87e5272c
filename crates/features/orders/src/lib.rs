//! Orders feature slice.
//!
//! Owns the [`OrderBook`]: order lifecycle (create, update, cancel, delete), filtered listing,
//! CSV export and the per-user analytics served under `/analytics`. The shipments slice holds a
//! clone of the same book to propagate shipment progress into order status.

mod analytics;
mod book;
mod error;
pub mod export;
mod filter;
#[cfg(feature = "server")]
mod handlers;
mod model;

pub use crate::analytics::{
    DashboardStats, DestinationBreakdown, DestinationCount, PriorityBreakdown, StatusBreakdown,
    ValueMetrics,
};
pub use crate::book::OrderBook;
pub use crate::error::{OrdersError, OrdersErrorExt};
pub use crate::filter::OrderFilter;
#[cfg(feature = "server")]
pub use crate::handlers::router;
pub use crate::model::{NewOrder, Order, OrderAnalytics, OrderPatch, OrderStats};

use sledger_kernel::domain::config::ApiConfig;
use sledger_kernel::domain::registry::InitializedSlice;

/// Orders feature state.
#[sledger_derive::sledger_slice]
pub struct Orders {
    pub book: OrderBook,
}

impl Orders {
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(OrdersInner { book: OrderBook::new(&config.orders) })
    }
}

/// Initialize the orders feature with a fresh, empty book.
///
/// # Errors
/// Returns [`OrdersError::Internal`] when the pricing configuration is unusable.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, OrdersError> {
    let price = config.orders.price_per_kg;
    if !price.is_finite() || price < 0.0 {
        return Err(format!("orders.price_per_kg must be a non-negative number, got {price}").into());
    }

    let slice = Orders::from_config(config);
    tracing::info!(price_per_kg = price, "Orders slice initialized");
    Ok(InitializedSlice::new(slice))
}
