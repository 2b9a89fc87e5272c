//! Facade crate for `SupplyLedger` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates and holds no business logic.
//!
//! ## Usage
//! - Add `sledger` with the `server` feature.
//! - Call [`init`] to build every feature slice, then hand them to
//!   [`ApiState::builder`](sledger_kernel::server::ApiState::builder).

pub use sledger_domain as domain;
use sledger_domain::config::ApiConfig;
use sledger_domain::registry::InitializedSlice;
pub use sledger_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use sledger_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use sledger_forecast as forecast;
    pub use sledger_orders as orders;
    pub use sledger_shipments as shipments;
    pub use sledger_users as users;

    /// Slices assembled by [`init`](crate::init), in registration order.
    pub const SLICES: &[&str] = &["forecast", "orders", "shipments", "users"];

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name) || SLICES.contains(&name)
    }
}

pub type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Initialize every feature slice.
///
/// The shipments slice shares the orders slice's book and the forecast slice's predictor, so
/// order status follows shipment progress.
///
/// # Errors
/// Returns the first slice initialization failure.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, InitError> {
    let forecast = features::forecast::init(config)?;
    let predictor = forecast
        .downcast::<features::forecast::Forecast>()
        .map(|slice| slice.predictor.clone())
        .ok_or("forecast slice missing after init")?;

    let orders = features::orders::init(config)?;
    let book = orders
        .downcast::<features::orders::Orders>()
        .map(|slice| slice.book.clone())
        .ok_or("orders slice missing after init")?;

    let shipments = features::shipments::init(config, book, predictor)?;
    let users = features::users::init()?;

    Ok(vec![forecast, orders, shipments, users])
}
