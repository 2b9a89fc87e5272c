//! Kernel utilities shared across slices.
//!
//! * [`config`]: layered file + environment configuration loading.
//! * [`error`]: the [`StatusCoded`](error::StatusCoded) contract every slice error implements.
//! * [`ids`]: sequential numeric ids and public order ids.
//! * [`security`]: ownership checks for user-scoped resources.
//! * [`time`]: UTC timestamps and lenient date parsing for client input.
//! * `server` (feature): application state, `{detail}` error responses, extractors, system routes.
//!
//! ## Order ids
//! ```rust
//! let id = sledger_kernel::ids::order_id();
//! assert!(id.starts_with("ORD-"));
//! assert_eq!(id.len(), 12);
//! ```

// Lets `#[sledger_error]` expansions inside this crate resolve `::sledger_kernel::...`.
extern crate self as sledger_kernel;

pub mod config;
pub mod error;
pub mod ids;
pub mod prelude;
pub mod security;
#[cfg(feature = "server")]
pub mod server;
pub mod time;

pub use sledger_domain as domain;
