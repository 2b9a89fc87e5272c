//! # Domain Models
//!
//! Pure shared types: configuration tree, OpenAPI tags, shipment/order vocabularies and the
//! slice registry. Dependencies stay at `serde`, `bitflags` and `strum`; no I/O lives here.

pub mod config;
pub mod constants;
pub mod filters;
pub mod registry;
pub mod vocabulary;
