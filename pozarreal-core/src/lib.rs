//! Core types and service wiring for the Pozarreal street records lookup.

/// Bundles of lookup ports backed by a single data source.
pub mod backend;
/// Domain models and identifiers shared by all stores.
pub mod model;
/// Traits describing the lookup interfaces.
pub mod ports;
/// Street service facade used by clients.
pub mod service;

pub use backend::*;
pub use model::*;
pub use ports::*;
pub use service::*;
