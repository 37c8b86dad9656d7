//! `sr-engine` — the façade that a Query Client holds: a `RoutingEngine`
//! handle with `load_map`/`close_map` lifecycle methods and the full set of
//! map, geometry, routing, and courier-planning queries described in the
//! engine's external interface.
//!
//! This crate has no algorithms of its own; it wires together [`sr_index`],
//! [`sr_router`], and [`sr_courier`] behind one type so a caller never
//! constructs a `MapIndex` or `AllPairsMatrix` directly.

pub mod engine;
pub mod error;

#[cfg(test)]
mod tests;

pub use engine::RoutingEngine;
pub use error::{EngineError, EngineResult};

// Re-export the types callers need to build requests without reaching into
// the individual algorithm crates.
pub use sr_core::dataset::{MapDataset, SegmentRecord};
pub use sr_core::ids::{FeatureId, IntersectionId, OsmId, PoiId, SegmentId, StreetId};
pub use sr_core::GeoPoint;
pub use sr_courier::{CourierConfig, Delivery, PickDropKind, SubPath};
