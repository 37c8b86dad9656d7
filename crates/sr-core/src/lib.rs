//! `sr-core` — foundational types for the street-map routing engine.
//!
//! This crate is a dependency of every other `sr-*` crate. It intentionally
//! has no `sr-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                |
//! |-------------|----------------------------------------------------------|
//! | [`ids`]     | `IntersectionId`, `SegmentId`, `StreetId`, `FeatureId`, `PoiId`, `OsmId` |
//! | [`geo`]     | `GeoPoint`, `Projection`, distance/angle/area math        |
//! | [`dataset`] | `MapDataset`, the external Map Dataset Provider contract  |
//! | [`rng`]     | `PlannerRng`, the courier planner's seeded RNG            |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|-------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to public data types.   |

pub mod dataset;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dataset::{MapDataset, SegmentRecord};
pub use error::{CoreError, CoreResult};
pub use geo::{distance_m, angle_at_shared_point, polygon_area_m2, GeoPoint, Projection};
pub use ids::{FeatureId, IntersectionId, OsmId, PoiId, SegmentId, StreetId};
pub use rng::PlannerRng;
