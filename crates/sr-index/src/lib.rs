//! `sr-index` — the map index (MX) and geometry queries (GM).
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-------------------------------------------------------------|
//! | [`index`] | `MapIndex`, built once via [`MapIndex::build`]               |
//! | [`error`] | `IndexError`, `IndexResult<T>`                               |
//!
//! Geometry queries (distance, angle, area, closest-intersection,
//! closest-POI) live as methods on [`MapIndex`] rather than a separate
//! module, since they all read MX's derived tables.

pub mod error;
pub mod index;


pub use error::{IndexError, IndexResult};
pub use index::MapIndex;
