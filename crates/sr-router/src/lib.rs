//! `sr-router` — the single-pair shortest-path router (SPR) and the
//! all-pairs distance matrix (APM).
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|-----------------------------------------------------------------|
//! | [`search`]| Shared best-first search used by both SPR and APM                |
//! | [`spr`]   | `find_path`, `path_travel_time`                                   |
//! | [`apm`]   | `AllPairsMatrix`, `build`, `dedup_preserve_order`                  |
//! | [`error`] | `RouterError`, `RouterResult<T>`                                   |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                       |
//! |------------|-----------------------------------------------------------------|
//! | `parallel` | Runs APM's per-source searches across rayon workers (default). |

pub mod apm;
pub mod error;
pub mod search;
pub mod spr;


pub use apm::{dedup_preserve_order, AllPairsMatrix};
pub use error::{RouterError, RouterResult};
pub use spr::{find_path, path_travel_time};
