//! `sr-courier` — multi-pickup/drop-off courier tour planning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-------------------------------------------------------------------|
//! | [`types`]    | `Delivery`, `PickDrop`, `SubPath`, `CourierConfig`                  |
//! | [`construct`]| Depot selection and greedy multi-start construction                |
//! | [`perturb`]  | `shift`/`swap`/`reverse_subsequence` neighbor operators             |
//! | [`anneal`]   | Simulated-annealing refinement loop                                 |
//! | [`plan`]     | Top-level orchestration: `plan()`                                   |
//! | [`error`]    | `CourierError`, `CourierResult<T>`                                  |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                              |
//! |------------|-------------------------------------------------------------------------|
//! | `parallel` | Runs greedy attempts and per-seed annealing across rayon workers (default). |

pub mod anneal;
pub mod construct;
pub mod error;
pub mod perturb;
pub mod plan;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{CourierError, CourierResult};
pub use plan::plan;
pub use types::{CourierConfig, Delivery, PickDrop, PickDropKind, SubPath};
