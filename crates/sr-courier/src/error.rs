//! Courier planner error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CourierError {
    #[error("no deliveries given")]
    NoDeliveries,

    #[error("no depots given")]
    NoDepots,

    #[error("not every pickup/drop-off/depot pair is reachable from one another")]
    Unreachable,
}

pub type CourierResult<T> = Result<T, CourierError>;
