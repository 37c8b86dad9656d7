//! Router error type.

use thiserror::Error;

use sr_core::IntersectionId;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("intersection {0} out of range for the loaded map")]
    IntersectionOutOfRange(IntersectionId),
}

pub type RouterResult<T> = Result<T, RouterError>;
