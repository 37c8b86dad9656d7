//! Map-index error type.

use thiserror::Error;

use sr_core::IntersectionId;

/// Errors produced while building or querying a [`crate::MapIndex`].
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("dataset reported zero intersections")]
    EmptyDataset,

    #[error("intersection {0} not found")]
    IntersectionNotFound(IntersectionId),

    #[error("malformed dataset: {0}")]
    Malformed(String),
}

pub type IndexResult<T> = Result<T, IndexError>;
