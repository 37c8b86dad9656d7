//! Shared error type.
//!
//! Sub-crates define their own error enums for domain-specific failures and
//! wrap `CoreError` as one variant via `#[from]` where it applies.

use thiserror::Error;

use crate::IntersectionId;

/// The common base error type, re-used by every crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("intersection {0} not found")]
    IntersectionNotFound(IntersectionId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("malformed dataset: {0}")]
    Dataset(String),
}

/// Shorthand result type.
pub type CoreResult<T> = Result<T, CoreError>;
