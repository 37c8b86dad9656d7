//! Engine-facade error type.

use thiserror::Error;

use sr_index::IndexError;

/// Errors surfaced by [`crate::RoutingEngine::load_map`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Load(#[from] IndexError),
}

pub type EngineResult<T> = Result<T, EngineError>;
