//! Error type for the query layer.

use graha_engine::EngineFailure;
use thiserror::Error;

/// Errors surfaced by queries.
///
/// Unknown body or ayanamsa names are not errors; they resolve to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The engine rejected the computation. Carries its diagnostic verbatim.
    #[error("{0}")]
    EngineComputation(String),
    /// A required input was missing or had the wrong type.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl QueryError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

impl From<EngineFailure> for QueryError {
    fn from(failure: EngineFailure) -> Self {
        log::warn!("engine computation failed: {}", failure.message());
        Self::EngineComputation(failure.into_message())
    }
}
