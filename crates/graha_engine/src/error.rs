//! Engine-layer error types.

use thiserror::Error;

/// A computation the engine refused or could not complete.
///
/// Carries the engine's own diagnostic text unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineFailure {
    message: String,
}

impl EngineFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Errors from opening or configuring an engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// The library is already held by another handle in this process.
    #[error("ephemeris library is already in use by another handle")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_displays_diagnostic_verbatim() {
        let err = EngineFailure::new("SwissEph file 'sepl_18.se1' not found in PATH '.'");
        assert_eq!(
            err.to_string(),
            "SwissEph file 'sepl_18.se1' not found in PATH '.'"
        );
        assert_eq!(err.message(), err.clone().into_message());
    }

    #[test]
    fn engine_error_display() {
        assert_eq!(
            EngineError::InvalidConfig("ephemeris_path must not be empty").to_string(),
            "invalid config: ephemeris_path must not be empty"
        );
        assert_eq!(
            EngineError::Busy.to_string(),
            "ephemeris library is already in use by another handle"
        );
    }
}
