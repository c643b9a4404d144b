//! Engine configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::EngineError;

/// Environment variable naming the ephemeris data directory.
pub const EPHE_PATH_ENV: &str = "SE_EPHE_PATH";

/// Settings applied once when an engine is opened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Directory holding the ephemeris data files. `None` leaves the
    /// library's built-in search path in effect.
    pub ephemeris_path: Option<PathBuf>,
}

impl EngineConfig {
    pub fn with_ephemeris_path(path: impl Into<PathBuf>) -> Self {
        Self {
            ephemeris_path: Some(path.into()),
        }
    }

    /// Read [`EPHE_PATH_ENV`] from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build from an arbitrary variable lookup. An empty value counts as unset.
    pub fn from_lookup(lookup: impl FnOnce(&str) -> Option<OsString>) -> Self {
        let ephemeris_path = lookup(EPHE_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self { ephemeris_path }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if let Some(path) = &self.ephemeris_path
            && path.as_os_str().is_empty()
        {
            return Err(EngineError::InvalidConfig(
                "ephemeris_path must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reads_ephe_path() {
        let cfg = EngineConfig::from_lookup(|key| {
            assert_eq!(key, "SE_EPHE_PATH");
            Some(OsString::from("/usr/share/sweph"))
        });
        assert_eq!(cfg.ephemeris_path, Some(PathBuf::from("/usr/share/sweph")));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_env_value_is_unset() {
        let cfg = EngineConfig::from_lookup(|_| Some(OsString::new()));
        assert_eq!(cfg, EngineConfig::default());
    }

    #[test]
    fn missing_env_value_is_unset() {
        let cfg = EngineConfig::from_lookup(|_| None);
        assert!(cfg.ephemeris_path.is_none());
    }

    #[test]
    fn explicit_empty_path_rejected() {
        let cfg = EngineConfig::with_ephemeris_path("");
        assert!(matches!(
            cfg.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
