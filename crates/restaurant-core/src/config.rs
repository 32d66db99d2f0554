//! Engine bounds, read once when the engines are built.
//!
//! The bounds come from a TOML document such as:
//!
//! ```toml
//! max_orders = 300
//! initial_table_size = 53
//! max_locations = 20
//! ```
//!
//! Missing keys fall back to [`EngineConfig::default`]. A zero bound is rejected
//! at the parse boundary so engines never see one.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{0} must be greater than zero")]
    ZeroBound(&'static str),
}

/// Capacity bounds shared by the engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Orders the dispatcher holds at once.
    pub max_orders: usize,
    /// Slot count of a fresh inventory table.
    pub initial_table_size: usize,
    /// Locations the delivery graph may span.
    pub max_locations: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_orders: 300,
            initial_table_size: 53,
            max_locations: 20,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates the TOML file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(?config, path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_orders == 0 {
            return Err(ConfigError::ZeroBound("max_orders"));
        }
        if self.initial_table_size == 0 {
            return Err(ConfigError::ZeroBound("initial_table_size"));
        }
        if self.max_locations == 0 {
            return Err(ConfigError::ZeroBound("max_locations"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = EngineConfig::from_toml_str("max_orders = 10").unwrap();
        assert_eq!(config.max_orders, 10);
        assert_eq!(config.initial_table_size, 53);
        assert_eq!(config.max_locations, 20);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_zero_bound_rejected() {
        let err = EngineConfig::from_toml_str("initial_table_size = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBound("initial_table_size")));
    }

    #[test]
    fn test_negative_bound_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("max_orders = -5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = EngineConfig::from_toml_str("max_tables = 4").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = EngineConfig::load("/nonexistent/restaurant.toml").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/restaurant.toml"))
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
