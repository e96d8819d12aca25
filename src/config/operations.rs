//! Config loading, validation, and override operations.

use super::model::Config;
use super::types::LOCK_DIR_ENV;
use crate::error::{Result, TtylockError};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TtylockError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TtylockError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| TtylockError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            TtylockError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Resolve the effective config.
    ///
    /// Precedence: defaults < config file < `TTYLOCK_LOCK_DIR` < `lock_dir_flag`.
    pub fn resolve(config_path: Option<&Path>, lock_dir_flag: Option<&Path>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Ok(dir) = std::env::var(LOCK_DIR_ENV)
            && !dir.is_empty()
        {
            log::debug!("lock directory overridden by {}: {}", LOCK_DIR_ENV, dir);
            config.lock_dir = dir;
        }

        if let Some(dir) = lock_dir_flag {
            config.lock_dir = dir.to_string_lossy().into_owned();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `lock_dir` must be non-empty
    /// - `lock_prefix` must be non-empty and must not contain a path separator
    pub fn validate(&self) -> Result<()> {
        if self.lock_dir.is_empty() {
            return Err(TtylockError::UserError(
                "config validation failed: lock_dir must not be empty".to_string(),
            ));
        }

        if self.lock_prefix.is_empty() {
            return Err(TtylockError::UserError(
                "config validation failed: lock_prefix must not be empty".to_string(),
            ));
        }

        if self.lock_prefix.contains('/') {
            return Err(TtylockError::UserError(format!(
                "config validation failed: lock_prefix must not contain '/' (found '{}')",
                self.lock_prefix
            )));
        }

        Ok(())
    }
}
