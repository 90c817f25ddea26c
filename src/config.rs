use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::apply::{SESSION_TTL_MS, STORAGE_KEY};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level admissions configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AdmissionsConfig {
    pub session: SessionConfig,
    pub submission: SubmissionConfig,
}

/// Wizard session persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Storage slot holding the serialized wizard session.
    pub storage_key: String,
    /// Idle time after which a saved session is discarded.
    pub ttl_minutes: u32,
}

/// Stub submission behaviour shared by the forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub simulated_delay_ms: u32,
    /// How long the contact form keeps its success banner.
    pub success_banner_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            ttl_minutes: (SESSION_TTL_MS / 60_000) as u32,
        }
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 1000,
            success_banner_ms: 5000,
        }
    }
}

impl SessionConfig {
    pub fn ttl_millis(&self) -> i64 {
        i64::from(self.ttl_minutes) * 60_000
    }
}

impl AdmissionsConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Parse embedded or on-disk TOML.
    /// Returns `Default` if the input is unparseable.
    pub fn load_or_default(contents: &str) -> Self {
        match Self::from_toml_str(contents) {
            Ok(config) => {
                log::debug!("Loaded admissions config");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse admissions config: {e}, using defaults");
                Self::default()
            }
        }
    }

    /// Like `load_or_default`, reading from `path`. A missing file is not an error.
    pub fn load_path_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(_)) => {
                log::debug!("No config file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }
}
