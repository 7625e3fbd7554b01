//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};

/// Slot key the registry persists under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "srs_students_v1";

/// Visible rows past which the host should switch to a scrolling table.
pub const DEFAULT_SCROLL_THRESHOLD: usize = 7;

/// Configuration for the Registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Slot key for the persisted snapshot.
    pub storage_key: String,
    /// Whether to clean raw input (strip invalid characters, trim) before
    /// validating it.
    pub sanitize_input: bool,
    /// Row count above which [`crate::Registry::is_scrollable`] reports true.
    pub scroll_threshold: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            sanitize_input: true,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

impl RegistryConfig {
    /// Parse a configuration from JSON text. Missing keys take defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| RegistryError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Reject configurations the registry cannot run with.
    pub fn check(&self) -> Result<()> {
        if self.storage_key.trim().is_empty() {
            return Err(RegistryError::Config("storage_key must not be empty".into()));
        }
        Ok(())
    }
}
