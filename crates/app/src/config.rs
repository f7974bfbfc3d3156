//! Panel configuration — optional JSON embedded in the page.
//!
//! Every field has a sensible default so the configuration block is
//! optional. The browser adapter reads it from a
//! `<script id="relayboard-config" type="application/json">` element.

use std::time::Duration;

use relayboard_domain::relay::{DEFAULT_RELAY_COUNT, MAX_RELAYS, RelayId};
use serde::Deserialize;

use crate::ports::MAX_TIMER_MS;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Device origin prefixed to every request; empty means same origin.
    pub base_url: String,
    /// Relays whose settings fields are synced on load.
    pub relay_count: usize,
    /// Delay between a toggle request and the status refresh that follows.
    pub refresh_delay_ms: u64,
    /// Delay before returning to the relay page after a reboot.
    pub home_redirect_delay_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            relay_count: DEFAULT_RELAY_COUNT,
            refresh_delay_ms: 1000,
            home_redirect_delay_ms: 3000,
        }
    }
}

impl PanelConfig {
    /// Load configuration from the embedded block, falling back to defaults
    /// when the block is absent or blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is malformed JSON or fails validation.
    pub fn load(source: Option<&str>) -> Result<Self, ConfigError> {
        match source.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(text) => Self::from_json(text),
        }
    }

    fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.relay_count == 0 {
            return Err(ConfigError::Validation(
                "relay_count must be non-zero".to_string(),
            ));
        }
        if self.relay_count > MAX_RELAYS {
            return Err(ConfigError::Validation(format!(
                "relay_count must be at most {MAX_RELAYS}"
            )));
        }
        for (name, value) in [
            ("refresh_delay_ms", self.refresh_delay_ms),
            ("home_redirect_delay_ms", self.home_redirect_delay_ms),
        ] {
            if value > u64::from(MAX_TIMER_MS) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be at most {MAX_TIMER_MS}"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }

    #[must_use]
    pub fn home_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.home_redirect_delay_ms)
    }

    /// Relays configured on this panel.
    pub fn relays(&self) -> impl Iterator<Item = RelayId> {
        RelayId::range(self.relay_count)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse panel configuration")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
