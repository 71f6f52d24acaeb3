//! Engine configuration.
//!
//! Hosts usually build a [`SelectionConfig`] in code, but it also round-trips
//! through JSON so it can live in a settings file. Missing fields take their
//! defaults.

use crate::constants::SELECTION_THRESHOLD;
use crate::error::{ConfigError, ConfigResult};
use crate::marquee::MarqueeStyle;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Blocks new drags from arming. A drag already in progress continues.
    pub disabled: bool,
    /// Replay the swallowed click when a gesture never becomes a selection
    pub fire_passthrough_click: bool,
    /// Content-space displacement a drag must exceed to start selecting
    pub threshold: f64,
    pub marquee: MarqueeStyle,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            fire_passthrough_click: true,
            threshold: SELECTION_THRESHOLD,
            marquee: MarqueeStyle::default(),
        }
    }
}

impl SelectionConfig {
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_passthrough_click(mut self, enabled: bool) -> Self {
        self.fire_passthrough_click = enabled;
        self
    }

    /// Negative or non-finite values are replaced by the default when the
    /// config is handed to an engine.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// Replace an invalid threshold with the default instead of failing.
    pub fn sanitized(mut self) -> Self {
        if let Err(err) = self.validate() {
            tracing::warn!(%err, fallback = SELECTION_THRESHOLD, "Ignoring selection threshold");
            self.threshold = SELECTION_THRESHOLD;
        }
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading selection config {}", path.display()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("parsing selection config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded selection config");
        Ok(config)
    }
}
