//! Server-delivered configuration snapshot.
//!
//! The snapshot is fetched once by the host integration and handed to the
//! services by reference; nothing in this workspace reads it through a
//! global. All sections use serde defaults so partial snapshots decode.

use engage_common::{ConfigError, ThemeStyle, ThemeStyleEnforcement};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Minimum draft length the comment cache keeps, unless overridden.
pub const DEFAULT_COMMENT_MIN_LENGTH: usize = 10;

/// Top-level config snapshot for one spot (publisher site).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpotConfig {
    pub mobile_sdk: MobileSdkConfig,
    pub theme: ThemeConfig,
}

/// Feature flags scoped to the mobile SDK.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MobileSdkConfig {
    /// Whether the realtime polling service may be constructed. Absent means
    /// disabled.
    pub realtime_enabled: Option<bool>,
    /// Drafts shorter than this are not worth caching.
    pub comment_min_length: usize,
}

impl Default for MobileSdkConfig {
    fn default() -> Self {
        Self {
            realtime_enabled: None,
            comment_min_length: DEFAULT_COMMENT_MIN_LENGTH,
        }
    }
}

/// Theme settings the host application persists between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub initial_style: ThemeStyle,
    /// When set, the style is locked to this value until the host clears it.
    pub enforce_style: Option<ThemeStyle>,
}

impl ThemeConfig {
    pub fn enforcement(&self) -> ThemeStyleEnforcement {
        match self.enforce_style {
            Some(style) => ThemeStyleEnforcement::Theme(style),
            None => ThemeStyleEnforcement::None,
        }
    }
}

impl SpotConfig {
    /// Decode a snapshot from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SpotConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        validate(&config)?;
        Ok(config)
    }

    /// Load a snapshot from a file on disk (sample-app integrations keep one
    /// checked in for local runs).
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }

    /// True only when the server explicitly enabled realtime.
    pub fn realtime_enabled(&self) -> bool {
        self.mobile_sdk.realtime_enabled == Some(true)
    }
}

fn validate(config: &SpotConfig) -> Result<(), ConfigError> {
    if config.mobile_sdk.comment_min_length == 0 {
        return Err(ConfigError::ValidationError(
            "mobile_sdk.comment_min_length must be at least 1".into(),
        ));
    }
    Ok(())
}
