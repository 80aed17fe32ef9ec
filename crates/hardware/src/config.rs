//! Configuration system for the fusion model.
//!
//! This module defines the configuration structures used to parameterize the
//! fusion unit. It provides:
//! 1. **Defaults:** Baseline values matching the reference 2-wide front end.
//! 2. **Structures:** General (tracing) and fusion (pattern enables, window
//!    geometry) sections.
//! 3. **Validation:** JSON parsing shared with the Python bindings plus
//!    structural checks on the window geometry.

use serde::Deserialize;

use crate::common::error::ConfigError;
use crate::core::pipeline::fusion::FusionPolicy;

/// Default configuration constants for the fusion model.
///
/// These values define the baseline behavior when not explicitly overridden
/// in the supplied configuration.
mod defaults {
    /// Default decode-window width presented to the unit each step.
    pub const WINDOW_WIDTH: usize = 2;
}

/// Root configuration structure containing all model settings.
///
/// Configuration is supplied as JSON (from the Python API) or built with
/// `Config::default()`.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use rvfuse_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.general.trace_decisions);
/// assert_eq!(config.fusion.window_width, 2);
/// assert!(config.fusion.enable_add_load);
/// ```
///
/// Deserializing from JSON (typical Python API usage):
///
/// ```
/// use rvfuse_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_decisions": true },
///     "fusion": {
///         "enable_add_load": true,
///         "enable_add_add": false,
///         "window_width": 3
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_decisions);
/// assert!(!config.fusion.enable_add_add);
/// assert_eq!(config.fusion.window_width, 3);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General model settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Fusion unit configuration.
    #[serde(default)]
    pub fusion: FusionConfig,
}

impl Config {
    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the JSON does not match the
    /// schema, or [`ConfigError::Unsupported`] when it describes a window
    /// geometry the unit cannot scan.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks structural constraints that the schema alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Unsupported`] for an unscannable window width.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.fusion.window_width {
            2 | 3 => Ok(()),
            width => Err(ConfigError::Unsupported(format!(
                "window width {width}; supported widths are 2 and 3"
            ))),
        }
    }
}

/// General model settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Enable per-step decision tracing to stderr.
    #[serde(default)]
    pub trace_decisions: bool,
}

/// Fusion unit configuration: which patterns may be taken and how wide the
/// presented decode window is.
#[derive(Debug, Clone, Deserialize)]
pub struct FusionConfig {
    /// Allow fusing an add-family producer into a following load.
    #[serde(default = "FusionConfig::default_enable")]
    pub enable_add_load: bool,

    /// Allow fusing two immediate add-family instructions.
    #[serde(default = "FusionConfig::default_enable")]
    pub enable_add_add: bool,

    /// Instructions per decode window (2 for the narrow stall-aware unit,
    /// 3 for the wide arbitrating unit).
    #[serde(default = "FusionConfig::default_window_width")]
    pub window_width: usize,
}

impl FusionConfig {
    /// Both fusion patterns are on unless explicitly disabled.
    const fn default_enable() -> bool {
        true
    }

    /// Returns the default decode-window width.
    const fn default_window_width() -> usize {
        defaults::WINDOW_WIDTH
    }

    /// The matcher policy this configuration selects.
    pub const fn policy(&self) -> FusionPolicy {
        FusionPolicy {
            allow_add_load: self.enable_add_load,
            allow_add_add: self.enable_add_add,
        }
    }
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            enable_add_load: Self::default_enable(),
            enable_add_add: Self::default_enable(),
            window_width: Self::default_window_width(),
        }
    }
}
