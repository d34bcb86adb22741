//! Configuration module.
//!
//! Handles loading and validating `panel-split.toml`. Every key is optional;
//! stock defaults fill in whatever the file leaves out.
//!
//! ## Config File Location
//!
//! ```text
//! panel-split --config path/to/file.toml pano.jpg   # explicit file
//! panel-split pano.jpg                              # ./panel-split.toml if present
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_dir = "output"     # Where slices and the overview are written
//!
//! [overview]
//! border_percent = 0.05     # Border on each side, as a fraction of image width
//! ```
//!
//! Command-line flags (`--output`, `--border-percent`) override file values.
//! Unknown keys are rejected to catch typos early.

use crate::imaging::BorderPercent;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "panel-split.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `panel-split.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    /// Directory receiving slices and the overview. Created if missing.
    pub output_dir: PathBuf,
    /// Overview composition settings.
    pub overview: OverviewConfig,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            overview: OverviewConfig::default(),
        }
    }
}

impl SplitConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.border_percent().map(|_| ())
    }

    /// The overview border as a checked [`BorderPercent`].
    pub fn border_percent(&self) -> Result<BorderPercent, ConfigError> {
        BorderPercent::new(self.overview.border_percent).ok_or_else(|| {
            ConfigError::Validation(format!(
                "overview.border_percent must be in [0, 1), got {}",
                self.overview.border_percent
            ))
        })
    }
}

/// Overview composition settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverviewConfig {
    /// Border added left and right of the image, as a fraction of its width.
    pub border_percent: f64,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            border_percent: BorderPercent::DEFAULT,
        }
    }
}

/// Parse and validate config from a TOML string.
pub fn parse_config(content: &str) -> Result<SplitConfig, ConfigError> {
    let config: SplitConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from an explicit file. The file must exist.
pub fn load_config(path: &Path) -> Result<SplitConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load `panel-split.toml` from `dir`, or stock defaults if it is absent.
pub fn load_config_in(dir: &Path) -> Result<SplitConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(SplitConfig::default());
    }
    load_config(&path)
}

/// Returns a fully-commented stock `panel-split.toml`.
///
/// Printed by `panel-split --print-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# panel-split configuration
# ========================
# All keys are optional. Values shown are the defaults.

# Directory receiving the slices and the overview image.
# Created if it does not exist.
output_dir = "output"

[overview]
# White border added on the left and right of the overview image, as a
# fraction of the source width. The canvas is then made 4:5 (width:height)
# and the image is centered vertically.
border_percent = 0.05
"##
}
