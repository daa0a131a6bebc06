//! Report configuration for the `rfmodel` tool.
//!
//! The calibration constants themselves are compiled in and not
//! configurable. This only controls what gets printed and how.
//!
//! ## File format
//!
//! ```toml
//! format = "csv"
//! emitters = ["WLAN2", "WLAN5", "LTE"]
//! short_range_only = false
//! verbose = true
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::characteristics::is_short_range;
use crate::emitter::EmitterType;
use crate::error::{Result, RfError};
use crate::output::OutputFormat;

/// What to report and how
///
/// # Example
/// ```
/// use rfmodel::config::ReportConfig;
/// use rfmodel::EmitterType;
///
/// let config = ReportConfig::from_toml_str("short_range_only = true").unwrap();
/// assert!(!config.selected_emitters().contains(&EmitterType::Lte));
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Output format
    pub format: OutputFormat,
    /// Emitter types to report; empty means all of them
    pub emitters: Vec<EmitterType>,
    /// Only report short-range emitter types
    pub short_range_only: bool,
    /// Include calibration sharing details
    pub verbose: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            emitters: Vec::new(),
            short_range_only: false,
            verbose: false,
        }
    }
}

impl ReportConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RfError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RfError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded report config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Emitter types to report, in declaration order without duplicates
    pub fn selected_emitters(&self) -> Vec<EmitterType> {
        EmitterType::ALL
            .into_iter()
            .filter(|t| self.emitters.is_empty() || self.emitters.contains(t))
            .filter(|&t| !self.short_range_only || is_short_range(t))
            .collect()
    }
}
