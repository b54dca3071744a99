//! Dashboard configuration file support.
//!
//! This module reads dashboard settings from a TOML file. Every field has a
//! default, so an empty file (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DashboardError, DashboardResult};
use crate::services::episodes::ROLLING_WINDOW;
use crate::services::viewport::{
    DomainWindow, PixelRange, ViewportConfig, DEFAULT_MAX_ZOOM, DEFAULT_RESET_DURATION,
    DEFAULT_WHEEL_SENSITIVITY,
};

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub derivation: DerivationSettings,
    #[serde(default)]
    pub viewport: ViewportSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
}

/// Location of the metrics CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

/// Series derivation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationSettings {
    #[serde(default = "default_rolling_window")]
    pub rolling_window: usize,
}

/// Zoom/pan settings applied to every chart axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportSettings {
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    #[serde(default = "default_reset_duration_ms")]
    pub reset_duration_ms: u64,
    #[serde(default = "default_wheel_sensitivity")]
    pub wheel_sensitivity: f64,
}

/// Where the light/dark preference is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/podcast_metrics.csv")
}

fn default_rolling_window() -> usize {
    ROLLING_WINDOW
}

fn default_max_zoom() -> f64 {
    DEFAULT_MAX_ZOOM
}

fn default_reset_duration_ms() -> u64 {
    DEFAULT_RESET_DURATION.as_millis() as u64
}

fn default_wheel_sensitivity() -> f64 {
    DEFAULT_WHEEL_SENSITIVITY
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl Default for DerivationSettings {
    fn default() -> Self {
        Self {
            rolling_window: default_rolling_window(),
        }
    }
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            max_zoom: default_max_zoom(),
            reset_duration_ms: default_reset_duration_ms(),
            wheel_sensitivity: default_wheel_sensitivity(),
        }
    }
}

impl ViewportSettings {
    pub fn reset_duration(&self) -> Duration {
        Duration::from_millis(self.reset_duration_ms)
    }

    /// Controller settings for one axis.
    pub fn axis_config(
        &self,
        pixel_range: PixelRange,
        base_domain: DomainWindow,
    ) -> ViewportConfig {
        ViewportConfig::new(pixel_range, base_domain)
            .with_max_zoom(self.max_zoom)
            .with_reset_duration(self.reset_duration())
            .with_wheel_sensitivity(self.wheel_sensitivity)
    }
}

impl DashboardConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> DashboardResult<Self> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| {
            DashboardError::configuration(format!("Failed to parse config file: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load dashboard configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DashboardError::configuration(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load dashboard configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> DashboardResult<Self> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(DashboardError::configuration(
            "No dashboard.toml found in standard locations",
        ))
    }

    /// Reject settings the derivation or viewport cannot honour.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.derivation.rolling_window == 0 {
            return Err(DashboardError::configuration(
                "derivation.rolling_window must be at least 1",
            ));
        }
        if !self.viewport.max_zoom.is_finite() || self.viewport.max_zoom < 1.0 {
            return Err(DashboardError::configuration(format!(
                "viewport.max_zoom must be a finite value >= 1, got {}",
                self.viewport.max_zoom
            )));
        }
        if !self.viewport.wheel_sensitivity.is_finite() || self.viewport.wheel_sensitivity < 0.0 {
            return Err(DashboardError::configuration(format!(
                "viewport.wheel_sensitivity must be a finite non-negative value, got {}",
                self.viewport.wheel_sensitivity
            )));
        }
        Ok(())
    }
}
