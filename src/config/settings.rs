//! Application configuration

use anyhow::Result;
use range_slider_types::Preset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Window dimensions
    pub window: WindowConfig,
    /// Initial range and values of the three sliders
    pub slider: SliderConfig,
    /// Rescaling behaviour of the floating sliders
    pub floating: FloatingConfig,
    /// Gradient editor seed
    pub gradient: GradientConfig,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "github.range_slider", "range-slider")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            window: WindowConfig::default(),
            slider: SliderConfig::default(),
            floating: FloatingConfig::default(),
            gradient: GradientConfig::default(),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 360,
        }
    }
}

/// Slider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub minimum: i32,
    pub maximum: i32,
    pub value_lo: i32,
    pub value_hi: i32,
    pub step_size: i32,
    pub page_size: i32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum: 0,
            maximum: 100,
            value_lo: 20,
            value_hi: 80,
            step_size: range_slider_core::constants::DEFAULT_STEP_SIZE,
            page_size: range_slider_core::constants::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Floating slider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloatingConfig {
    /// Relative edge padding, clamped to 0.0..=0.2 when applied
    pub padding: f64,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self { padding: 0.1 }
    }
}

/// Gradient editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    /// Preset seeded when no serialized gradient is stored
    pub preset: Preset,
    /// Last edited gradient in `pos,r,g,b:...` form
    pub serialized: Option<String>,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            preset: Preset::Jet,
            serialized: None,
        }
    }
}
