//! Application Configuration
//!
//! Optional, read-only settings stored in TOML format. Nothing the user does
//! in a session is written back.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window settings
    pub window: WindowConfig,
    /// Look and feel
    pub appearance: AppearanceConfig,
}

/// Native window settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial inner width in logical pixels
    pub width: f32,
    /// Initial inner height in logical pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Kids Achievement Board".to_string(),
            width: 1280.0,
            height: 860.0,
        }
    }
}

/// Appearance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme key active at startup
    pub default_theme: String,
    /// Directory that avatar images and fonts are resolved against
    pub assets_dir: PathBuf,
    /// Display font, relative to `assets_dir` unless absolute
    pub font_file: Option<PathBuf>,
    /// Animate the background bubbles
    pub animate_background: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            default_theme: "default".to_string(),
            assets_dir: PathBuf::from("assets"),
            font_file: Some(PathBuf::from("fonts/NotoKufiArabic-Regular.ttf")),
            animate_background: true,
        }
    }
}

impl AppearanceConfig {
    /// Resolved path of the display font, if one is configured
    pub fn font_path(&self) -> Option<PathBuf> {
        self.font_file.as_ref().map(|f| self.assets_dir.join(f))
    }
}

/// Default location of the configuration file
pub fn default_config_path() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "kidsboard", "KidsBoard")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
#[allow(dead_code)]
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
