//! Application configuration persistence
//!
//! Stores user preferences in `~/.config/aetherion/config.yaml`

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config_paths::{self, ThemePaths};
use crate::theme::ThemeId;

/// Application configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Theme used when nothing else was selected or saved
    #[serde(default)]
    pub default_theme: ThemeId,

    /// Bundled resources root (contains `Themes/`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_dir: Option<PathBuf>,

    /// Minimum milliseconds between live-preview autosave writes (0 = every change)
    #[serde(default)]
    pub autosave_debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_theme: ThemeId::default(),
            bundle_dir: None,
            autosave_debounce_ms: 0,
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        match config_paths::config_file() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from `path`, or return defaults if missing or malformed
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Update the default theme and save
    pub fn set_default_theme(&mut self, id: ThemeId) -> Result<(), String> {
        self.default_theme = id;
        self.save()
    }

    pub fn autosave_debounce(&self) -> Duration {
        Duration::from_millis(self.autosave_debounce_ms)
    }

    /// Bundle directory from config, else `resources/` beside the executable
    pub fn resolved_bundle_dir(&self) -> Option<PathBuf> {
        self.bundle_dir
            .clone()
            .or_else(config_paths::bundled_resources_dir)
    }

    /// Theme locations under `config_dir`, honoring the configured bundle
    pub fn theme_paths(&self, config_dir: &Path) -> ThemePaths {
        ThemePaths::under_config_dir(config_dir, self.resolved_bundle_dir())
    }
}
