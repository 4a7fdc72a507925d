//! Override disk store
//!
//! Persists the theme currently being customized as `theme.json` in an
//! application-private directory, plus a byte-identical copy in the
//! preferences store (the mirror) so a draft survives a lost file.
//!
//! File and mirror are not transactional: `save` writes the mirror first and
//! the file second, and [`OverrideStore::load_or_mirror`] always prefers the
//! file. `clear` only removes the file; `purge` removes both.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::color::{Color, Rgba};
use super::font::{FontDesign, FontWeight};
use super::id::ThemeId;
use super::model::Theme;
use super::presets;
use crate::config_paths;
use crate::prefs::{keys, Preferences};
use crate::util::fs::{ensure_writable_dir, write_atomic};

/// File name of the override inside the resolved directory
pub const OVERRIDE_FILE_NAME: &str = "theme.json";

/// Serialized override: every color expanded, every field present
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideRecord {
    pub id: String,
    pub background: Rgba,
    pub foreground: Rgba,
    pub secondary: Rgba,
    pub accent: Rgba,
    pub control_tint: Rgba,
    pub card_start_opacity: f64,
    pub card_end_opacity: f64,
    pub card_start_color: Rgba,
    pub card_end_color: Rgba,
    pub corner_radius: f64,
    pub header_font_size: f64,
    pub header_font_weight: String,
    pub header_font_design: String,
    pub header_color: Rgba,
}

impl OverrideRecord {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            id: theme.id.as_str().to_string(),
            background: theme.background.to_rgba(),
            foreground: theme.foreground.to_rgba(),
            secondary: theme.secondary.to_rgba(),
            accent: theme.accent.to_rgba(),
            control_tint: theme.control_tint.to_rgba(),
            card_start_opacity: theme.card_start_opacity,
            card_end_opacity: theme.card_end_opacity,
            card_start_color: theme.card_start_color.to_rgba(),
            card_end_color: theme.card_end_color.to_rgba(),
            corner_radius: theme.corner_radius,
            header_font_size: theme.header_font_size,
            header_font_weight: theme.header_font_weight.name().to_string(),
            header_font_design: theme.header_font_design.name().to_string(),
            header_color: theme.header_color.to_rgba(),
        }
    }

    /// Rebuild the theme; `None` if the id is not a known preset
    ///
    /// Unrecognized font names keep the preset's typography.
    pub fn into_theme(self) -> Option<Theme> {
        let id = ThemeId::from_raw(&self.id)?;
        let base = presets::preset(id);
        Some(Theme {
            id,
            background: Color::from(self.background),
            foreground: Color::from(self.foreground),
            secondary: Color::from(self.secondary),
            accent: Color::from(self.accent),
            control_tint: Color::from(self.control_tint),
            card_start_color: Color::from(self.card_start_color),
            card_end_color: Color::from(self.card_end_color),
            card_start_opacity: self.card_start_opacity,
            card_end_opacity: self.card_end_opacity,
            corner_radius: self.corner_radius,
            header_font_size: self.header_font_size,
            header_font_weight: FontWeight::parse(&self.header_font_weight)
                .unwrap_or(base.header_font_weight),
            header_font_design: FontDesign::parse(&self.header_font_design)
                .unwrap_or(base.header_font_design),
            header_color: Color::from(self.header_color),
        })
    }

    /// Encoded payload shared by file and mirror
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Option<Self> {
        serde_json::from_str(json).ok()
    }
}

/// Pick the first override directory tier that can be created and written
///
/// Falls back to the system temp location when every tier fails.
pub fn resolve_override_dir(candidates: &[PathBuf]) -> PathBuf {
    for dir in candidates {
        match ensure_writable_dir(dir) {
            Ok(()) => return dir.clone(),
            Err(e) => tracing::warn!("Override directory {} unusable: {}", dir.display(), e),
        }
    }
    let fallback = config_paths::temp_dir();
    if let Err(e) = std::fs::create_dir_all(&fallback) {
        tracing::warn!("Temp directory {} unusable: {}", fallback.display(), e);
    }
    fallback
}

/// Single-slot persistence for the in-progress theme
#[derive(Debug, Clone)]
pub struct OverrideStore {
    path: PathBuf,
    mirror: Preferences,
}

impl OverrideStore {
    /// Store in the first usable directory among `dirs`
    pub fn new(dirs: &[PathBuf], mirror: Preferences) -> Self {
        let dir = resolve_override_dir(dirs);
        Self::at(dir.join(OVERRIDE_FILE_NAME), mirror)
    }

    /// Store at an explicit file path
    pub fn at(path: impl Into<PathBuf>, mirror: Preferences) -> Self {
        Self {
            path: path.into(),
            mirror,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `theme` to the mirror and the override file
    ///
    /// Only a failed file write is an error; a mirror failure is logged.
    pub fn save(&self, theme: &Theme) -> io::Result<()> {
        let payload = OverrideRecord::from_theme(theme).to_json()?;

        if let Err(e) = self.mirror.set_string(keys::OVERRIDE_MIRROR, payload.as_str()) {
            tracing::warn!("Failed to write theme override mirror: {}", e);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        write_atomic(&self.path, payload.as_bytes())?;
        tracing::debug!("Saved theme override to {}", self.path.display());
        Ok(())
    }

    /// Theme from the override file; `None` if absent or malformed
    pub fn load(&self) -> Option<Theme> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Failed to read theme override {}: {}", self.path.display(), e);
                return None;
            }
        };
        let theme = OverrideRecord::from_json(&contents).and_then(OverrideRecord::into_theme);
        if theme.is_none() {
            tracing::warn!("Ignoring malformed theme override {}", self.path.display());
        }
        theme
    }

    /// Theme from the mirror only
    pub fn load_mirror(&self) -> Option<Theme> {
        let payload = self.mirror.get_string(keys::OVERRIDE_MIRROR)?;
        OverrideRecord::from_json(&payload).and_then(OverrideRecord::into_theme)
    }

    /// File first, then mirror
    pub fn load_or_mirror(&self) -> Option<Theme> {
        self.load().or_else(|| {
            let mirrored = self.load_mirror();
            if mirrored.is_some() {
                tracing::info!("Recovered theme override from mirror");
            }
            mirrored
        })
    }

    /// Delete the override file; the mirror is kept for recovery
    pub fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::debug!("Cleared theme override {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                "Failed to remove theme override {}: {}",
                self.path.display(),
                e
            ),
        }
    }

    /// Forget the override everywhere: file and mirror
    pub fn purge(&self) {
        self.clear();
        if let Err(e) = self.mirror.remove(keys::OVERRIDE_MIRROR) {
            tracing::warn!("Failed to remove theme override mirror: {}", e);
        }
    }
}
