//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::PathBuf;

use aetherion::config_paths::ThemePaths;
use aetherion::prefs::Preferences;
use aetherion::theme::{OverrideStore, ThemeCatalog, ThemeId, ThemeManager};
use tempfile::TempDir;

/// Complete strict-schema theme JSON
pub const STRICT_SEPIA: &str = r##"{
    "id": "aetherionSepia",
    "name": "Paper",
    "background": "#F4ECD8",
    "foreground": "#3B2F2F",
    "secondary": "#6B5B4B",
    "accent": "#8B5E3C",
    "controlTint": "#8B5E3C",
    "cardStartColor": "#FFFFFF",
    "cardEndColor": "#E8DCC0",
    "cardStartOpacity": 0.6,
    "cardEndOpacity": 0.4,
    "cornerRadius": 12,
    "headerColor": "#3B2F2F",
    "headerFontSize": 30,
    "headerFontWeight": "semibold",
    "headerFontDesign": "serif"
}"##;

/// Isolated directory tree standing in for the app container
pub struct Sandbox {
    pub dir: TempDir,
    pub paths: ThemePaths,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let paths = ThemePaths::rooted_at(dir.path());
        Self { dir, paths }
    }

    /// Sandbox with an (initially empty) bundle directory
    pub fn with_bundle() -> Self {
        let sandbox = Self::new();
        let bundle = sandbox.dir.path().join("Bundle");
        std::fs::create_dir_all(bundle.join("Themes")).unwrap();
        let paths = sandbox.paths.clone().with_bundle_dir(bundle);
        Self { paths, ..sandbox }
    }

    pub fn bundle_themes_dir(&self) -> PathBuf {
        self.paths.bundle_dir.clone().unwrap().join("Themes")
    }

    pub fn write_bundle_theme(&self, file_name: &str, json: &str) -> PathBuf {
        let path = self.bundle_themes_dir().join(file_name);
        std::fs::write(&path, json).unwrap();
        path
    }

    pub fn write_user_theme(&self, file_name: &str, json: &str) -> PathBuf {
        std::fs::create_dir_all(&self.paths.user_themes_dir).unwrap();
        let path = self.paths.user_themes_dir.join(file_name);
        std::fs::write(&path, json).unwrap();
        path
    }

    /// Fresh handle on the preferences file, as a new launch would open it
    pub fn prefs(&self) -> Preferences {
        Preferences::open(&self.paths.preferences_file)
    }

    pub fn store(&self) -> OverrideStore {
        OverrideStore::new(&self.paths.override_dirs, self.prefs())
    }

    pub fn catalog(&self) -> ThemeCatalog {
        ThemeCatalog::from_paths(&self.paths)
    }

    /// Simulated launch with `aetherionDark` as the default
    pub fn launch(&self) -> ThemeManager {
        ThemeManager::from_paths(&self.paths, ThemeId::Dark)
    }
}
