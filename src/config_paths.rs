//! Centralized configuration paths for aetherion
//!
//! Config files live under:
//! - Unix/macOS: `~/.config/aetherion/`
//! - Windows: `%APPDATA%\aetherion\`
//!
//! The theme override lives in an application-private data directory, with
//! the config directory and the system temp directory as fallback tiers.
//!
//! This module is the single source of truth for on-disk locations.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "aetherion";

/// Base config directory for aetherion
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/aetherion`
///   - Else: `~/.config/aetherion`
///
/// Windows:
///   - `%APPDATA%\aetherion`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/aetherion/Themes/` (user-authored theme JSON)
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("Themes"))
}

/// `~/.config/aetherion/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/aetherion/defaults.json`
pub fn preferences_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("defaults.json"))
}

/// `~/.config/aetherion/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Platform application data directory (`~/.local/share/aetherion`,
/// `~/Library/Application Support/aetherion`, `%APPDATA%\aetherion`)
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR))
}

/// Last-resort location that is always available
pub fn temp_dir() -> PathBuf {
    env::temp_dir().join(APP_DIR)
}

/// Bundled resources shipped next to the executable (`<exe dir>/resources`)
pub fn bundled_resources_dir() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    let dir = exe.parent()?.join("resources");
    dir.is_dir().then_some(dir)
}

/// Returns the most recent log file in `~/.config/aetherion/logs/`
/// (e.g., `aetherion.log.2026-01-07`)
///
/// The logging system uses daily rotation, creating files like `aetherion.log.YYYY-MM-DD`.
pub fn log_file() -> Option<PathBuf> {
    let logs_dir = logs_dir()?;

    let mut log_files: Vec<PathBuf> = fs::read_dir(&logs_dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with("aetherion.log"))
                .unwrap_or(false)
        })
        .collect();

    // YYYY-MM-DD sorts naturally, newest first
    log_files.sort_by(|a, b| b.cmp(a));

    log_files
        .into_iter()
        .next()
        .or_else(|| Some(logs_dir.join("aetherion.log")))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}

/// Every location the theme core reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePaths {
    /// Bundled resources root; its `Themes/` subdirectory and the root itself
    /// are the first two catalog tiers
    pub bundle_dir: Option<PathBuf>,
    /// User-writable theme folder, created on demand
    pub user_themes_dir: PathBuf,
    /// Override directory tiers in priority order; the last one is expected
    /// to always be creatable
    pub override_dirs: Vec<PathBuf>,
    /// Key-value store holding selected ids and the override mirror
    pub preferences_file: PathBuf,
}

impl ThemePaths {
    /// Standard locations under `config_dir`
    pub fn under_config_dir(config_dir: &Path, bundle_dir: Option<PathBuf>) -> Self {
        let mut override_dirs: Vec<PathBuf> = data_dir().into_iter().collect();
        override_dirs.push(config_dir.to_path_buf());
        override_dirs.push(temp_dir());
        Self {
            bundle_dir,
            user_themes_dir: config_dir.join("Themes"),
            override_dirs,
            preferences_file: config_dir.join("defaults.json"),
        }
    }

    /// Locations confined to `config_dir` (override under `config_dir/data`),
    /// with the temp directory as the only outside tier
    pub fn self_contained(config_dir: &Path, bundle_dir: Option<PathBuf>) -> Self {
        Self {
            bundle_dir,
            user_themes_dir: config_dir.join("Themes"),
            override_dirs: vec![config_dir.join("data"), config_dir.to_path_buf(), temp_dir()],
            preferences_file: config_dir.join("defaults.json"),
        }
    }

    /// Standard locations for the current user
    pub fn discover(bundle_dir: Option<PathBuf>) -> Option<Self> {
        config_dir().map(|dir| Self::under_config_dir(&dir, bundle_dir))
    }

    /// Everything below `root`; used by tests and portable installs
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            bundle_dir: None,
            user_themes_dir: root.join("Documents").join("Themes"),
            override_dirs: vec![
                root.join("Application Support"),
                root.join("Library"),
                root.join("tmp"),
            ],
            preferences_file: root.join("defaults.json"),
        }
    }

    /// Same paths with a bundle directory
    pub fn with_bundle_dir(mut self, bundle_dir: impl Into<PathBuf>) -> Self {
        self.bundle_dir = Some(bundle_dir.into());
        self
    }
}
