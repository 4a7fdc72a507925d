//! Theme catalog: discovery of theme JSON files
//!
//! Discovery order (first occurrence of an id wins):
//! 1. Bundled `Themes/` subdirectory
//! 2. Bundled resources root
//! 3. User-writable `Themes/` folder (created on demand)
//!
//! Entry ids are file stems. The listing is sorted by display name,
//! case-insensitively. When no file is found the built-in presets are listed
//! instead, without file backing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::id::ThemeId;
use super::loader::{self, ThemeFile};
use super::model::Theme;
use super::presets;
use crate::config_paths::ThemePaths;
use crate::util::fs::{slugify, write_atomic};

/// Where a catalog entry is loaded from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThemeSource {
    /// Built-in preset, no file backing
    Builtin,
    /// Theme JSON on disk
    File(PathBuf),
}

/// One selectable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeListItem {
    /// Stable identifier (usually the file stem)
    pub id: String,
    /// Name shown in pickers
    pub display_name: String,
    pub source: ThemeSource,
}

impl ThemeListItem {
    /// Synthetic entry for a preset
    pub fn builtin(id: ThemeId) -> Self {
        Self {
            id: id.as_str().to_string(),
            display_name: id.display_name().to_string(),
            source: ThemeSource::Builtin,
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.source == ThemeSource::Builtin
    }

    /// The preset family this entry's id names, if any
    pub fn theme_id(&self) -> Option<ThemeId> {
        ThemeId::from_raw(&self.id)
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.source {
            ThemeSource::File(path) => Some(path),
            ThemeSource::Builtin => None,
        }
    }
}

/// Theme discovery across bundled and user locations
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    bundle_dir: Option<PathBuf>,
    user_dir: PathBuf,
}

impl ThemeCatalog {
    pub fn new(bundle_dir: Option<PathBuf>, user_dir: impl Into<PathBuf>) -> Self {
        Self {
            bundle_dir,
            user_dir: user_dir.into(),
        }
    }

    pub fn from_paths(paths: &ThemePaths) -> Self {
        Self::new(paths.bundle_dir.clone(), paths.user_themes_dir.clone())
    }

    /// User-writable theme folder
    pub fn user_dir(&self) -> &Path {
        &self.user_dir
    }

    /// All selectable themes, deduplicated and sorted by display name
    pub fn list_themes(&self) -> Vec<ThemeListItem> {
        let mut items = Vec::new();
        let mut seen = HashSet::new();

        if let Some(bundle) = &self.bundle_dir {
            collect_dir(&bundle.join("Themes"), &mut items, &mut seen);
            collect_dir(bundle, &mut items, &mut seen);
        }

        if !self.user_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(&self.user_dir) {
                tracing::warn!(
                    "Failed to create user themes dir {}: {}",
                    self.user_dir.display(),
                    e
                );
            }
        }
        collect_dir(&self.user_dir, &mut items, &mut seen);

        if items.is_empty() {
            tracing::debug!("No theme files found, listing built-in presets");
            return Self::builtin_items();
        }

        items.sort_by(|a, b| {
            a.display_name
                .to_lowercase()
                .cmp(&b.display_name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        tracing::debug!("Theme catalog lists {} item(s)", items.len());
        items
    }

    /// Built-in presets as a synthetic catalog
    pub fn builtin_items() -> Vec<ThemeListItem> {
        ThemeId::ALL.into_iter().map(ThemeListItem::builtin).collect()
    }

    /// Entry with exactly this raw id
    pub fn find(&self, raw_id: &str) -> Option<ThemeListItem> {
        self.list_themes().into_iter().find(|item| item.id == raw_id)
    }

    /// First entry whose id names the preset family `id`
    pub fn find_by_theme_id(&self, id: ThemeId) -> Option<ThemeListItem> {
        self.list_themes()
            .into_iter()
            .find(|item| item.theme_id() == Some(id))
    }

    /// Resolve an entry to a complete theme
    pub fn load_theme(&self, item: &ThemeListItem) -> Theme {
        match &item.source {
            ThemeSource::Builtin => presets::preset(item.theme_id().unwrap_or_default()),
            ThemeSource::File(path) => loader::load_file(path, item.theme_id()),
        }
    }

    /// Write `theme` as strict-schema JSON into the user folder
    ///
    /// The file name is a slug of `name`; an existing file is replaced.
    pub fn export(&self, theme: &Theme, name: &str) -> Result<PathBuf, String> {
        let slug = match slugify(name) {
            s if s.is_empty() => "theme".to_string(),
            s => s,
        };
        std::fs::create_dir_all(&self.user_dir).map_err(|e| {
            format!(
                "Failed to create themes directory {}: {}",
                self.user_dir.display(),
                e
            )
        })?;

        let path = self.user_dir.join(format!("{}.json", slug));
        let file = ThemeFile::from_theme(theme, theme.id.as_str(), name);
        let content = serde_json::to_string_pretty(&file)
            .map_err(|e| format!("Failed to serialize theme: {}", e))?;
        write_atomic(&path, content.as_bytes())
            .map_err(|e| format!("Failed to write theme to {}: {}", path.display(), e))?;

        tracing::info!("Exported theme '{}' to {}", name, path.display());
        Ok(path)
    }
}

/// Append the `.json` files of `dir` not already seen, in file name order
fn collect_dir(dir: &Path, items: &mut Vec<ThemeListItem>, seen: &mut HashSet<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && is_json(p))
        .collect();
    paths.sort();

    for path in paths {
        let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if !seen.insert(id.to_string()) {
            continue;
        }
        let display_name = std::fs::read(&path)
            .ok()
            .and_then(|bytes| loader::peek_header(&bytes).1)
            .unwrap_or_else(|| id.to_string());
        items.push(ThemeListItem {
            id: id.to_string(),
            display_name,
            source: ThemeSource::File(path.clone()),
        });
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
