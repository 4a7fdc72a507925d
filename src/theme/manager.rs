//! Theme manager: the single owner of the current theme
//!
//! Created once at the application root and handed to whatever renders the
//! theme. Mutations are synchronous. Disk writes are best-effort: a failed
//! write is logged and the in-memory theme stays as set.
//!
//! The manager is either idle or editing; editing only means the
//! "unsaved changes" flag is raised.

use std::time::{Duration, Instant};

use super::catalog::{ThemeCatalog, ThemeListItem};
use super::id::ThemeId;
use super::model::{Theme, ThemeEdit};
use super::resolver::ResolverChain;
use super::store::OverrideStore;
use crate::config_paths::ThemePaths;
use crate::prefs::{keys, Preferences};

pub struct ThemeManager {
    theme: Theme,
    color_modified: bool,
    /// Theme before the current editing session began
    rollback: Option<Theme>,
    catalog: ThemeCatalog,
    store: OverrideStore,
    prefs: Preferences,
    /// Minimum spacing between live-preview autosave writes
    autosave_debounce: Duration,
    last_autosave: Option<Instant>,
    /// Draft held back by the debounce, written on the next flush
    pending_autosave: Option<Theme>,
    revision: u64,
    startup_tier: &'static str,
}

impl ThemeManager {
    /// Resolve the startup theme and take ownership of the collaborators
    ///
    /// Priority: saved override (file, then mirror), last selected catalog
    /// entry, last persisted preset id, then `default_id`'s preset.
    pub fn new(
        default_id: ThemeId,
        catalog: ThemeCatalog,
        store: OverrideStore,
        prefs: Preferences,
    ) -> Self {
        let (theme, tier) =
            ResolverChain::startup(&store, &catalog, &prefs).resolve_with_tier(default_id);
        tracing::info!("Startup theme {} (from {})", theme.id, tier);

        Self {
            theme,
            color_modified: false,
            rollback: None,
            catalog,
            store,
            prefs,
            autosave_debounce: Duration::ZERO,
            last_autosave: None,
            pending_autosave: None,
            revision: 0,
            startup_tier: tier,
        }
    }

    /// Manager over the standard collaborators at `paths`
    pub fn from_paths(paths: &ThemePaths, default_id: ThemeId) -> Self {
        let prefs = Preferences::open(&paths.preferences_file);
        let store = OverrideStore::new(&paths.override_dirs, prefs.clone());
        let catalog = ThemeCatalog::from_paths(paths);
        Self::new(default_id, catalog, store, prefs)
    }

    /// Space out live-preview autosave writes by at least `interval`
    pub fn with_autosave_debounce(mut self, interval: Duration) -> Self {
        self.autosave_debounce = interval;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Copy of the current theme, for a later [`ThemeManager::restore`]
    pub fn snapshot(&self) -> Theme {
        self.theme.clone()
    }

    /// Unsaved customization in progress
    pub fn is_color_modified(&self) -> bool {
        self.color_modified
    }

    /// Bumped on every change of the theme or the modified flag
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resolution tier that produced the startup theme
    pub fn startup_tier(&self) -> &'static str {
        self.startup_tier
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &OverrideStore {
        &self.store
    }

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn has_pending_autosave(&self) -> bool {
        self.pending_autosave.is_some()
    }

    /// Theme for `id`: matching override, then matching catalog entry, then preset
    pub fn load_for_id(&self, id: ThemeId) -> Theme {
        ResolverChain::load_for_id(&self.store, &self.catalog).resolve(id)
    }

    /// Replace the current theme in memory only (live preview, no write)
    pub fn apply_theme(&mut self, theme: Theme) {
        self.set_current(theme, self.color_modified);
    }

    /// Switch to the theme resolved for `id`, clearing the modified flag
    ///
    /// With `persist_id`, `id` becomes the persisted selection.
    pub fn apply_id(&mut self, id: ThemeId, persist_id: bool) {
        let theme = self.load_for_id(id);
        self.rollback = None;
        self.set_current(theme, false);
        if persist_id {
            self.persist_selection(Some(id), None);
        }
    }

    /// Enter editing: raise the modified flag and remember the pre-edit theme
    pub fn begin_color_editing(&mut self) {
        if self.rollback.is_none() {
            self.rollback = Some(self.theme.clone());
        }
        self.mark_modified();
    }

    /// Raise the modified flag without touching the theme
    pub fn mark_modified(&mut self) {
        if !self.color_modified {
            self.color_modified = true;
            self.revision += 1;
        }
    }

    /// Leave editing, keeping the edited values
    pub fn end_color_editing(&mut self) {
        self.rollback = None;
        if self.color_modified {
            self.color_modified = false;
            self.revision += 1;
        }
    }

    /// Leave editing and go back to the pre-edit theme
    ///
    /// Without a recorded pre-edit theme, the current family's resolved
    /// theme is restored.
    pub fn cancel_color_editing(&mut self) {
        let snapshot = match self.rollback.take() {
            Some(theme) => theme,
            None => self.load_for_id(self.theme.id),
        };
        self.restore(snapshot);
    }

    /// Write the current theme to the override store; selection is untouched
    pub fn persist_current_theme_to_disk(&mut self) {
        self.pending_autosave = None;
        self.write_through();
    }

    /// Show `theme` as an unsaved edit, optionally autosaving the draft
    pub fn live_preview(&mut self, theme: Theme, autosave: bool) {
        self.set_current(theme, true);
        if autosave {
            self.autosave();
        }
    }

    /// Live-preview a single targeted change on top of the current theme
    pub fn edit(&mut self, edit: ThemeEdit, autosave: bool) {
        let theme = self.theme.clone().with(edit);
        self.live_preview(theme, autosave);
    }

    /// Make `theme` current and durable; with `id`, record it as the selection
    pub fn commit_theme(&mut self, theme: Theme, id: Option<ThemeId>) {
        self.rollback = None;
        self.pending_autosave = None;
        self.set_current(theme, false);
        self.write_through();
        if id.is_some() {
            self.persist_selection(id, None);
        }
    }

    /// Commit the theme of a catalog entry, recording its raw id
    pub fn commit_entry(&mut self, item: &ThemeListItem) {
        let theme = self.catalog.load_theme(item);
        self.rollback = None;
        self.pending_autosave = None;
        self.set_current(theme, false);
        self.write_through();
        self.persist_selection(item.theme_id(), Some(&item.id));
    }

    /// Return to `snapshot` and write it through so a stale draft cannot
    /// come back on the next start
    pub fn restore(&mut self, snapshot: Theme) {
        self.rollback = None;
        self.pending_autosave = None;
        self.set_current(snapshot, false);
        self.write_through();
    }

    /// Write a draft held back by the autosave debounce
    pub fn flush_pending(&mut self) {
        if let Some(draft) = self.pending_autosave.take() {
            self.save_draft(&draft);
        }
    }

    fn set_current(&mut self, theme: Theme, modified: bool) {
        if self.theme != theme || self.color_modified != modified {
            self.revision += 1;
        }
        self.theme = theme;
        self.color_modified = modified;
    }

    fn autosave(&mut self) {
        let due = self.autosave_debounce.is_zero()
            || self
                .last_autosave
                .map_or(true, |at| at.elapsed() >= self.autosave_debounce);
        if due {
            self.pending_autosave = None;
            let draft = self.theme.clone();
            self.save_draft(&draft);
        } else {
            self.pending_autosave = Some(self.theme.clone());
        }
    }

    fn save_draft(&mut self, draft: &Theme) {
        self.last_autosave = Some(Instant::now());
        if let Err(e) = self.store.save(draft) {
            tracing::warn!("Failed to autosave theme draft: {}", e);
        }
    }

    fn write_through(&mut self) {
        match self.store.save(&self.theme) {
            Ok(()) => tracing::info!(
                "Saved theme {} to {}",
                self.theme.id,
                self.store.path().display()
            ),
            Err(e) => tracing::warn!("Failed to save theme override: {}", e),
        }
    }

    fn persist_selection(&self, id: Option<ThemeId>, entry: Option<&str>) {
        let result = match id {
            Some(id) => self.prefs.set_string(keys::SELECTED_THEME_ID, id.as_str()),
            None => Ok(()),
        }
        .and_then(|()| match entry {
            Some(raw) => self.prefs.set_string(keys::SELECTED_ENTRY_ID, raw),
            None => self.prefs.remove(keys::SELECTED_ENTRY_ID),
        });
        if let Err(e) = result {
            tracing::warn!("Failed to persist theme selection: {}", e);
        }
    }
}

impl Drop for ThemeManager {
    fn drop(&mut self) {
        self.flush_pending();
    }
}
