//! Ordered theme resolution
//!
//! Each source of truth (override, catalog, persisted selection) is a
//! [`ThemeResolver`] answering "a theme for this id, if I have one". A
//! [`ResolverChain`] asks them in priority order and ends at the preset
//! registry, which always answers.

use super::catalog::ThemeCatalog;
use super::id::ThemeId;
use super::model::Theme;
use super::presets;
use super::store::OverrideStore;
use crate::prefs::{keys, Preferences};

/// One tier of the resolution pipeline
pub trait ThemeResolver {
    /// Short label for diagnostics
    fn name(&self) -> &'static str;

    /// A theme for `requested`, or `None` to defer to the next tier
    fn resolve(&self, requested: ThemeId) -> Option<Theme>;
}

/// Saved override, whatever its id (startup tier 1)
pub struct AnyOverride<'a>(pub &'a OverrideStore);

impl ThemeResolver for AnyOverride<'_> {
    fn name(&self) -> &'static str {
        "override"
    }

    fn resolve(&self, _requested: ThemeId) -> Option<Theme> {
        self.0.load_or_mirror()
    }
}

/// Saved override, only if it belongs to the requested family
pub struct MatchingOverride<'a>(pub &'a OverrideStore);

impl ThemeResolver for MatchingOverride<'_> {
    fn name(&self) -> &'static str {
        "matching override"
    }

    fn resolve(&self, requested: ThemeId) -> Option<Theme> {
        self.0.load_or_mirror().filter(|t| t.id == requested)
    }
}

/// Catalog entry whose id names the requested family
pub struct MatchingCatalogEntry<'a>(pub &'a ThemeCatalog);

impl ThemeResolver for MatchingCatalogEntry<'_> {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn resolve(&self, requested: ThemeId) -> Option<Theme> {
        let item = self.0.find_by_theme_id(requested)?;
        Some(self.0.load_theme(&item))
    }
}

/// Last selected raw catalog entry, if it is still listed (startup tier 2)
pub struct SelectedCatalogEntry<'a> {
    pub catalog: &'a ThemeCatalog,
    pub prefs: &'a Preferences,
}

impl ThemeResolver for SelectedCatalogEntry<'_> {
    fn name(&self) -> &'static str {
        "selected entry"
    }

    fn resolve(&self, _requested: ThemeId) -> Option<Theme> {
        let raw = self.prefs.get_string(keys::SELECTED_ENTRY_ID)?;
        match self.catalog.find(&raw) {
            Some(item) => Some(self.catalog.load_theme(&item)),
            None => {
                tracing::debug!("Selected theme entry '{}' no longer listed", raw);
                None
            }
        }
    }
}

/// Last persisted preset id, resolved with the load-for-id rule (startup tier 3)
pub struct PersistedThemeId<'a> {
    pub store: &'a OverrideStore,
    pub catalog: &'a ThemeCatalog,
    pub prefs: &'a Preferences,
}

impl ThemeResolver for PersistedThemeId<'_> {
    fn name(&self) -> &'static str {
        "persisted id"
    }

    fn resolve(&self, _requested: ThemeId) -> Option<Theme> {
        let raw = self.prefs.get_string(keys::SELECTED_THEME_ID)?;
        let Some(id) = ThemeId::from_raw(&raw) else {
            tracing::debug!("Persisted theme id '{}' is unknown", raw);
            return None;
        };
        Some(ResolverChain::load_for_id(self.store, self.catalog).resolve(id))
    }
}

/// Resolvers evaluated in order, terminating at the preset registry
#[derive(Default)]
pub struct ResolverChain<'a> {
    steps: Vec<Box<dyn ThemeResolver + 'a>>,
}

impl<'a> ResolverChain<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a lower-priority tier
    pub fn then(mut self, step: impl ThemeResolver + 'a) -> Self {
        self.steps.push(Box::new(step));
        self
    }

    /// Tier names in evaluation order (the preset tier is implicit)
    pub fn tiers(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Resolve `requested`, reporting which tier answered
    pub fn resolve_with_tier(&self, requested: ThemeId) -> (Theme, &'static str) {
        for step in &self.steps {
            if let Some(theme) = step.resolve(requested) {
                return (theme, step.name());
            }
        }
        (presets::preset(requested), "preset")
    }

    pub fn resolve(&self, requested: ThemeId) -> Theme {
        self.resolve_with_tier(requested).0
    }

    /// Override with matching id, then matching catalog entry, then preset
    pub fn load_for_id(store: &'a OverrideStore, catalog: &'a ThemeCatalog) -> Self {
        Self::new()
            .then(MatchingOverride(store))
            .then(MatchingCatalogEntry(catalog))
    }

    /// Startup order: override, selected entry, persisted id, then the
    /// requested default preset
    pub fn startup(
        store: &'a OverrideStore,
        catalog: &'a ThemeCatalog,
        prefs: &'a Preferences,
    ) -> Self {
        Self::new()
            .then(AnyOverride(store))
            .then(SelectedCatalogEntry { catalog, prefs })
            .then(PersistedThemeId {
                store,
                catalog,
                prefs,
            })
    }
}
