//! Theme system
//!
//! Resolves the theme shown by the dashboard from four layers:
//! 1. Override: the in-progress customization saved as `theme.json`
//!    (with a mirror copy in the preferences store)
//! 2. Catalog: theme JSON files bundled with the app or dropped into the
//!    user's `Themes/` folder
//! 3. Persisted selection: the last chosen preset id or catalog entry
//! 4. Presets: hardcoded palettes, one per [`ThemeId`]
//!
//! [`ThemeManager`] owns the current theme and coordinates the layers.

pub mod catalog;
pub mod color;
pub mod font;
pub mod id;
pub mod loader;
pub mod manager;
pub mod model;
pub mod presets;
pub mod resolver;
pub mod store;

pub use catalog::{ThemeCatalog, ThemeListItem, ThemeSource};
pub use color::{Color, Rgba};
pub use font::{FontDesign, FontWeight};
pub use id::ThemeId;
pub use manager::ThemeManager;
pub use model::{Theme, ThemeEdit};
pub use presets::preset;
pub use store::{OverrideRecord, OverrideStore};
