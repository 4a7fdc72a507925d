//! Aetherion - theme resolution and persistence core
//!
//! This crate resolves which visual theme the dashboard shows, lets the user
//! preview and customize it, and persists the result across launches.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod prefs;
pub mod theme;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::AppConfig;
pub use prefs::Preferences;
pub use theme::{Theme, ThemeId, ThemeManager};
