//! Built-in theme identities

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a built-in preset family
///
/// Serialized as its raw id (`aetherionDark`, ...). The short family name
/// (`dark`, `sepia`, ...) is accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemeId {
    #[default]
    #[serde(rename = "aetherionDark", alias = "dark")]
    Dark,
    #[serde(rename = "aetherionLight", alias = "light")]
    Light,
    #[serde(rename = "aetherionBlue", alias = "blue")]
    Blue,
    #[serde(rename = "aetherionSepia", alias = "sepia")]
    Sepia,
    #[serde(rename = "aetherionEmerald", alias = "emerald")]
    Emerald,
}

impl ThemeId {
    /// Every preset family, in menu order
    pub const ALL: [ThemeId; 5] = [
        ThemeId::Dark,
        ThemeId::Light,
        ThemeId::Blue,
        ThemeId::Sepia,
        ThemeId::Emerald,
    ];

    /// Stable raw id used in files and preferences
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Dark => "aetherionDark",
            ThemeId::Light => "aetherionLight",
            ThemeId::Blue => "aetherionBlue",
            ThemeId::Sepia => "aetherionSepia",
            ThemeId::Emerald => "aetherionEmerald",
        }
    }

    /// Short family name (`dark`, `light`, ...)
    pub fn short_name(&self) -> &'static str {
        match self {
            ThemeId::Dark => "dark",
            ThemeId::Light => "light",
            ThemeId::Blue => "blue",
            ThemeId::Sepia => "sepia",
            ThemeId::Emerald => "emerald",
        }
    }

    /// Human readable name for menus
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeId::Dark => "Aetherion Dark",
            ThemeId::Light => "Aetherion Light",
            ThemeId::Blue => "Aetherion Blue",
            ThemeId::Sepia => "Aetherion Sepia",
            ThemeId::Emerald => "Aetherion Emerald",
        }
    }

    /// Resolve a raw or short id, case-insensitively
    ///
    /// Unknown strings resolve to `None`; callers cascade to their next tier.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|id| {
            id.as_str().eq_ignore_ascii_case(raw) || id.short_name().eq_ignore_ascii_case(raw)
        })
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_raw(s).ok_or_else(|| format!("Unknown theme id: {}", s))
    }
}
