//! Header typography vocabulary
//!
//! Weight and design names are matched case-insensitively. `from_name` is
//! total (unknown names map to `Regular` / `Default`); `parse` reports unknown
//! names so the tolerant loader can fall back to the base theme instead.

use std::fmt;

/// Font weight, lightest to heaviest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    pub const ALL: [FontWeight; 9] = [
        FontWeight::UltraLight,
        FontWeight::Thin,
        FontWeight::Light,
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
        FontWeight::Heavy,
        FontWeight::Black,
    ];

    /// Recognize a weight name, `None` if unknown
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(name))
    }

    /// Total mapping: unknown names become `Regular`
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Canonical name as written to theme and override files
    pub fn name(&self) -> &'static str {
        match self {
            FontWeight::UltraLight => "ultraLight",
            FontWeight::Thin => "thin",
            FontWeight::Light => "light",
            FontWeight::Regular => "regular",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
            FontWeight::Heavy => "heavy",
            FontWeight::Black => "black",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Font design (family style)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontDesign {
    #[default]
    Default,
    Serif,
    Rounded,
    Monospaced,
}

impl FontDesign {
    pub const ALL: [FontDesign; 4] = [
        FontDesign::Default,
        FontDesign::Serif,
        FontDesign::Rounded,
        FontDesign::Monospaced,
    ];

    /// Recognize a design name (`mono` is accepted for `monospaced`)
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Some(FontDesign::Default),
            "serif" => Some(FontDesign::Serif),
            "rounded" => Some(FontDesign::Rounded),
            "monospaced" | "mono" => Some(FontDesign::Monospaced),
            _ => None,
        }
    }

    /// Total mapping: unknown names become `Default`
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    pub fn name(&self) -> &'static str {
        match self {
            FontDesign::Default => "default",
            FontDesign::Serif => "serif",
            FontDesign::Rounded => "rounded",
            FontDesign::Monospaced => "monospaced",
        }
    }
}

impl fmt::Display for FontDesign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
