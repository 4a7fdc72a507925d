//! JSON theme definition loading
//!
//! Decoding cascades through three stages and never fails:
//! 1. Strict schema: every field present with the right type.
//! 2. Tolerant schema: each field read on its own into a sparse [`ThemePatch`],
//!    merged over the preset of the resolved base id. Flat keys and the nested
//!    `background` / `cards` / `text` / `icons` / `controls` groups are both
//!    understood.
//! 3. Unreadable or non-object input yields the fallback preset.
//!
//! Base id resolution: a declared `id` naming a known preset wins, then the
//! caller's fallback, then [`ThemeId::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::color::Color;
use super::font::{FontDesign, FontWeight};
use super::id::ThemeId;
use super::model::Theme;
use super::presets;

/// Strict theme file: the complete flat schema, as exported
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeFile {
    pub id: String,
    pub name: String,
    pub background: String,
    pub foreground: String,
    pub secondary: String,
    pub accent: String,
    pub control_tint: String,
    pub card_start_color: String,
    pub card_end_color: String,
    pub card_start_opacity: f64,
    pub card_end_opacity: f64,
    pub corner_radius: f64,
    pub header_color: String,
    pub header_font_size: f64,
    pub header_font_weight: String,
    pub header_font_design: String,
}

impl ThemeFile {
    /// Describe `theme` in the strict schema (colors as hex)
    pub fn from_theme(theme: &Theme, id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            background: theme.background.to_hex(),
            foreground: theme.foreground.to_hex(),
            secondary: theme.secondary.to_hex(),
            accent: theme.accent.to_hex(),
            control_tint: theme.control_tint.to_hex(),
            card_start_color: theme.card_start_color.to_hex(),
            card_end_color: theme.card_end_color.to_hex(),
            card_start_opacity: theme.card_start_opacity,
            card_end_opacity: theme.card_end_opacity,
            corner_radius: theme.corner_radius,
            header_color: theme.header_color.to_hex(),
            header_font_size: theme.header_font_size,
            header_font_weight: theme.header_font_weight.name().to_string(),
            header_font_design: theme.header_font_design.name().to_string(),
        }
    }

    /// Convert to a resolved theme; any malformed value rejects the whole file
    pub fn into_theme(self, fallback: Option<ThemeId>) -> Result<Theme, String> {
        let weight = FontWeight::parse(&self.header_font_weight)
            .ok_or_else(|| format!("Unknown font weight: {}", self.header_font_weight))?;
        let design = FontDesign::parse(&self.header_font_design)
            .ok_or_else(|| format!("Unknown font design: {}", self.header_font_design))?;

        let mut theme = Theme {
            id: resolve_base_id(Some(&self.id), fallback),
            background: Color::parse(&self.background)?,
            foreground: Color::parse(&self.foreground)?,
            secondary: Color::parse(&self.secondary)?,
            accent: Color::parse(&self.accent)?,
            control_tint: Color::parse(&self.control_tint)?,
            card_start_color: Color::parse(&self.card_start_color)?,
            card_end_color: Color::parse(&self.card_end_color)?,
            card_start_opacity: self.card_start_opacity,
            card_end_opacity: self.card_end_opacity,
            corner_radius: self.corner_radius,
            header_font_size: self.header_font_size,
            header_font_weight: weight,
            header_font_design: design,
            header_color: Color::parse(&self.header_color)?,
        };
        clamp_ranges(&mut theme);
        Ok(theme)
    }
}

/// Sparse theme record produced by tolerant decoding
///
/// `None` means "inherit from the base theme".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemePatch {
    pub id: Option<String>,
    pub name: Option<String>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub secondary: Option<Color>,
    pub accent: Option<Color>,
    pub control_tint: Option<Color>,
    pub card_start_color: Option<Color>,
    pub card_end_color: Option<Color>,
    pub card_start_opacity: Option<f64>,
    pub card_end_opacity: Option<f64>,
    pub corner_radius: Option<f64>,
    pub header_color: Option<Color>,
    pub header_font_size: Option<f64>,
    pub header_font_weight: Option<FontWeight>,
    pub header_font_design: Option<FontDesign>,
}

impl ThemePatch {
    /// Read every recognizable field of a JSON object, skipping bad ones
    ///
    /// Flat keys take precedence over nested groups; within the groups,
    /// `cards` takes precedence over `background.gradient`.
    pub fn from_object(root: &Map<String, Value>) -> Self {
        let background = group(root, "background");
        let gradient = background.and_then(|bg| group(bg, "gradient"));
        let cards = group(root, "cards");
        let text = group(root, "text");
        let header = text.and_then(|t| group(t, "header"));
        let body = text.and_then(|t| group(t, "body"));
        let secondary = text.and_then(|t| group(t, "secondary"));
        let icons = group(root, "icons");
        let controls = group(root, "controls");

        let meta_name = group(root, "meta").and_then(|m| string(m, "name"));

        Self {
            id: string(root, "id"),
            name: string(root, "name").or(meta_name),
            background: color(root, "background")
                .or_else(|| background.and_then(|bg| color(bg, "color"))),
            foreground: color(root, "foreground")
                .or_else(|| body.and_then(|b| color(b, "color"))),
            secondary: color(root, "secondary")
                .or_else(|| secondary.and_then(|s| color(s, "color"))),
            accent: color(root, "accent").or_else(|| icons.and_then(|i| color(i, "color"))),
            control_tint: color(root, "controlTint")
                .or_else(|| controls.and_then(|c| color(c, "tint"))),
            card_start_color: color(root, "cardStartColor")
                .or_else(|| cards.and_then(|c| color(c, "startColor")))
                .or_else(|| gradient.and_then(|g| color(g, "startColor"))),
            card_end_color: color(root, "cardEndColor")
                .or_else(|| cards.and_then(|c| color(c, "endColor")))
                .or_else(|| gradient.and_then(|g| color(g, "endColor"))),
            card_start_opacity: number(root, "cardStartOpacity")
                .or_else(|| cards.and_then(|c| number(c, "startOpacity")))
                .or_else(|| gradient.and_then(|g| number(g, "startOpacity"))),
            card_end_opacity: number(root, "cardEndOpacity")
                .or_else(|| cards.and_then(|c| number(c, "endOpacity")))
                .or_else(|| gradient.and_then(|g| number(g, "endOpacity"))),
            corner_radius: number(root, "cornerRadius")
                .or_else(|| cards.and_then(|c| number(c, "cornerRadius"))),
            header_color: color(root, "headerColor")
                .or_else(|| header.and_then(|h| color(h, "color"))),
            header_font_size: number(root, "headerFontSize")
                .or_else(|| header.and_then(|h| number(h, "size"))),
            header_font_weight: string(root, "headerFontWeight")
                .or_else(|| header.and_then(|h| string(h, "weight")))
                .and_then(|w| FontWeight::parse(&w)),
            header_font_design: string(root, "headerFontDesign")
                .or_else(|| header.and_then(|h| string(h, "design")))
                .and_then(|d| FontDesign::parse(&d)),
        }
    }

    /// Overlay the present fields onto `base`
    pub fn merge_over(&self, mut base: Theme) -> Theme {
        fn set<T: Copy>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut base.background, self.background);
        set(&mut base.foreground, self.foreground);
        set(&mut base.secondary, self.secondary);
        set(&mut base.accent, self.accent);
        set(&mut base.control_tint, self.control_tint);
        set(&mut base.card_start_color, self.card_start_color);
        set(&mut base.card_end_color, self.card_end_color);
        set(&mut base.card_start_opacity, self.card_start_opacity);
        set(&mut base.card_end_opacity, self.card_end_opacity);
        set(&mut base.corner_radius, self.corner_radius);
        set(&mut base.header_color, self.header_color);
        set(&mut base.header_font_size, self.header_font_size);
        set(&mut base.header_font_weight, self.header_font_weight);
        set(&mut base.header_font_design, self.header_font_design);
        clamp_ranges(&mut base);
        base
    }

    /// Resolve the base preset and merge over it
    pub fn resolve(&self, fallback: Option<ThemeId>) -> Theme {
        let base_id = resolve_base_id(self.id.as_deref(), fallback);
        self.merge_over(presets::preset(base_id))
    }
}

/// Which decode stage produced a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    Strict,
    Tolerant,
    Preset,
}

/// Preset id a file's fields fall back to
pub fn resolve_base_id(declared: Option<&str>, fallback: Option<ThemeId>) -> ThemeId {
    declared
        .and_then(ThemeId::from_raw)
        .or(fallback)
        .unwrap_or_default()
}

/// Decode theme JSON, reporting which stage succeeded
pub fn decode(bytes: &[u8], fallback: Option<ThemeId>) -> (Theme, DecodeStage) {
    match serde_json::from_slice::<ThemeFile>(bytes) {
        Ok(file) => match file.into_theme(fallback) {
            Ok(theme) => return (theme, DecodeStage::Strict),
            Err(e) => tracing::debug!("Strict theme decode rejected: {}", e),
        },
        Err(e) => tracing::debug!("Strict theme schema mismatch: {}", e),
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(root)) => {
            let patch = ThemePatch::from_object(&root);
            (patch.resolve(fallback), DecodeStage::Tolerant)
        }
        Ok(_) => {
            tracing::debug!("Theme JSON root is not an object");
            (presets::preset(fallback.unwrap_or_default()), DecodeStage::Preset)
        }
        Err(e) => {
            tracing::debug!("Theme JSON unparsable: {}", e);
            (presets::preset(fallback.unwrap_or_default()), DecodeStage::Preset)
        }
    }
}

/// Decode theme JSON bytes; always returns a complete theme
pub fn load_bytes(bytes: &[u8], fallback: Option<ThemeId>) -> Theme {
    decode(bytes, fallback).0
}

/// Load a theme JSON file; unreadable files yield the fallback preset
pub fn load_file(path: &Path, fallback: Option<ThemeId>) -> Theme {
    match std::fs::read(path) {
        Ok(bytes) => {
            let (theme, stage) = decode(&bytes, fallback);
            tracing::debug!("Loaded theme {} ({:?})", path.display(), stage);
            theme
        }
        Err(e) => {
            tracing::warn!("Failed to read theme file {}: {}", path.display(), e);
            presets::preset(fallback.unwrap_or_default())
        }
    }
}

/// Header fields of a theme file: (declared id, display name)
///
/// Used by catalog listing; does not decode colors.
pub fn peek_header(bytes: &[u8]) -> (Option<String>, Option<String>) {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(root)) => {
            let name = string(&root, "name")
                .or_else(|| group(&root, "meta").and_then(|m| string(m, "name")));
            (string(&root, "id"), name)
        }
        _ => (None, None),
    }
}

fn clamp_ranges(theme: &mut Theme) {
    theme.card_start_opacity = theme.card_start_opacity.clamp(0.0, 1.0);
    theme.card_end_opacity = theme.card_end_opacity.clamp(0.0, 1.0);
    theme.corner_radius = theme.corner_radius.max(0.0);
    theme.header_font_size = theme.header_font_size.max(8.0);
}

fn group<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    obj.get(key).and_then(Value::as_object)
}

fn string(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key).and_then(Value::as_f64).filter(|n| n.is_finite())
}

fn color(obj: &Map<String, Value>, key: &str) -> Option<Color> {
    let raw = obj.get(key)?.as_str()?;
    match Color::parse(raw) {
        Ok(color) => Some(color),
        Err(e) => {
            tracing::debug!("Ignoring color field {}: {}", key, e);
            None
        }
    }
}
