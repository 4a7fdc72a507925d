//! The resolved theme value

use super::color::Color;
use super::font::{FontDesign, FontWeight};
use super::id::ThemeId;
use super::presets;

/// Complete set of colors, card gradient and header typography
///
/// Every field is always populated; partial themes only exist as a
/// [`ThemePatch`](super::loader::ThemePatch) before being merged over a base.
/// Equality compares every field; use [`Theme::same_family`] to compare ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub id: ThemeId,
    pub background: Color,
    /// Primary text
    pub foreground: Color,
    /// Subtitles and secondary info
    pub secondary: Color,
    /// Icons and active elements
    pub accent: Color,
    /// Toggles, sliders, progress and radio controls
    pub control_tint: Color,

    pub card_start_color: Color,
    pub card_end_color: Color,
    pub card_start_opacity: f64,
    pub card_end_opacity: f64,
    pub corner_radius: f64,

    pub header_font_size: f64,
    pub header_font_weight: FontWeight,
    pub header_font_design: FontDesign,
    pub header_color: Color,
}

impl Theme {
    /// The built-in preset for `id`
    pub fn preset(id: ThemeId) -> Self {
        presets::preset(id)
    }

    /// Same preset family, regardless of customization
    pub fn same_family(&self, other: &Theme) -> bool {
        self.id == other.id
    }

    /// True when no field differs from this theme's own preset
    pub fn matches_preset(&self) -> bool {
        *self == presets::preset(self.id)
    }

    /// Card gradient stops (leading, trailing) with opacities applied
    pub fn card_gradient(&self) -> (Color, Color) {
        (
            self.card_start_color.with_alpha(self.card_start_opacity),
            self.card_end_color.with_alpha(self.card_end_opacity),
        )
    }

    /// Primary button gradient stops, derived from the accent
    pub fn primary_button_gradient(&self) -> (Color, Color) {
        (self.accent.with_alpha(0.95), self.accent.with_alpha(0.75))
    }

    /// Apply a single targeted edit in place
    pub fn apply(&mut self, edit: ThemeEdit) {
        match edit {
            ThemeEdit::Background(color) => self.background = color,
            ThemeEdit::CardOpacities { start, end } => {
                self.card_start_opacity = start.clamp(0.0, 1.0);
                self.card_end_opacity = end.clamp(0.0, 1.0);
            }
            ThemeEdit::CardColors { start, end } => {
                self.card_start_color = start;
                self.card_end_color = end;
            }
            ThemeEdit::CornerRadius(radius) => self.corner_radius = radius.max(0.0),
            ThemeEdit::HeaderColor(color) => self.header_color = color,
            ThemeEdit::PrimaryText(color) => self.foreground = color,
            ThemeEdit::SecondaryText(color) => self.secondary = color,
            ThemeEdit::Icon(color) => self.accent = color,
            ThemeEdit::ControlTint(color) => self.control_tint = color,
            ThemeEdit::HeaderFont {
                size,
                weight,
                design,
            } => {
                self.header_font_size = size.max(8.0);
                self.header_font_weight = weight;
                self.header_font_design = design;
            }
        }
    }

    /// Copy with `edit` applied
    pub fn with(mut self, edit: ThemeEdit) -> Self {
        self.apply(edit);
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        presets::preset(ThemeId::default())
    }
}

/// One targeted change from the customization screens
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeEdit {
    Background(Color),
    CardOpacities {
        start: f64,
        end: f64,
    },
    CardColors {
        start: Color,
        end: Color,
    },
    CornerRadius(f64),
    HeaderColor(Color),
    PrimaryText(Color),
    SecondaryText(Color),
    /// Icons share the accent color
    Icon(Color),
    ControlTint(Color),
    HeaderFont {
        size: f64,
        weight: FontWeight,
        design: FontDesign,
    },
}
