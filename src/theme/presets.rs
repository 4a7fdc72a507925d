//! Hardcoded preset palettes
//!
//! `preset` is an exhaustive match, so adding a [`ThemeId`] variant without a
//! palette does not compile.

use super::color::Color;
use super::font::{FontDesign, FontWeight};
use super::id::ThemeId;
use super::model::Theme;

const HEADER_FONT_SIZE: f64 = 28.0;
const CORNER_RADIUS: f64 = 16.0;

/// Built-in theme for `id`
pub fn preset(id: ThemeId) -> Theme {
    match id {
        ThemeId::Dark => Theme {
            id,
            background: Color::BLACK,
            foreground: Color::WHITE,
            secondary: Color::WHITE.with_alpha(0.7),
            accent: Color::WHITE.with_alpha(0.85),
            control_tint: Color::WHITE.with_alpha(0.85),
            card_start_color: Color::WHITE,
            card_end_color: Color::WHITE,
            card_start_opacity: 0.30,
            card_end_opacity: 0.10,
            corner_radius: CORNER_RADIUS,
            header_font_size: HEADER_FONT_SIZE,
            header_font_weight: FontWeight::Bold,
            header_font_design: FontDesign::Rounded,
            header_color: Color::WHITE,
        },
        ThemeId::Light => Theme {
            id,
            background: Color::WHITE,
            foreground: Color::BLACK,
            secondary: Color::BLACK.with_alpha(0.7),
            accent: Color::BLACK.with_alpha(0.85),
            control_tint: Color::BLACK.with_alpha(0.85),
            card_start_color: Color::BLACK,
            card_end_color: Color::BLACK,
            card_start_opacity: 0.08,
            card_end_opacity: 0.02,
            corner_radius: CORNER_RADIUS,
            header_font_size: HEADER_FONT_SIZE,
            header_font_weight: FontWeight::Bold,
            header_font_design: FontDesign::Rounded,
            header_color: Color::BLACK,
        },
        // Deep blue, light text
        ThemeId::Blue => {
            let sky = Color::rgb(0.55, 0.80, 1.00);
            Theme {
                id,
                background: Color::rgb(0.06, 0.10, 0.20),
                foreground: Color::WHITE,
                secondary: Color::WHITE.with_alpha(0.75),
                accent: sky,
                control_tint: sky,
                card_start_color: Color::WHITE,
                card_end_color: Color::WHITE,
                card_start_opacity: 0.28,
                card_end_opacity: 0.10,
                corner_radius: CORNER_RADIUS,
                header_font_size: HEADER_FONT_SIZE,
                header_font_weight: FontWeight::Bold,
                header_font_design: FontDesign::Rounded,
                header_color: Color::WHITE,
            }
        }
        // Paper tones, dark brown text
        ThemeId::Sepia => {
            let ink = Color::rgb(0.18, 0.15, 0.12);
            let sepia = Color::rgb(0.60, 0.42, 0.24);
            Theme {
                id,
                background: Color::rgb(0.96, 0.93, 0.86),
                foreground: ink,
                secondary: ink.with_alpha(0.7),
                accent: sepia,
                control_tint: sepia,
                card_start_color: Color::BLACK,
                card_end_color: Color::BLACK,
                card_start_opacity: 0.10,
                card_end_opacity: 0.03,
                corner_radius: CORNER_RADIUS,
                header_font_size: HEADER_FONT_SIZE,
                header_font_weight: FontWeight::Bold,
                header_font_design: FontDesign::Rounded,
                header_color: ink,
            }
        }
        // Dark emerald, light text
        ThemeId::Emerald => {
            let emerald = Color::rgb(0.40, 0.95, 0.70);
            Theme {
                id,
                background: Color::rgb(0.02, 0.16, 0.12),
                foreground: Color::WHITE,
                secondary: Color::WHITE.with_alpha(0.75),
                accent: emerald,
                control_tint: emerald,
                card_start_color: Color::WHITE,
                card_end_color: Color::WHITE,
                card_start_opacity: 0.26,
                card_end_opacity: 0.10,
                corner_radius: CORNER_RADIUS,
                header_font_size: HEADER_FONT_SIZE,
                header_font_weight: FontWeight::Bold,
                header_font_design: FontDesign::Rounded,
                header_color: Color::WHITE,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_carries_its_id() {
        for id in ThemeId::ALL {
            assert_eq!(preset(id).id, id);
        }
    }

    #[test]
    fn test_presets_are_stable() {
        for id in ThemeId::ALL {
            assert_eq!(preset(id), preset(id));
        }
    }

    #[test]
    fn test_presets_are_distinct() {
        for a in ThemeId::ALL {
            for b in ThemeId::ALL {
                if a != b {
                    assert_ne!(preset(a).background, preset(b).background);
                }
            }
        }
    }
}
