//! Color values and their string/RGBA encodings
//!
//! Theme files describe colors as `#RRGGBB`, `#RRGGBBAA`, a handful of named
//! literals, or `rgba(r, g, b, a)`. The override record stores the expanded
//! `(r, g, b, a)` quadruple with every channel in `[0, 1]`.

use serde::{Deserialize, Serialize};

/// sRGB color with floating point channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Expanded channel quadruple as written to the override record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.556_862_745, 0.556_862_745, 0.576_470_588);
    pub const RED: Color = Color::rgb(1.0, 0.231_372_549, 0.188_235_294);
    pub const GREEN: Color = Color::rgb(0.203_921_569, 0.780_392_157, 0.349_019_608);
    pub const BLUE: Color = Color::rgb(0.0, 0.478_431_373, 1.0);

    /// Opaque color from channel values
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color from channel values including alpha
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Color from 8-bit channels
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
            a: f64::from(a) / 255.0,
        }
    }

    /// Return a new color with the specified alpha value
    pub const fn with_alpha(&self, a: f64) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string (the `#` is optional)
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("{}: {}", s, e))
        };
        match hex.len() {
            6 => Ok(Color::from_rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
            8 => Ok(Color::from_rgba8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Convenience literals accepted in theme files
    pub fn named(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "gray" | "grey" => Some(Self::GRAY),
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "blue" => Some(Self::BLUE),
            _ => None,
        }
    }

    /// Parse any color notation a theme file may contain
    ///
    /// Accepts hex (`#RRGGBB`, `#RRGGBBAA`), the named literals, and
    /// `rgba(r, g, b, a)` with 0-255 channels and a 0-1 alpha.
    pub fn parse(s: &str) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Empty color".to_string());
        }
        if let Some(color) = Self::named(trimmed) {
            return Ok(color);
        }
        let lower = trimmed.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::from_css_rgba(args).ok_or_else(|| format!("Invalid rgba color: {}", s));
        }
        Self::from_hex(trimmed)
    }

    fn from_css_rgba(args: &str) -> Option<Self> {
        let parts: Vec<f64> = args
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .ok()?;
        match parts.as_slice() {
            [r, g, b, a] if parts.iter().all(|v| v.is_finite()) => Some(Self::rgba(
                (r / 255.0).clamp(0.0, 1.0),
                (g / 255.0).clamp(0.0, 1.0),
                (b / 255.0).clamp(0.0, 1.0),
                a.clamp(0.0, 1.0),
            )),
            _ => None,
        }
    }

    /// Channel extraction for persistence
    ///
    /// A color whose channels cannot be represented (NaN or infinite) degrades
    /// to opaque white instead of failing.
    pub fn to_rgba(&self) -> Rgba {
        let channels = [self.r, self.g, self.b, self.a];
        if channels.iter().any(|c| !c.is_finite()) {
            return Rgba {
                r: 1.0,
                g: 1.0,
                b: 1.0,
                a: 1.0,
            };
        }
        Rgba {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Rebuild a color from a persisted quadruple
    pub fn from_rgba(rgba: Rgba) -> Self {
        Self::rgba(rgba.r, rgba.g, rgba.b, rgba.a)
    }

    /// Render as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque
    pub fn to_hex(&self) -> String {
        let c = self.to_rgba();
        let byte = |v: f64| (v * 255.0).round() as u8;
        if byte(c.a) == 255 {
            format!("#{:02X}{:02X}{:02X}", byte(c.r), byte(c.g), byte(c.b))
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                byte(c.r),
                byte(c.g),
                byte(c.b),
                byte(c.a)
            )
        }
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::from_rgba(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_without_hash() {
        let color = Color::from_hex("FF0000").unwrap();
        assert_eq!(color, Color::rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_hex_is_case_insensitive() {
        assert_eq!(
            Color::from_hex("#aabbcc").unwrap(),
            Color::from_hex("#AABBCC").unwrap()
        );
    }

    #[test]
    fn test_hex_rejects_other_lengths() {
        assert!(Color::from_hex("#FFF").is_err());
        assert!(Color::from_hex("#FFFFFFF").is_err());
        assert!(Color::from_hex("").is_err());
    }

    #[test]
    fn test_hex_rejects_non_ascii() {
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_hex_rejects_sign_characters() {
        assert!(Color::from_hex("#+1+2+3").is_err());
        assert!(Color::from_hex("-1-2-3").is_err());
        assert!(Color::from_hex("#FF FF FF").is_err());
        assert!(Color::parse("#+1+2+3+4").is_err());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(Color::parse("Black").unwrap(), Color::BLACK);
        assert_eq!(Color::parse(" grey ").unwrap(), Color::GRAY);
        assert!(Color::parse("purple").is_err());
    }

    #[test]
    fn test_parse_css_rgba() {
        let color = Color::parse("rgba(255, 0, 51, 0.5)").unwrap();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.2);
        assert_eq!(color.a, 0.5);
        assert!(Color::parse("rgba(1,2,3)").is_err());
    }

    #[test]
    fn test_to_rgba_degrades_to_white() {
        let broken = Color::rgba(f64::NAN, 0.0, 0.0, 1.0);
        assert_eq!(Color::from(broken.to_rgba()), Color::WHITE);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::from_hex("#1E1E1E").unwrap().to_hex(), "#1E1E1E");
        assert_eq!(Color::from_hex("#1E1E1E80").unwrap().to_hex(), "#1E1E1E80");
    }
}
