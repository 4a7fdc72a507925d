//! Command-line argument parsing
//!
//! Supports:
//! - Listing catalog themes and showing the resolved theme
//! - Applying a preset or catalog entry
//! - Single-field customization and export
//! - Clearing the saved override

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::theme::{Color, FontDesign, FontWeight, ThemeEdit};

/// Theme resolution and persistence for the Aetherion dashboard
#[derive(Parser, Debug)]
#[command(name = "aetherion", version, about = "Aetherion theme manager")]
pub struct CliArgs {
    /// Use DIR instead of the standard config directory
    #[arg(long, value_name = "DIR", global = true)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List catalog themes
    List,

    /// Print the theme resolved at startup
    Show {
        /// Print the override record JSON
        #[arg(long)]
        json: bool,
    },

    /// Switch to a preset family (e.g. `sepia`, `aetherionBlue`)
    Apply {
        #[arg(value_name = "ID")]
        id: String,

        /// Do not record ID as the selected theme
        #[arg(long)]
        no_persist: bool,
    },

    /// Commit a catalog entry by its raw id
    Select {
        #[arg(value_name = "ENTRY")]
        entry: String,
    },

    /// Change one field of the current theme and save it
    Set {
        #[arg(value_name = "FIELD")]
        field: String,

        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Export the current theme into the user themes folder
    Export {
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Delete the saved override
    Clear {
        /// Also drop the preferences mirror
        #[arg(long)]
        all: bool,
    },
}

/// Field names accepted by `set`
pub const EDIT_FIELDS: [&str; 10] = [
    "background",
    "card-opacities",
    "card-colors",
    "corner-radius",
    "header-color",
    "text",
    "secondary-text",
    "icon",
    "control-tint",
    "header-font",
];

/// Parse a `set FIELD VALUE` pair into a theme edit
///
/// Multi-part values are whitespace separated, e.g. `card-colors "#112233 #445566"`
/// or `header-font "30 heavy serif"`.
pub fn parse_edit(field: &str, value: &str) -> Result<ThemeEdit, String> {
    let parts: Vec<&str> = value.split_whitespace().collect();
    let edit = match field.trim().to_ascii_lowercase().as_str() {
        "background" => ThemeEdit::Background(Color::parse(value)?),
        "header-color" => ThemeEdit::HeaderColor(Color::parse(value)?),
        "text" => ThemeEdit::PrimaryText(Color::parse(value)?),
        "secondary-text" => ThemeEdit::SecondaryText(Color::parse(value)?),
        "icon" => ThemeEdit::Icon(Color::parse(value)?),
        "control-tint" => ThemeEdit::ControlTint(Color::parse(value)?),
        "corner-radius" => ThemeEdit::CornerRadius(number(value)?),
        "card-opacities" => match parts.as_slice() {
            [start, end] => ThemeEdit::CardOpacities {
                start: number(start)?,
                end: number(end)?,
            },
            _ => return Err("card-opacities expects two numbers".to_string()),
        },
        "card-colors" => match parts.as_slice() {
            [start, end] => ThemeEdit::CardColors {
                start: Color::parse(start)?,
                end: Color::parse(end)?,
            },
            _ => return Err("card-colors expects two colors".to_string()),
        },
        "header-font" => match parts.as_slice() {
            [size, weight, design] => ThemeEdit::HeaderFont {
                size: number(size)?,
                weight: FontWeight::parse(weight)
                    .ok_or_else(|| format!("Unknown font weight: {}", weight))?,
                design: FontDesign::parse(design)
                    .ok_or_else(|| format!("Unknown font design: {}", design))?,
            },
            _ => return Err("header-font expects SIZE WEIGHT DESIGN".to_string()),
        },
        other => {
            return Err(format!(
                "Unknown field '{}' (expected one of: {})",
                other,
                EDIT_FIELDS.join(", ")
            ))
        }
    };
    Ok(edit)
}

fn number(s: &str) -> Result<f64, String> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| format!("Invalid number: {}", s))
}
