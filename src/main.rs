use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use aetherion::cli::{self, CliArgs, Command};
use aetherion::config_paths::ThemePaths;
use aetherion::theme::{OverrideRecord, Theme, ThemeId, ThemeManager, ThemeSource};
use aetherion::AppConfig;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    aetherion::tracing::init(args.config_dir.as_ref().map(|dir| dir.join("logs")));

    let (config, paths) = match &args.config_dir {
        Some(dir) => {
            let config = AppConfig::load_from(&dir.join("config.yaml"));
            let paths = ThemePaths::self_contained(dir, config.resolved_bundle_dir());
            (config, paths)
        }
        None => {
            let config = AppConfig::load();
            let paths = ThemePaths::discover(config.resolved_bundle_dir())
                .context("No config directory available")?;
            (config, paths)
        }
    };
    tracing::debug!("Theme paths: {:?}", paths);

    let mut manager = ThemeManager::from_paths(&paths, config.default_theme)
        .with_autosave_debounce(config.autosave_debounce());

    run(args.command, &mut manager)
}

fn run(command: Command, manager: &mut ThemeManager) -> Result<()> {
    match command {
        Command::List => {
            for item in manager.catalog().list_themes() {
                let source = match &item.source {
                    ThemeSource::Builtin => "built-in".to_string(),
                    ThemeSource::File(path) => path.display().to_string(),
                };
                println!("{:<24} {:<24} {}", item.id, item.display_name, source);
            }
        }

        Command::Show { json } => {
            if json {
                let record = OverrideRecord::from_theme(manager.theme());
                println!("{}", record.to_json()?);
            } else {
                println!("source: {}", manager.startup_tier());
                print_theme(manager.theme());
            }
        }

        Command::Apply { id, no_persist } => {
            let id = ThemeId::from_str(&id).map_err(|e| anyhow!(e))?;
            manager.apply_id(id, !no_persist);
            manager.persist_current_theme_to_disk();
            println!("Applied {}", manager.theme().id.display_name());
        }

        Command::Select { entry } => {
            let item = manager
                .catalog()
                .find(&entry)
                .ok_or_else(|| anyhow!("No catalog theme with id '{}'", entry))?;
            manager.commit_entry(&item);
            println!("Selected {}", item.display_name);
        }

        Command::Set { field, value } => {
            let edit = cli::parse_edit(&field, &value).map_err(|e| anyhow!(e))?;
            manager.begin_color_editing();
            manager.edit(edit, true);
            manager.flush_pending();
            manager.end_color_editing();
            println!("Updated {}", field);
        }

        Command::Export { name } => {
            let path = manager
                .catalog()
                .export(manager.theme(), &name)
                .map_err(|e| anyhow!(e))?;
            println!("Exported to {}", path.display());
        }

        Command::Clear { all } => {
            if all {
                manager.store().purge();
                println!("Removed saved theme and its backup copy");
            } else {
                manager.store().clear();
                println!("Removed {}", manager.store().path().display());
            }
        }
    }

    Ok(())
}

fn print_theme(theme: &Theme) {
    println!("id: {} ({})", theme.id.as_str(), theme.id.display_name());
    println!("background: {}", theme.background.to_hex());
    println!("foreground: {}", theme.foreground.to_hex());
    println!("secondary: {}", theme.secondary.to_hex());
    println!("accent: {}", theme.accent.to_hex());
    println!("control tint: {}", theme.control_tint.to_hex());
    println!(
        "cards: {} @ {:.2} -> {} @ {:.2}",
        theme.card_start_color.to_hex(),
        theme.card_start_opacity,
        theme.card_end_color.to_hex(),
        theme.card_end_opacity
    );
    println!("corner radius: {}", theme.corner_radius);
    println!(
        "header: {} {} {} {}",
        theme.header_font_size,
        theme.header_font_weight,
        theme.header_font_design,
        theme.header_color.to_hex()
    );
}
