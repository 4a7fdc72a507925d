//! Theme catalog discovery tests

mod common;

use aetherion::theme::{preset, ThemeCatalog, ThemeId, ThemeSource};
use common::{Sandbox, STRICT_SEPIA};

#[test]
fn test_empty_catalog_lists_presets() {
    let sandbox = Sandbox::new();
    let items = sandbox.catalog().list_themes();

    assert_eq!(items.len(), ThemeId::ALL.len());
    assert!(items.iter().all(|item| item.source == ThemeSource::Builtin));
}

#[test]
fn test_listing_creates_user_dir() {
    let sandbox = Sandbox::new();
    assert!(!sandbox.paths.user_themes_dir.exists());
    sandbox.catalog().list_themes();
    assert!(sandbox.paths.user_themes_dir.is_dir());
}

#[test]
fn test_bundled_entry_wins_over_user_entry() {
    let sandbox = Sandbox::with_bundle();
    let bundled = sandbox.write_bundle_theme("paper.json", STRICT_SEPIA);
    sandbox.write_user_theme("paper.json", r#"{ "name": "My Paper" }"#);

    let items = sandbox.catalog().list_themes();
    let matches: Vec<_> = items.iter().filter(|item| item.id == "paper").collect();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].source, ThemeSource::File(bundled));
    assert_eq!(matches[0].display_name, "Paper");
}

#[test]
fn test_bundle_themes_subdir_wins_over_bundle_root() {
    let sandbox = Sandbox::with_bundle();
    let in_subdir = sandbox.write_bundle_theme("neo.json", r#"{ "name": "Neo A" }"#);
    let root = sandbox.paths.bundle_dir.clone().unwrap();
    std::fs::write(root.join("neo.json"), r#"{ "name": "Neo B" }"#).unwrap();

    let item = sandbox.catalog().find("neo").unwrap();
    assert_eq!(item.path(), Some(in_subdir.as_path()));
}

#[test]
fn test_listing_sorted_case_insensitively() {
    let sandbox = Sandbox::new();
    sandbox.write_user_theme("a.json", r#"{ "name": "zephyr" }"#);
    sandbox.write_user_theme("b.json", r#"{ "name": "Aurora" }"#);
    sandbox.write_user_theme("c.json", r#"{ "meta": { "name": "midnight" } }"#);
    sandbox.write_user_theme("d.json", "not json");

    let names: Vec<_> = sandbox
        .catalog()
        .list_themes()
        .into_iter()
        .map(|item| item.display_name)
        .collect();
    assert_eq!(names, vec!["Aurora", "d", "midnight", "zephyr"]);
}

#[test]
fn test_find_by_theme_id_uses_file_stem() {
    let sandbox = Sandbox::new();
    sandbox.write_user_theme("aetherionSepia.json", STRICT_SEPIA);
    sandbox.write_user_theme("paper.json", STRICT_SEPIA);

    let catalog = sandbox.catalog();
    let item = catalog.find_by_theme_id(ThemeId::Sepia).unwrap();
    assert_eq!(item.id, "aetherionSepia");
    assert!(catalog.find_by_theme_id(ThemeId::Blue).is_none());
}

#[test]
fn test_load_unreadable_entry_falls_back_to_preset() {
    let sandbox = Sandbox::new();
    let path = sandbox.write_user_theme("aetherionEmerald.json", "{ broken");

    let catalog = sandbox.catalog();
    let item = catalog.find("aetherionEmerald").unwrap();
    assert_eq!(item.path(), Some(path.as_path()));
    assert_eq!(catalog.load_theme(&item), preset(ThemeId::Emerald));
}

#[test]
fn test_export_appears_in_listing() {
    let sandbox = Sandbox::new();
    let catalog = sandbox.catalog();
    let theme = preset(ThemeId::Blue);

    let path = catalog.export(&theme, "My Ocean Theme").unwrap();
    assert_eq!(path.file_name().unwrap(), "my-ocean-theme.json");

    let item = catalog.find("my-ocean-theme").unwrap();
    assert_eq!(item.display_name, "My Ocean Theme");

    let loaded = catalog.load_theme(&item);
    assert_eq!(loaded.id, ThemeId::Blue);
    assert_eq!(loaded.background.to_hex(), theme.background.to_hex());
    assert_eq!(loaded.corner_radius, theme.corner_radius);
}

#[test]
fn test_builtin_items_load_presets() {
    let catalog = ThemeCatalog::new(None, tempfile::tempdir().unwrap().path().join("Themes"));
    for item in ThemeCatalog::builtin_items() {
        let id = item.theme_id().unwrap();
        assert_eq!(catalog.load_theme(&item), preset(id));
    }
}
