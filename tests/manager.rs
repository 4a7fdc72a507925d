//! Theme manager tests: startup resolution, preview, commit and rollback

mod common;

use std::time::Duration;

use aetherion::prefs::keys;
use aetherion::theme::{preset, Color, ThemeEdit, ThemeId, ThemeManager};
use common::{Sandbox, STRICT_SEPIA};

// ========================================================================
// Startup Resolution
// ========================================================================

#[test]
fn test_fresh_install_starts_with_default_preset() {
    let sandbox = Sandbox::new();
    let manager = sandbox.launch();

    assert_eq!(manager.theme(), &preset(ThemeId::Dark));
    assert_eq!(manager.startup_tier(), "preset");
    assert!(!manager.is_color_modified());
}

#[test]
fn test_default_id_is_caller_supplied() {
    let sandbox = Sandbox::new();
    let manager = ThemeManager::from_paths(&sandbox.paths, ThemeId::Light);
    assert_eq!(manager.theme(), &preset(ThemeId::Light));
}

#[test]
fn test_override_beats_persisted_id() {
    let sandbox = Sandbox::new();
    let sepia = preset(ThemeId::Sepia).with(ThemeEdit::CornerRadius(4.0));
    sandbox.store().save(&sepia).unwrap();
    sandbox
        .prefs()
        .set_string(keys::SELECTED_THEME_ID, "aetherionDark")
        .unwrap();

    let manager = sandbox.launch();
    assert_eq!(manager.theme(), &sepia);
    assert_eq!(manager.startup_tier(), "override");
}

#[test]
fn test_mirror_recovers_missing_override_file() {
    let sandbox = Sandbox::new();
    let store = sandbox.store();
    store.save(&preset(ThemeId::Emerald)).unwrap();
    store.clear();

    let manager = sandbox.launch();
    assert_eq!(manager.theme(), &preset(ThemeId::Emerald));
    assert_eq!(manager.startup_tier(), "override");
}

#[test]
fn test_selected_entry_beats_persisted_id() {
    let sandbox = Sandbox::new();
    sandbox.write_user_theme("paper.json", STRICT_SEPIA);
    let prefs = sandbox.prefs();
    prefs.set_string(keys::SELECTED_ENTRY_ID, "paper").unwrap();
    prefs.set_string(keys::SELECTED_THEME_ID, "aetherionBlue").unwrap();

    let manager = sandbox.launch();
    assert_eq!(manager.startup_tier(), "selected entry");
    assert_eq!(manager.theme().id, ThemeId::Sepia);
    assert_eq!(manager.theme().background.to_hex(), "#F4ECD8");
}

#[test]
fn test_vanished_entry_falls_through_to_persisted_id() {
    let sandbox = Sandbox::new();
    let prefs = sandbox.prefs();
    prefs.set_string(keys::SELECTED_ENTRY_ID, "deleted-theme").unwrap();
    prefs.set_string(keys::SELECTED_THEME_ID, "aetherionBlue").unwrap();

    let manager = sandbox.launch();
    assert_eq!(manager.startup_tier(), "persisted id");
    assert_eq!(manager.theme(), &preset(ThemeId::Blue));
}

#[test]
fn test_persisted_id_prefers_matching_catalog_entry() {
    let sandbox = Sandbox::new();
    sandbox.write_user_theme("aetherionSepia.json", STRICT_SEPIA);
    sandbox
        .prefs()
        .set_string(keys::SELECTED_THEME_ID, "aetherionSepia")
        .unwrap();

    let manager = sandbox.launch();
    assert_eq!(manager.theme().corner_radius, 12.0);
}

#[test]
fn test_unknown_persisted_id_uses_default() {
    let sandbox = Sandbox::new();
    sandbox
        .prefs()
        .set_string(keys::SELECTED_THEME_ID, "aetherionPlaid")
        .unwrap();

    let manager = sandbox.launch();
    assert_eq!(manager.theme(), &preset(ThemeId::Dark));
}

// ========================================================================
// Load-for-id and apply
// ========================================================================

#[test]
fn test_load_for_id_ignores_override_of_other_family() {
    let sandbox = Sandbox::new();
    let manager = sandbox.launch();
    manager.store().save(&preset(ThemeId::Blue)).unwrap();

    assert_eq!(manager.load_for_id(ThemeId::Light), preset(ThemeId::Light));
    assert_eq!(manager.load_for_id(ThemeId::Blue), preset(ThemeId::Blue));
}

#[test]
fn test_load_for_id_prefers_matching_override() {
    let sandbox = Sandbox::new();
    sandbox.write_user_theme("aetherionSepia.json", STRICT_SEPIA);
    let manager = sandbox.launch();
    let custom = preset(ThemeId::Sepia).with(ThemeEdit::CornerRadius(2.0));
    manager.store().save(&custom).unwrap();

    assert_eq!(manager.load_for_id(ThemeId::Sepia), custom);
}

#[test]
fn test_apply_id_persists_selection() {
    let sandbox = Sandbox::new();
    let mut manager = sandbox.launch();
    manager.begin_color_editing();

    manager.apply_id(ThemeId::Emerald, true);

    assert_eq!(manager.theme(), &preset(ThemeId::Emerald));
    assert!(!manager.is_color_modified());
    assert_eq!(
        sandbox.prefs().get_string(keys::SELECTED_THEME_ID).as_deref(),
        Some("aetherionEmerald")
    );
    assert!(manager.store().load().is_none(), "apply does not write the override");
}

#[test]
fn test_apply_id_without_persist_leaves_selection() {
    let sandbox = Sandbox::new();
    let mut manager = sandbox.launch();
    manager.apply_id(ThemeId::Light, false);

    assert_eq!(manager.theme().id, ThemeId::Light);
    assert!(sandbox.prefs().get_string(keys::SELECTED_THEME_ID).is_none());
}

// ========================================================================
// Preview, commit, rollback
// ========================================================================

#[test]
fn test_live_preview_autosave_writes_override() {
    let sandbox = Sandbox::new();
    let mut manager = sandbox.launch();
    let background = Color::from_hex("#123456").unwrap();
    let draft = manager.snapshot().with(ThemeEdit::Background(background));

    manager.live_preview(draft, true);

    assert!(manager.is_color_modified());
    let saved = sandbox.store().load().unwrap();
    assert_eq!(saved.background, background);
}

#[test]
fn test_live_preview_without_autosave_stays_in_memory() {
    let sandbox = Sandbox::new();
    let mut manager = sandbox.launch();
    manager.edit(ThemeEdit::Icon(Color::RED), false);

    assert_eq!(manager.theme().accent, Color::RED);
    assert!(manager.is_color_modified());
    assert!(sandbox.store().load().is_none());
}

#[test]
fn test_commit_is_idempotent() {
    let sandbox = Sandbox::new();
    let mut manager = sandbox.launch();
    let theme = preset(ThemeId::Blue).with(ThemeEdit::CornerRadius(20.0));

    manager.commit_theme(theme.clone(), Some(ThemeId::Blue));
    let once = (
        manager.snapshot(),
        sandbox.prefs().get_string(keys::SELECTED_THEME_ID),
        sandbox.store().load(),
    );

    manager.commit_theme(theme.clone(), Some(ThemeId::Blue));
    let twice = (
        manager.snapshot(),
        sandbox.prefs().get_string(keys::SELECTED_THEME_ID),
        sandbox.store().load(),
    );

    assert_eq!(once, twice);
    assert_eq!(twice.0, theme);
    assert_eq!(twice.1.as_deref(), Some("aetherionBlue"));
}

#[test]
fn test_commit_without_id_keeps_selection() {
    let sandbox = Sandbox::new();
    let mut manager = sandbox.launch();
    manager.apply_id(ThemeId::Sepia, true);
    manager.commit_theme(preset(ThemeId::Light), None);

    assert_eq!(sandbox.store().load(), Some(preset(ThemeId::Light)));
    assert_eq!(
        sandbox.prefs().get_string(keys::SELECTED_THEME_ID).as_deref(),
        Some("aetherionSepia")
    );
}

#[test]
fn test_commit_survives_relaunch() {
    let sandbox = Sandbox::new();
    let theme = preset(ThemeId::Emerald).with(ThemeEdit::HeaderColor(Color::RED));
    {
        let mut manager = sandbox.launch();
        manager.commit_theme(theme.clone(), Some(ThemeId::Emerald));
    }

    let relaunched = sandbox.launch();
    assert_eq!(relaunched.theme(), &theme);
}

#[test]
fn test_commit_entry_records_raw_id() {
    let sandbox = Sandbox::new();
    sandbox.write_user_theme("paper.json", STRICT_SEPIA);
    let mut manager = sandbox.launch();

    let item = manager.catalog().find("paper").unwrap();
    manager.commit_entry(&item);

    let prefs = sandbox.prefs();
    assert_eq!(prefs.get_string(keys::SELECTED_ENTRY_ID).as_deref(), Some("paper"));
    assert_eq!(manager.theme().id, ThemeId::Sepia);
    assert_eq!(sandbox.store().load().as_ref(), Some(manager.theme()));
}

#[test]
fn test_apply_id_clears_stale_entry() {
    let sandbox = Sandbox::new();
    sandbox.write_user_theme("paper.json", STRICT_SEPIA);
    let mut manager = sandbox.launch();
    let item = manager.catalog().find("paper").unwrap();
    manager.commit_entry(&item);

    manager.apply_id(ThemeId::Blue, true);
    assert!(!sandbox.prefs().contains(keys::SELECTED_ENTRY_ID));
}

#[test]
fn test_cancel_editing_restores_pre_edit_theme() {
    let sandbox = Sandbox::new();
    let mut manager = sandbox.launch();
    manager.commit_theme(preset(ThemeId::Blue), Some(ThemeId::Blue));

    manager.begin_color_editing();
    manager.edit(ThemeEdit::Background(Color::RED), true);
    assert_eq!(sandbox.store().load().map(|t| t.background), Some(Color::RED));

    manager.cancel_color_editing();
    assert_eq!(manager.theme(), &preset(ThemeId::Blue));
    assert!(!manager.is_color_modified());
    assert_eq!(sandbox.store().load(), Some(preset(ThemeId::Blue)));
}

#[test]
fn test_cancel_without_snapshot_reloads_family() {
    let sandbox = Sandbox::new();
    let mut manager = sandbox.launch();
    manager.apply_theme(preset(ThemeId::Sepia).with(ThemeEdit::CornerRadius(1.0)));
    manager.mark_modified();

    manager.cancel_color_editing();
    assert_eq!(manager.theme(), &preset(ThemeId::Sepia));
}

#[test]
fn test_end_editing_keeps_values() {
    let sandbox = Sandbox::new();
    let mut manager = sandbox.launch();
    manager.begin_color_editing();
    manager.edit(ThemeEdit::CornerRadius(3.0), false);
    manager.end_color_editing();

    assert!(!manager.is_color_modified());
    assert_eq!(manager.theme().corner_radius, 3.0);
}

#[test]
fn test_persist_current_writes_without_touching_selection() {
    let sandbox = Sandbox::new();
    let mut manager = sandbox.launch();
    manager.edit(ThemeEdit::CornerRadius(5.0), false);
    manager.persist_current_theme_to_disk();

    assert_eq!(sandbox.store().load().map(|t| t.corner_radius), Some(5.0));
    assert!(sandbox.prefs().get_string(keys::SELECTED_THEME_ID).is_none());
}

#[test]
fn test_pending_draft_flushed_on_drop() {
    let sandbox = Sandbox::new();
    {
        let mut manager = sandbox
            .launch()
            .with_autosave_debounce(Duration::from_secs(3600));
        manager.edit(ThemeEdit::CornerRadius(7.0), true);
        manager.edit(ThemeEdit::CornerRadius(9.0), true);
        assert!(manager.has_pending_autosave());
    }

    assert_eq!(sandbox.store().load().map(|t| t.corner_radius), Some(9.0));
}
