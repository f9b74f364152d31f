mod common;

use common::{ADMIN, PLAYER, command, core};
use hudpanel_backend::Persistence;
use hudpanel_bridge::{
    anchor::Anchor,
    editor::EditorAction,
    theme::{PresetTheme, ThemeProfile},
    ui::Surface,
};

#[test]
fn saved_profile_survives_live_edits() {
    let mut core = core();
    assert_eq!(core.state().config.theme, PresetTheme::Hud.theme());
    assert_eq!(core.state().data.active_theme_profile, None);

    assert!(command(&mut core, ADMIN, "hudtheme save Night"));
    assert_eq!(core.host().last_reply(ADMIN), Some("Theme 'Night' saved."));
    let at_save: ThemeProfile = core.state().config.theme.clone();

    core.handle_ui_action(ADMIN, "hudpp_ui hudpp.btn.accentm");
    core.handle_ui_action(ADMIN, "hudpp.btn.fontp");
    core.handle_ui_action(ADMIN, "hudpp.btn.fontp");
    assert_ne!(core.state().resolve_active_theme(), &at_save);

    assert!(command(&mut core, ADMIN, "hudtheme load Night"));
    assert_eq!(core.host().last_reply(ADMIN), Some("Theme 'Night' loaded."));
    assert_eq!(core.state().resolve_active_theme(), &at_save);
    assert_eq!(core.client_state(PLAYER).theme_profile, "Night");

    let persisted = core.store().load_config().expect("load").expect("present");
    assert_eq!(persisted.theme_profiles.get("Night"), Some(&at_save));
}

#[test]
fn deleted_profile_pointer_falls_back_to_current_theme() {
    let mut core = core();
    command(&mut core, ADMIN, "hudtheme save Night");
    command(&mut core, ADMIN, "hudtheme delete Night");
    assert_eq!(core.host().last_reply(ADMIN), Some("Theme 'Night' deleted."));

    assert_eq!(core.state().data.active_theme_profile.as_deref(), Some("Night"));
    assert_eq!(
        core.state().resolve_active_theme(),
        &core.state().config.theme
    );

    command(&mut core, ADMIN, "hudtheme delete Night");
    assert_eq!(core.host().last_reply(ADMIN), Some("Theme not found."));
    command(&mut core, ADMIN, "hudtheme load Night");
    assert_eq!(core.host().last_reply(ADMIN), Some("Theme not found."));
}

#[test]
fn theme_list_is_sorted_and_usage_is_explained() {
    let mut core = core();
    command(&mut core, ADMIN, "hudtheme save Aurora");
    command(&mut core, ADMIN, "HUDTHEME LIST");
    assert_eq!(
        core.host().last_reply(ADMIN),
        Some("Themes: Aurora, BASIC, CUBE, HUD, TRIANGLE")
    );

    command(&mut core, ADMIN, "hudtheme");
    assert_eq!(
        core.host().last_reply(ADMIN),
        Some("Usage: /hudtheme list|load <name>|save <name>|delete <name>")
    );
    command(&mut core, ADMIN, "hudtheme load");
    assert_eq!(core.host().last_reply(ADMIN), Some("Usage: /hudtheme load <name>"));
    command(&mut core, ADMIN, "hudtheme rename x");
    assert_eq!(core.host().last_reply(ADMIN), Some("Invalid subcommand."));
}

#[test]
fn theme_commands_require_admin() {
    let mut core = core();
    let writes = core.store().writes;
    command(&mut core, PLAYER, "hudtheme save Night");
    assert_eq!(core.host().last_reply(PLAYER), Some("No permission."));
    assert!(!core.state().config.theme_profiles.contains_key("Night"));
    assert_eq!(core.store().writes, writes);
}

#[test]
fn presets_cycle_with_period_four() {
    let mut core = core();
    let mut seen = Vec::new();
    for _ in 0..4 {
        core.apply_editor_action(ADMIN, EditorAction::PresetNext);
        seen.push(core.state().config.theme.preset);
    }
    assert_eq!(
        seen,
        [
            PresetTheme::Basic,
            PresetTheme::Cube,
            PresetTheme::Triangle,
            PresetTheme::Hud
        ]
    );
    assert_eq!(core.state().config.theme, PresetTheme::Hud.theme());
}

#[test]
fn anchors_cycle_with_period_six() {
    let mut core = core();
    let start = core.state().config.anchor;
    assert_eq!(start, Anchor::CenterTop);

    core.apply_editor_action(ADMIN, EditorAction::AnchorNext);
    assert_eq!(core.state().config.anchor, Anchor::RightTop);
    for _ in 1..6 {
        core.apply_editor_action(ADMIN, EditorAction::AnchorNext);
    }
    assert_eq!(core.state().config.anchor, start);
}

#[test]
fn font_and_accent_edits_are_clamped() {
    let mut core = core();
    for _ in 0..30 {
        core.apply_editor_action(ADMIN, EditorAction::FontUp);
        core.apply_editor_action(ADMIN, EditorAction::AccentUp);
    }
    assert_eq!(core.state().config.theme.font_size, 20);
    assert_eq!(core.state().config.theme.accent_opacity, 1.0);

    for _ in 0..30 {
        core.apply_editor_action(ADMIN, EditorAction::FontDown);
        core.apply_editor_action(ADMIN, EditorAction::AccentDown);
    }
    assert_eq!(core.state().config.theme.font_size, 10);
    assert_eq!(core.state().config.theme.accent_opacity, 0.0);
}

#[test]
fn editor_changes_reach_every_visible_client_at_once() {
    let mut core = core();
    command(&mut core, PLAYER, "hud");
    command(&mut core, PLAYER, "hud");
    command(&mut core, ADMIN, "hudadmin");
    core.host_mut().clear_log();

    core.handle_ui_action(ADMIN, "hudpp_ui hudpp.btn.fontp");

    assert_eq!(core.host().submissions_of(ADMIN, Surface::Hud), 1);
    assert_eq!(core.host().submissions_of(PLAYER, Surface::Hud), 1);
    assert_eq!(core.host().submissions_of(ADMIN, Surface::Admin), 1);
    assert_eq!(core.host().submissions_of(PLAYER, Surface::Admin), 0);
    assert!(core.host().shown(PLAYER, Surface::Hud).is_some());
    assert!(core
        .host()
        .labels(ADMIN, Surface::Admin)
        .iter()
        .any(|label| label.contains("Font 13")));
}

#[test]
fn hidden_clients_are_skipped_by_broadcasts() {
    let mut core = core();
    command(&mut core, PLAYER, "hud");
    core.host_mut().clear_log();

    core.apply_editor_action(ADMIN, EditorAction::AnchorNext);
    assert_eq!(core.host().submissions_of(PLAYER, Surface::Hud), 0);
    assert_eq!(core.host().submissions_of(ADMIN, Surface::Hud), 1);
}

#[test]
fn editor_presses_without_admin_are_ignored() {
    let mut core = core();
    let before = core.state().config.theme.clone();
    core.handle_ui_action(PLAYER, "hudpp_ui hudpp.btn.fontp");
    core.handle_ui_action(ADMIN, "hudpp_ui hudpp.btn.nonsense");
    assert_eq!(core.state().config.theme, before);
    assert!(core.host().submissions.is_empty());
}

#[test]
fn admin_panel_toggles_open_and_closed() {
    let mut core = core();
    command(&mut core, ADMIN, "hudadmin");
    assert!(core.host().shown(ADMIN, Surface::Admin).is_some());

    command(&mut core, ADMIN, "hudadmin");
    assert!(core.host().shown(ADMIN, Surface::Admin).is_none());

    command(&mut core, ADMIN, "hudadmin");
    core.handle_ui_action(ADMIN, "hudpp_ui hudpp.btn.close");
    assert!(core.host().shown(ADMIN, Surface::Admin).is_none());
    command(&mut core, ADMIN, "hudadmin");
    assert!(core.host().shown(ADMIN, Surface::Admin).is_some());

    command(&mut core, PLAYER, "hudadmin");
    assert_eq!(core.host().last_reply(PLAYER), Some("No permission."));
}

#[test]
fn save_theme_as_uses_a_timestamp_name() {
    let mut core = core();
    core.apply_editor_action(ADMIN, EditorAction::FontUp);
    core.handle_ui_action(ADMIN, "hudpp_ui hudpp.btn.savetheme");

    assert_eq!(
        core.host().last_reply(ADMIN),
        Some("Saved current theme as Theme_070809")
    );
    let state = core.state();
    assert_eq!(state.data.active_theme_profile.as_deref(), Some("Theme_070809"));
    assert_eq!(state.config.theme_profiles["Theme_070809"], state.config.theme);
    assert_eq!(state.resolve_active_theme().font_size, 13);

    let persisted = core.store().load_data().expect("load").expect("present");
    assert_eq!(persisted.active_theme_profile.as_deref(), Some("Theme_070809"));
}
