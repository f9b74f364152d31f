mod common;

use std::sync::{Arc, Mutex};

use common::{ADMIN, PLAYER, command, core, core_with, core_with_providers};
use hudpanel_backend::{IconProvider, MemoryStore, Persistence, Providers};
use hudpanel_bridge::{
    config::{Config, PersistentData},
    events::BuiltinEvent,
    ui::Surface,
    world::Vec3,
};

const ROTATION_CONFIG: &str = r#"
[display]
update_interval = 0.5

[announcements]
duration = 2.0
messages = ["first", "second", "third"]
"#;

fn announcement_text(core: &common::TestCore, client: u64) -> Option<String> {
    core.host().labels(client, Surface::Announcement).into_iter().last()
}

#[test]
fn announcement_rotates_every_duration() {
    let mut core = core_with(MemoryStore::with_config_text(ROTATION_CONFIG));

    for _ in 0..3 {
        core.tick();
    }
    assert_eq!(core.state().data.announce_index, 0);
    assert_eq!(announcement_text(&core, PLAYER).as_deref(), Some("first"));

    core.tick();
    assert_eq!(core.state().data.announce_index, 1);
    assert_eq!(core.state().data.announce_timer, 0.0);
    assert_eq!(announcement_text(&core, PLAYER).as_deref(), Some("second"));

    for _ in 4..13 {
        core.tick();
    }
    // 13 ticks of 0.5s with 2s per message: floor(6.5 / 2) mod 3 = 0.
    assert_eq!(core.state().data.announce_index, 0);
    assert!((core.state().data.announce_timer - 0.5).abs() < 1e-9);

    let persisted = core.store().load_data().expect("load").expect("present");
    assert_eq!(persisted.announce_index, 0);
}

#[test]
fn announcements_ignore_hud_visibility() {
    let mut core = core_with(MemoryStore::with_config_text(ROTATION_CONFIG));
    command(&mut core, PLAYER, "hud");
    assert!(core.host().shown(PLAYER, Surface::Hud).is_none());
    assert!(core.host().shown(PLAYER, Surface::Announcement).is_none());

    core.host_mut().clear_log();
    core.tick();
    assert_eq!(core.host().submissions_of(PLAYER, Surface::Hud), 0);
    assert_eq!(core.host().submissions_of(PLAYER, Surface::Announcement), 1);
    assert_eq!(core.host().submissions_of(ADMIN, Surface::Hud), 1);
}

#[test]
fn stopped_or_empty_announcements_do_not_rotate() {
    let mut core = core_with(MemoryStore::with_config_text(ROTATION_CONFIG));
    core.tick();
    core.host_mut().clear_log();
    command(&mut core, ADMIN, "announce stop");
    assert_eq!(core.host().last_reply(ADMIN), Some("Announcements stopped."));
    for client in [ADMIN, PLAYER] {
        assert!(core.host().withdrawals.contains(&(client, Surface::Announcement)));
        assert!(core.host().shown(client, Surface::Announcement).is_none());
    }

    core.host_mut().clear_log();
    let timer = core.state().data.announce_timer;
    for _ in 0..10 {
        core.tick();
    }
    assert_eq!(core.state().data.announce_timer, timer);
    assert_eq!(core.host().submissions_of(PLAYER, Surface::Announcement), 0);

    command(&mut core, ADMIN, "announce start");
    core.tick();
    assert_eq!(core.state().data.announce_timer, timer + 0.5);
    assert_eq!(core.host().submissions_of(PLAYER, Surface::Announcement), 1);
}

#[test]
fn announce_commands_edit_the_rotation() {
    let mut core = core_with(MemoryStore::with_config_text(ROTATION_CONFIG));
    command(&mut core, ADMIN, "announce add Raid at  dusk");
    assert_eq!(core.host().last_reply(ADMIN), Some("Added."));
    assert_eq!(
        core.state().config.announcements.messages.last().map(String::as_str),
        Some("Raid at dusk")
    );

    core.host_mut().clear_log();
    command(&mut core, ADMIN, "announce list");
    assert_eq!(
        core.host().replies_to(ADMIN),
        ["[0] first", "[1] second", "[2] third", "[3] Raid at dusk"]
    );

    command(&mut core, ADMIN, "announce remove 9");
    assert_eq!(core.host().last_reply(ADMIN), Some("Index out of range."));
    command(&mut core, ADMIN, "announce remove x");
    assert_eq!(core.host().last_reply(ADMIN), Some("Usage: /announce remove <index>"));

    command(&mut core, PLAYER, "announce add spam");
    assert_eq!(core.host().last_reply(PLAYER), Some("No permission."));
    assert_eq!(core.state().config.announcements.messages.len(), 4);
}

#[test]
fn removing_messages_keeps_the_index_valid() {
    let mut core = core_with(MemoryStore::with_config_text(ROTATION_CONFIG));
    for _ in 0..8 {
        core.tick();
    }
    assert_eq!(core.state().data.announce_index, 2);

    command(&mut core, ADMIN, "announce remove 0");
    assert_eq!(core.state().data.announce_index, 0);

    command(&mut core, ADMIN, "announce remove 0");
    command(&mut core, ADMIN, "announce remove 0");
    assert!(core.state().config.announcements.messages.is_empty());
    assert_eq!(core.state().data.announce_index, 0);
    assert!(core.host().shown(PLAYER, Surface::Announcement).is_none());

    core.tick();
    assert!(core.host().shown(PLAYER, Surface::Announcement).is_none());
}

#[test]
fn stored_index_past_the_list_is_wrapped_on_load() {
    let mut store = MemoryStore::with_config_text(ROTATION_CONFIG);
    store.data_text = Some("announce_index = 7\n".into());

    let mut core = core_with(store);
    assert_eq!(core.state().data.announce_index, 1);
    let persisted = core.store().load_data().expect("load").expect("present");
    assert_eq!(persisted.announce_index, 1);

    core.tick();
    assert_eq!(core.state().data.announce_index, 1);
    assert_eq!(announcement_text(&core, PLAYER).as_deref(), Some("second"));
}

#[derive(Clone, Default)]
struct RecordingIcons {
    registered: Arc<Mutex<Vec<(String, String)>>>,
}

impl IconProvider for RecordingIcons {
    fn resolve(&self, _key: &str) -> Option<String> {
        None
    }

    fn register(&mut self, key: &str, url: &str) {
        if let Ok(mut registered) = self.registered.lock() {
            registered.push((key.to_string(), url.to_string()));
        }
    }
}

#[test]
fn start_registers_every_configured_icon_once() {
    let icons = RecordingIcons::default();
    let providers = Providers {
        icons: Some(Box::new(icons.clone())),
        ..Providers::default()
    };
    let core = core_with_providers(MemoryStore::default(), providers);

    let registered = icons.registered.lock().expect("lock").clone();
    let expected: Vec<(String, String)> = core
        .state()
        .config
        .icons
        .iter()
        .map(|(key, url)| (key.clone(), url.clone()))
        .collect();
    assert!(!expected.is_empty());
    assert_eq!(registered, expected);
}

#[test]
fn tick_smooths_frame_rate_of_visible_clients() {
    let mut core = core();
    core.host_mut().frame_rate = 110.0;
    command(&mut core, PLAYER, "hud");

    core.tick();
    let admin = core.state().clients.get(ADMIN).expect("admin state");
    assert_eq!(admin.frame_rate, 70.0);
    let player = core.state().clients.get(PLAYER).expect("player state");
    assert_eq!(player.frame_rate, 60.0);

    assert!(core
        .host()
        .labels(ADMIN, Surface::Hud)
        .iter()
        .any(|label| label == "70"));
}

#[test]
fn hud_toggle_withdraws_and_rebuilds() {
    let mut core = core();
    command(&mut core, PLAYER, "hud");
    assert!(!core.client_state(PLAYER).visible);
    assert!(core.host().withdrawals.contains(&(PLAYER, Surface::Hud)));
    assert!(core.host().withdrawals.contains(&(PLAYER, Surface::Announcement)));

    command(&mut core, PLAYER, "HUD");
    assert!(core.client_state(PLAYER).visible);
    assert!(core.host().shown(PLAYER, Surface::Hud).is_some());
    assert!(core.host().shown(PLAYER, Surface::Announcement).is_some());
}

#[test]
fn hud_toggle_requires_permission() {
    let mut core = core();
    core.host_mut().connect(3, Vec3::default(), &[]);
    core.on_client_connected(3);

    command(&mut core, 3, "hud");
    assert_eq!(
        core.host().last_reply(3),
        Some("You don't have permission to use HUD.")
    );
    assert!(core.client_state(3).visible);
}

#[test]
fn waypoint_commands_drive_the_distance_card() {
    let mut core = core();
    command(&mut core, PLAYER, "setwp 30 0 40");
    assert_eq!(
        core.host().last_reply(PLAYER),
        Some("Waypoint set to (30.00, 0.00, 40.00)")
    );
    assert_eq!(
        core.client_state(PLAYER).waypoint,
        Some(Vec3::new(30.0, 0.0, 40.0))
    );
    assert!(core.host().labels(PLAYER, Surface::Hud).contains(&"50 m".to_string()));

    command(&mut core, PLAYER, "clearwp");
    assert_eq!(core.host().last_reply(PLAYER), Some("Waypoint cleared"));
    assert_eq!(core.client_state(PLAYER).waypoint, None);
    assert!(core.host().labels(PLAYER, Surface::Hud).contains(&"—".to_string()));
}

#[test]
fn waypoint_without_coordinates_uses_current_position() {
    let mut core = core();
    core.host_mut().positions.insert(PLAYER, Vec3::new(5.0, 6.0, 7.0));
    command(&mut core, PLAYER, "setwp here");
    assert_eq!(core.client_state(PLAYER).waypoint, Some(Vec3::new(5.0, 6.0, 7.0)));
}

#[test]
fn spawned_events_show_on_the_events_card() {
    let mut core = core();
    core.on_entity_spawned(BuiltinEvent::CargoShip);
    core.on_entity_spawned(BuiltinEvent::Ch47);
    core.tick();
    assert!(core
        .host()
        .labels(ADMIN, Surface::Hud)
        .contains(&"CargoShip  CH47".to_string()));

    core.on_entity_killed(BuiltinEvent::CargoShip);
    assert_eq!(core.state().events.active_keys(), ["CH47"]);
}

#[test]
fn disabled_events_ignore_spawns() {
    let config = "[events]\nenabled = false\n";
    let mut core = core_with(MemoryStore::with_config_text(config));
    core.on_entity_spawned(BuiltinEvent::Bradley);
    assert!(core.state().events.active_keys().is_empty());
}

#[test]
fn custom_toggle_is_rejected_while_disabled() {
    let config = "[events]\ncustom_enabled = false\n";
    let mut core = core_with(MemoryStore::with_config_text(config));
    let before = core.state().events.active_keys();

    assert!(!core.toggle_custom_event("Heli2", true));
    assert_eq!(core.state().events.active_keys(), before);
    assert!(!core.state().events.is_active("Heli2"));
}

#[test]
fn custom_toggle_is_accepted_when_enabled() {
    let mut core = core();
    assert!(core.toggle_custom_event("Heli2", true));
    assert!(core.state().events.is_active("Heli2"));
}

#[test]
fn corrupt_documents_are_replaced_by_defaults() {
    let mut store = MemoryStore::with_config_text("this is = = not toml");
    store.data_text = Some("announce_index = \"many\"".into());

    let core = core_with(store);
    assert_eq!(core.state().config, Config::default());
    assert_eq!(core.state().data, PersistentData::default());

    let written = core.store().load_config().expect("rewritten").expect("present");
    assert_eq!(written, Config::default());
    assert_eq!(core.store().writes, 2);
}

#[test]
fn disconnect_and_shutdown_clean_up() {
    let mut core = core();
    core.on_client_disconnected(PLAYER);
    for surface in Surface::ALL {
        assert!(core.host().withdrawals.contains(&(PLAYER, surface)));
    }
    assert!(core.state().clients.get(PLAYER).is_none());
    assert!(!core.client_state(PLAYER).visible);

    core.host_mut().clear_log();
    let writes = core.store().writes;
    core.shutdown();
    assert!(core.host().withdrawals.contains(&(ADMIN, Surface::Admin)));
    assert!(core.state().clients.is_empty());
    assert_eq!(core.store().writes, writes + 1);
}

#[test]
fn client_state_reports_the_default_profile_name() {
    let core = core();
    let state = core.client_state(ADMIN);
    assert!(state.visible);
    assert_eq!(state.waypoint, None);
    assert_eq!(state.theme_profile, "HUD");
}

#[test]
fn unknown_commands_are_not_claimed() {
    let mut core = core();
    assert!(!command(&mut core, ADMIN, "dance"));
    assert!(core.host().replies.is_empty());
}
