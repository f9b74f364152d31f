use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    anchor::Anchor,
    theme::{PresetTheme, ThemeProfile},
};

/// Lowest accepted HUD scale, in percent.
pub const MIN_SCALE_PERCENT: i32 = 30;
/// Highest accepted HUD scale, in percent.
pub const MAX_SCALE_PERCENT: i32 = 100;

/// Names of the commands the host registers on the core's behalf. The
/// behavior behind each one is fixed.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CommandNames {
    /// Toggles the HUD for the invoking client.
    pub hud: String,
    /// Opens or closes the admin live editor.
    pub admin: String,
    /// `list | load <name> | save <name> | delete <name>`.
    pub theme: String,
    /// `add <text> | remove <index> | start | stop | list`.
    pub announce: String,
    pub set_waypoint: String,
    pub clear_waypoint: String,
    /// Key suggested to clients for binding the HUD toggle command.
    pub toggle_key_binding: String,
}

impl Default for CommandNames {
    fn default() -> Self {
        Self {
            hud: "hud".into(),
            admin: "hudadmin".into(),
            theme: "hudtheme".into(),
            announce: "announce".into(),
            set_waypoint: "setwp".into(),
            clear_waypoint: "clearwp".into(),
            toggle_key_binding: "h".into(),
        }
    }
}

/// Which widgets are shown and how often they refresh.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Seconds between two scheduler ticks.
    pub update_interval: f64,
    /// HUD scale in percent. Values outside 30-100 are clamped on use.
    pub base_scale_percent: i32,
    /// strftime pattern used by the clock tile.
    pub time_format: String,
    pub show_online: bool,
    pub show_sleepers: bool,
    pub show_balance: bool,
    pub show_pve_state: bool,
    pub show_fps: bool,
    pub show_clock: bool,
    pub show_map_coords: bool,
    pub show_waypoint_distance: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            update_interval: 0.5,
            base_scale_percent: 48,
            time_format: "%H:%M".into(),
            show_online: true,
            show_sleepers: true,
            show_balance: true,
            show_pve_state: true,
            show_fps: true,
            show_clock: true,
            show_map_coords: true,
            show_waypoint_distance: true,
        }
    }
}

impl DisplayConfig {
    /// Scale factor in `[0.3, 1.0]`, clamped silently.
    pub fn scale(&self) -> f32 {
        self.base_scale_percent
            .clamp(MIN_SCALE_PERCENT, MAX_SCALE_PERCENT) as f32
            / 100.0
    }
}

/// Declarative description of an event an external integration reports.
/// The core never invokes the hooks; it only orders and filters by them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CustomEvent {
    pub enabled: bool,
    /// Display order; lower comes first, ties keep insertion order.
    pub order: i32,
    pub on_start_hook: Option<String>,
    pub on_end_hook: Option<String>,
    /// Key of the icon shown next to the event, if any.
    pub icon_key: Option<String>,
}

impl Default for CustomEvent {
    fn default() -> Self {
        Self {
            enabled: true,
            order: 0,
            on_start_hook: None,
            on_end_hook: None,
            icon_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Whether spawn/despawn notifications are tracked and the events card shown.
    pub enabled: bool,
    /// Whether external integrations may toggle custom event keys.
    pub custom_enabled: bool,
    pub custom: BTreeMap<String, CustomEvent>,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            custom_enabled: true,
            custom: BTreeMap::new(),
        }
    }
}

/// Rotating announcement bar.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnnouncementsConfig {
    pub enabled: bool,
    /// Seconds each message stays on screen.
    pub duration: f64,
    pub messages: Vec<String>,
}

impl Default for AnnouncementsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: 8.0,
            messages: vec![
                "Welcome to the server!".into(),
                "Type /hud to toggle the new HUD.".into(),
                "Be kind. No cheating.".into(),
            ],
        }
    }
}

/// Global configuration document.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub commands: CommandNames,
    pub display: DisplayConfig,
    pub events: EventsConfig,
    pub announcements: AnnouncementsConfig,
    pub anchor: Anchor,
    /// The theme the live editor mutates. Shown whenever no profile is active.
    pub theme: ThemeProfile,
    /// Saved profiles by (case-sensitive) name.
    pub theme_profiles: BTreeMap<String, ThemeProfile>,
    /// Profile name reported when no profile pointer is set.
    pub default_theme_profile: String,
    /// Icon URLs by key, registered with the icon provider at startup.
    pub icons: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let theme_profiles = PresetTheme::ORDER
            .into_iter()
            .map(|preset| (preset.name().to_string(), preset.theme()))
            .collect();
        let icons = [
            ("online", "https://i.imgur.com/8bKxgqX.png"),
            ("sleep", "https://i.imgur.com/1mC4l7z.png"),
            ("money", "https://i.imgur.com/5k0d8eR.png"),
            ("clock", "https://i.imgur.com/8gq1bJH.png"),
            ("map", "https://i.imgur.com/0eQkJ2G.png"),
            ("waypoint", "https://i.imgur.com/Pk4Zl8P.png"),
            ("heli", "https://i.imgur.com/6m8bYx3.png"),
        ]
        .into_iter()
        .map(|(key, url)| (key.to_string(), url.to_string()))
        .collect();

        Self {
            commands: CommandNames::default(),
            display: DisplayConfig::default(),
            events: EventsConfig::default(),
            announcements: AnnouncementsConfig::default(),
            anchor: Anchor::default(),
            theme: ThemeProfile::default(),
            theme_profiles,
            default_theme_profile: PresetTheme::Hud.name().to_string(),
            icons,
        }
    }
}

/// Transient data document: survives restarts but is not hand-edited.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PersistentData {
    /// Name of the active theme profile. `None` shows the current theme.
    pub active_theme_profile: Option<String>,
    /// Seconds the current announcement has been on screen.
    pub announce_timer: f64,
    pub announce_index: usize,
}
