//! The main HUD: root panel, accent bar, stat-tile row and content cards.

use chrono::NaiveDateTime;
use hudpanel_bridge::{
    anchor::Anchor,
    config::DisplayConfig,
    theme::ThemeProfile,
    ui::{ElementKind, ElementTree, Offsets, Rect, Surface},
    world::Vec3,
};

use crate::{
    IconLookup,
    color::themed,
    events::EventEntry,
    formatting::{format_clock, format_distance, format_frame_rate, format_mode},
    grid::grid_label,
    widgets::{Card, StatTile, add_card, add_icon, add_panel, add_stat_tile},
};

/// Half extents of the root panel at 100% scale, in host units.
pub const ROOT_HALF_WIDTH: f32 = 300.0;
pub const ROOT_HALF_HEIGHT: f32 = 70.0;

pub const ACCENT_BAR: Rect = Rect::new(0.0, 0.92, 1.0, 1.0);
pub const STAT_ROW_MIN_Y: f32 = 0.70;
pub const STAT_ROW_MAX_Y: f32 = 0.92;
pub const CONTENT_BAND: Rect = Rect::new(0.0, 0.0, 1.0, STAT_ROW_MIN_Y);

/// Width of one stat slot; six slots fit in a row.
pub const STAT_STEP: f32 = 0.16;

/// Horizontal spans of the position, waypoint and events cards.
pub const CARD_SPANS: [(f32, f32); 3] = [(0.0, 0.33), (0.33, 0.66), (0.66, 1.0)];

pub const EVENTS_SEPARATOR: &str = "  ";

/// Settings that shape the HUD and change only through configuration.
#[derive(Debug, Clone, Copy)]
pub struct HudLayout<'a> {
    pub theme: &'a ThemeProfile,
    pub anchor: Anchor,
    pub display: &'a DisplayConfig,
    pub events_enabled: bool,
}

/// Everything per-client and per-tick the HUD shows, with every optional
/// signal already resolved to its default.
#[derive(Debug, Clone)]
pub struct HudSnapshot {
    pub position: Vec3,
    pub waypoint: Option<Vec3>,
    pub online: usize,
    pub sleepers: usize,
    pub balance: i64,
    pub pve: bool,
    pub frame_rate: f32,
    pub local_time: NaiveDateTime,
    pub world_size: f32,
    pub events: Vec<EventEntry>,
}

/// Left-to-right slots for `count` stat tiles. Slots starting at or past the
/// right edge are dropped and the last partial slot is clipped at 1.0.
pub fn stat_slots(count: usize) -> Vec<Rect> {
    (0..count)
        .map(|index| index as f32 * STAT_STEP)
        .take_while(|min_x| *min_x < 1.0)
        .map(|min_x| {
            Rect::new(
                min_x,
                STAT_ROW_MIN_Y,
                (min_x + STAT_STEP).min(1.0),
                STAT_ROW_MAX_Y,
            )
        })
        .collect()
}

fn stat_tiles<'a>(layout: &HudLayout<'a>, snapshot: &HudSnapshot) -> Vec<StatTile<'a>> {
    let display = layout.display;
    let mut tiles = Vec::with_capacity(6);

    if display.show_online {
        tiles.push(StatTile {
            title: "Online",
            value: snapshot.online.to_string(),
            icon_key: Some("online"),
        });
    }
    if display.show_sleepers {
        tiles.push(StatTile {
            title: "Sleepers",
            value: snapshot.sleepers.to_string(),
            icon_key: Some("sleep"),
        });
    }
    if display.show_balance {
        tiles.push(StatTile {
            title: "Balance",
            value: snapshot.balance.to_string(),
            icon_key: Some("money"),
        });
    }
    if display.show_pve_state {
        tiles.push(StatTile {
            title: "Mode",
            value: format_mode(snapshot.pve).to_string(),
            icon_key: None,
        });
    }
    if display.show_fps {
        tiles.push(StatTile {
            title: "FPS",
            value: format_frame_rate(snapshot.frame_rate),
            icon_key: None,
        });
    }
    if display.show_clock {
        tiles.push(StatTile {
            title: "Time",
            value: format_clock(&snapshot.local_time, &display.time_format),
            icon_key: Some("clock"),
        });
    }

    tiles
}

/// Builds the complete HUD tree for one client. Always succeeds.
pub fn compose_hud(layout: &HudLayout<'_>, snapshot: &HudSnapshot, icons: &dyn IconLookup) -> ElementTree {
    let theme = layout.theme;
    let scale = layout.display.scale();
    let mut tree = ElementTree::new(Surface::Hud);

    let root = tree.add_root(
        layout.anchor.rect(),
        Some(Offsets::centered(ROOT_HALF_WIDTH * scale, ROOT_HALF_HEIGHT * scale)),
        ElementKind::Panel {
            color: themed(&theme.background_color, theme.background_opacity),
            cursor_enabled: false,
        },
    );

    add_panel(
        &mut tree,
        &root,
        ACCENT_BAR,
        themed(&theme.accent_color, theme.accent_opacity),
    );

    let tiles = stat_tiles(layout, snapshot);
    for (slot, tile) in stat_slots(tiles.len()).into_iter().zip(&tiles) {
        add_stat_tile(&mut tree, &root, slot, theme, tile, icons);
    }

    let content = add_panel(
        &mut tree,
        &root,
        CONTENT_BAND,
        themed(&theme.overlay_color, theme.overlay_opacity),
    );

    if layout.display.show_map_coords {
        let card = Card {
            title: "Position",
            value: grid_label(snapshot.position, snapshot.world_size),
            icon_key: Some("map"),
        };
        add_card(&mut tree, &content, CARD_SPANS[0], theme, &card, icons);
    }

    if layout.display.show_waypoint_distance {
        let card = Card {
            title: "Waypoint",
            value: format_distance(snapshot.position, snapshot.waypoint),
            icon_key: Some("waypoint"),
        };
        add_card(&mut tree, &content, CARD_SPANS[1], theme, &card, icons);
    }

    if layout.events_enabled {
        let labels: Vec<&str> = snapshot.events.iter().map(|e| e.label.as_str()).collect();
        let card = Card {
            title: "Events",
            value: labels.join(EVENTS_SEPARATOR),
            icon_key: Some("heli"),
        };
        let id = add_card(&mut tree, &content, CARD_SPANS[2], theme, &card, icons);
        add_event_icons(&mut tree, &id, &snapshot.events, icons);
    }

    tree
}

/// Icons of events that declare one, right-aligned in the card's title row.
fn add_event_icons(tree: &mut ElementTree, card: &str, events: &[EventEntry], icons: &dyn IconLookup) {
    const WIDTH: f32 = 0.08;
    const LEFT_LIMIT: f32 = 0.6;

    let mut max_x = 0.98;
    for event in events.iter().filter(|e| e.icon_key.is_some()) {
        let min_x = max_x - WIDTH;
        if min_x < LEFT_LIMIT {
            break;
        }
        let rect = Rect::new(min_x, 0.8, max_x, 0.98);
        if add_icon(tree, card, rect, event.icon_key.as_deref(), icons) {
            max_x = min_x;
        }
    }
}
