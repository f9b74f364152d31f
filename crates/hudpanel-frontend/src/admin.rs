use hudpanel_bridge::{
    anchor::Anchor,
    editor::EditorAction,
    theme::{FontAlign, ThemeProfile},
    ui::{ElementKind, ElementTree, Rect, Rgba, Surface},
};

use crate::{
    color::themed,
    widgets::{TextStyle, add_button, add_text},
};

pub const PANEL_RECT: Rect = Rect::new(0.72, 0.12, 0.98, 0.88);
pub const PANEL_TITLE: &str = "HUD Panel Plus — Admin";

const BUTTON_HEIGHT: f32 = 0.07;

/// Button placement: action, horizontal span, top edge.
const BUTTONS: [(EditorAction, (f32, f32), f32); 8] = [
    (EditorAction::PresetNext, (0.05, 0.45), 0.84),
    (EditorAction::AnchorNext, (0.55, 0.95), 0.76),
    (EditorAction::AccentUp, (0.05, 0.45), 0.68),
    (EditorAction::AccentDown, (0.55, 0.95), 0.68),
    (EditorAction::FontUp, (0.05, 0.45), 0.60),
    (EditorAction::FontDown, (0.55, 0.95), 0.60),
    (EditorAction::SaveThemeAs, (0.05, 0.95), 0.52),
    (EditorAction::Close, (0.05, 0.95), 0.44),
];

/// Builds the admin editor panel. The panel captures the cursor so its
/// buttons can be clicked.
pub fn compose_admin_panel(theme: &ThemeProfile, anchor: Anchor) -> ElementTree {
    let mut tree = ElementTree::new(Surface::Admin);
    let root = tree.add_root(
        PANEL_RECT,
        None,
        ElementKind::Panel {
            color: Rgba::new(0.0, 0.0, 0.0, 0.75),
            cursor_enabled: true,
        },
    );

    let heading = TextStyle {
        font_size: 16,
        color: themed("#ffffff", 1.0),
        align: FontAlign::MiddleCenter,
        shadow: true,
    };
    add_text(&mut tree, &root, PANEL_TITLE, Rect::new(0.04, 0.9, 0.96, 0.98), heading);

    for (action, (min_x, max_x), top) in BUTTONS {
        let rect = Rect::new(min_x, top - BUTTON_HEIGHT, max_x, top);
        add_button(&mut tree, &root, rect, theme, action);
    }

    let status = format!(
        "Preset {:?} · Anchor {:?} · Font {} · Accent {:.2}",
        theme.preset, anchor, theme.font_size, theme.accent_opacity
    );
    add_text(
        &mut tree,
        &root,
        &status,
        Rect::new(0.05, 0.3, 0.95, 0.38),
        TextStyle::title(FontAlign::MiddleCenter),
    );

    tree
}
