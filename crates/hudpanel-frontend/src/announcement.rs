use hudpanel_bridge::{
    theme::{FontAlign, ThemeProfile},
    ui::{ElementKind, ElementTree, Rect, Surface},
};

use crate::{
    color::themed,
    widgets::{TextStyle, add_panel, add_text},
};

/// Bottom-center placement of the announcement bar.
pub const BAR_RECT: Rect = Rect::new(0.25, 0.02, 0.75, 0.08);
/// Height of the progress strip, relative to the bar.
pub const PROGRESS_HEIGHT: f32 = 0.08;

/// Fraction of the current message's display time already elapsed.
pub fn announcement_progress(elapsed: f64, duration: f64) -> f32 {
    (elapsed / duration.max(0.001)).clamp(0.0, 1.0) as f32
}

/// Builds the announcement bar showing `message` with a progress strip that
/// fills from left to right.
pub fn compose_announcement(theme: &ThemeProfile, message: &str, progress: f32) -> ElementTree {
    let mut tree = ElementTree::new(Surface::Announcement);
    let root = tree.add_root(
        BAR_RECT,
        None,
        ElementKind::Panel {
            color: themed(&theme.background_color, theme.background_opacity),
            cursor_enabled: false,
        },
    );

    let fill = 0.001 + 0.999 * progress.clamp(0.0, 1.0);
    add_panel(
        &mut tree,
        &root,
        Rect::new(0.0, 0.0, fill, PROGRESS_HEIGHT),
        themed(&theme.accent_color, theme.accent_opacity),
    );

    let style = TextStyle {
        align: FontAlign::MiddleCenter,
        ..TextStyle::value(theme, theme.font_size + 2)
    };
    add_text(&mut tree, &root, message, Rect::new(0.03, 0.18, 0.97, 0.92), style);

    tree
}
