//! The fixed widget catalog: panels, accent bars, labels with drop shadows,
//! icons, stat tiles, cards and buttons.

use hudpanel_bridge::{
    editor::EditorAction,
    theme::{FontAlign, ThemeProfile},
    ui::{ElementKind, ElementTree, Rect, Rgba},
};

use crate::{IconLookup, color::themed};

/// Offset of the synthetic drop shadow relative to its label.
pub(crate) const SHADOW_DX: f32 = 0.003;
pub(crate) const SHADOW_DY: f32 = -0.01;
pub(crate) const SHADOW_COLOR: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.65);

pub(crate) const TITLE_FONT_SIZE: u32 = 10;
pub(crate) const TITLE_COLOR: &str = "#ffffffaa";

#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyle {
    pub font_size: u32,
    pub color: Rgba,
    pub align: FontAlign,
    pub shadow: bool,
}

impl TextStyle {
    /// Small title above a value.
    pub fn title(align: FontAlign) -> Self {
        Self {
            font_size: TITLE_FONT_SIZE,
            color: themed(TITLE_COLOR, 1.0),
            align,
            shadow: false,
        }
    }

    /// Prominent value text in the theme's icon color, with a drop shadow.
    pub fn value(theme: &ThemeProfile, font_size: u32) -> Self {
        Self {
            font_size,
            color: themed(&theme.icon_color, 1.0),
            align: theme.font_align,
            shadow: true,
        }
    }
}

pub(crate) fn add_panel(tree: &mut ElementTree, parent: &str, rect: Rect, color: Rgba) -> String {
    tree.add(
        parent,
        rect,
        ElementKind::Panel {
            color,
            cursor_enabled: false,
        },
    )
}

/// Adds a label. With `style.shadow` a darker copy is emitted first,
/// offset by ([`SHADOW_DX`], [`SHADOW_DY`]), so it renders underneath.
pub(crate) fn add_text(tree: &mut ElementTree, parent: &str, text: &str, rect: Rect, style: TextStyle) {
    if style.shadow {
        tree.add(
            parent,
            rect.translate(SHADOW_DX, SHADOW_DY),
            ElementKind::Label {
                text: text.to_string(),
                font_size: style.font_size,
                align: style.align,
                color: SHADOW_COLOR,
            },
        );
    }
    tree.add(
        parent,
        rect,
        ElementKind::Label {
            text: text.to_string(),
            font_size: style.font_size,
            align: style.align,
            color: style.color,
        },
    );
}

/// Adds the icon for `key` if the lookup resolves it; otherwise nothing.
pub(crate) fn add_icon(
    tree: &mut ElementTree,
    parent: &str,
    rect: Rect,
    key: Option<&str>,
    icons: &dyn IconLookup,
) -> bool {
    let Some(png) = key.and_then(|key| icons.icon(key)).filter(|png| !png.is_empty()) else {
        return false;
    };
    tree.add(parent, rect, ElementKind::Image { png });
    true
}

/// A value with a title, occupying one slot of the stat row.
pub(crate) struct StatTile<'a> {
    pub title: &'a str,
    pub value: String,
    pub icon_key: Option<&'a str>,
}

pub(crate) fn add_stat_tile(
    tree: &mut ElementTree,
    parent: &str,
    slot: Rect,
    theme: &ThemeProfile,
    tile: &StatTile<'_>,
    icons: &dyn IconLookup,
) {
    let id = add_panel(tree, parent, slot, Rgba::TRANSPARENT);
    add_icon(tree, &id, Rect::new(0.02, 0.15, 0.14, 0.9), tile.icon_key, icons);
    add_text(
        tree,
        &id,
        &tile.value,
        Rect::new(0.16, 0.10, 0.95, 0.80),
        TextStyle::value(theme, theme.font_size + 2),
    );
    add_text(
        tree,
        &id,
        tile.title,
        Rect::new(0.0, 0.80, 1.0, 1.0),
        TextStyle::title(FontAlign::MiddleCenter),
    );
}

/// A framed value with a title and a vertical accent strip on the left.
pub(crate) struct Card<'a> {
    pub title: &'a str,
    pub value: String,
    pub icon_key: Option<&'a str>,
}

/// Adds a card spanning `min_x..max_x` of the parent. Returns the card id.
pub(crate) fn add_card(
    tree: &mut ElementTree,
    parent: &str,
    (min_x, max_x): (f32, f32),
    theme: &ThemeProfile,
    card: &Card<'_>,
    icons: &dyn IconLookup,
) -> String {
    let id = add_panel(
        tree,
        parent,
        Rect::new(min_x, 0.1, max_x, 0.98),
        themed(&theme.background_color, theme.background_opacity),
    );
    add_panel(
        tree,
        &id,
        Rect::new(0.0, 0.0, 0.015, 1.0),
        themed(&theme.accent_color, theme.accent_opacity),
    );
    add_icon(tree, &id, Rect::new(0.02, 0.15, 0.08, 0.85), card.icon_key, icons);
    add_text(
        tree,
        &id,
        &card.value,
        Rect::new(0.05, 0.1, 0.98, 0.8),
        TextStyle::value(theme, theme.font_size + 4),
    );
    add_text(
        tree,
        &id,
        card.title,
        Rect::new(0.05, 0.8, 0.6, 0.98),
        TextStyle::title(FontAlign::MiddleLeft),
    );
    id
}

/// An accent-colored editor button sending the action's console command.
pub(crate) fn add_button(
    tree: &mut ElementTree,
    parent: &str,
    rect: Rect,
    theme: &ThemeProfile,
    action: EditorAction,
) {
    let id = add_panel(tree, parent, rect, themed(&theme.accent_color, 0.85));
    tree.add(
        &id,
        Rect::FULL,
        ElementKind::Button {
            command: action.command(),
            text: action.label().to_string(),
            font_size: theme.font_size,
            color: themed(&theme.accent_color, 0.0),
        },
    );
}
