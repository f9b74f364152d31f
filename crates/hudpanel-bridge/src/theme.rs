use serde::{Deserialize, Serialize};

/// Built-in look presets. The live editor cycles through them in
/// [`PresetTheme::ORDER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PresetTheme {
    #[default]
    Hud,
    Basic,
    Cube,
    Triangle,
}

impl PresetTheme {
    pub const ORDER: [PresetTheme; 4] = [
        PresetTheme::Hud,
        PresetTheme::Basic,
        PresetTheme::Cube,
        PresetTheme::Triangle,
    ];

    /// The preset following this one in the editor's cyclic order.
    pub fn next(self) -> Self {
        let index = Self::ORDER
            .iter()
            .position(|preset| *preset == self)
            .unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    /// Profile name the preset is seeded under.
    pub fn name(self) -> &'static str {
        match self {
            PresetTheme::Hud => "HUD",
            PresetTheme::Basic => "BASIC",
            PresetTheme::Cube => "CUBE",
            PresetTheme::Triangle => "TRIANGLE",
        }
    }

    /// A fresh theme carrying this preset's values.
    pub fn theme(self) -> ThemeProfile {
        match self {
            PresetTheme::Hud => ThemeProfile::default(),
            PresetTheme::Basic => ThemeProfile {
                preset: PresetTheme::Basic,
                background_color: "#101010".into(),
                accent_color: "#00bcd4".into(),
                overlay_color: "#ffffff22".into(),
                background_opacity: 0.28,
                overlay_opacity: 0.04,
                bar_thickness: 5,
                ..ThemeProfile::default()
            },
            PresetTheme::Cube => ThemeProfile {
                preset: PresetTheme::Cube,
                background_color: "#050505".into(),
                accent_color: "#ff6f00".into(),
                overlay_color: "#ffffff22".into(),
                background_opacity: 0.40,
                overlay_opacity: 0.08,
                font_size: 13,
                bar_thickness: 9,
                ..ThemeProfile::default()
            },
            PresetTheme::Triangle => ThemeProfile {
                preset: PresetTheme::Triangle,
                background_color: "#0a0a12".into(),
                accent_color: "#9c27b0".into(),
                overlay_color: "#ffffff22".into(),
                background_opacity: 0.32,
                overlay_opacity: 0.07,
                bar_thickness: 8,
                ..ThemeProfile::default()
            },
        }
    }
}

/// Text alignment inside a label's rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum FontAlign {
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    #[default]
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

/// A complete set of look parameters. Every field is owned, so `clone()` is
/// a full value copy and saved profiles never share state with the theme the
/// live editor is mutating.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeProfile {
    pub preset: PresetTheme,
    /// Panel background, as `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub background_color: String,
    /// Accent bars and progress strips.
    pub accent_color: String,
    /// Subtle overlay behind the content band.
    pub overlay_color: String,
    pub icon_color: String,
    pub background_opacity: f32,
    pub accent_opacity: f32,
    pub overlay_opacity: f32,
    /// Purely visual; carried for hosts that slice rounded images.
    pub corner_radius: f32,
    pub font_size: u32,
    pub font_align: FontAlign,
    /// Accent bar thickness hint, 1-15.
    pub bar_thickness: u32,
}

impl Default for ThemeProfile {
    fn default() -> Self {
        Self {
            preset: PresetTheme::Hud,
            background_color: "#0b0b0b".into(),
            accent_color: "#3f51b5".into(),
            overlay_color: "#ffffff33".into(),
            icon_color: "#ffffffff".into(),
            background_opacity: 0.35,
            accent_opacity: 1.0,
            overlay_opacity: 0.05,
            corner_radius: 8.0,
            font_size: 12,
            font_align: FontAlign::MiddleCenter,
            bar_thickness: 7,
        }
    }
}
