use serde::{Deserialize, Serialize};

/// Console command prefix the editor's buttons invoke.
pub const EDITOR_COMMAND: &str = "hudpp_ui";

/// Buttons of the admin live editor, identified on the wire by [`EditorAction::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditorAction {
    PresetNext,
    AnchorNext,
    AccentUp,
    AccentDown,
    FontUp,
    FontDown,
    SaveThemeAs,
    Close,
}

impl EditorAction {
    pub const ALL: [EditorAction; 8] = [
        EditorAction::PresetNext,
        EditorAction::AnchorNext,
        EditorAction::AccentUp,
        EditorAction::AccentDown,
        EditorAction::FontUp,
        EditorAction::FontDown,
        EditorAction::SaveThemeAs,
        EditorAction::Close,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EditorAction::PresetNext => "hudpp.btn.preset",
            EditorAction::AnchorNext => "hudpp.btn.anchor",
            EditorAction::AccentUp => "hudpp.btn.accentp",
            EditorAction::AccentDown => "hudpp.btn.accentm",
            EditorAction::FontUp => "hudpp.btn.fontp",
            EditorAction::FontDown => "hudpp.btn.fontm",
            EditorAction::SaveThemeAs => "hudpp.btn.savetheme",
            EditorAction::Close => "hudpp.btn.close",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EditorAction::PresetNext => "Preset: Next",
            EditorAction::AnchorNext => "Anchor: Next",
            EditorAction::AccentUp => "Accent +",
            EditorAction::AccentDown => "Accent -",
            EditorAction::FontUp => "Font +",
            EditorAction::FontDown => "Font -",
            EditorAction::SaveThemeAs => "Save Theme As…",
            EditorAction::Close => "Close",
        }
    }

    /// Full console command a button sends when pressed.
    pub fn command(self) -> String {
        format!("{EDITOR_COMMAND} {}", self.id())
    }

    /// Parses a button id, with or without the console command prefix.
    pub fn from_id(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let id = raw
            .strip_prefix(EDITOR_COMMAND)
            .map(str::trim_start)
            .unwrap_or(raw);
        Self::ALL.into_iter().find(|action| action.id() == id)
    }

    /// Whether pressing the button changes theme or layout state.
    pub fn mutates(self) -> bool {
        !matches!(self, EditorAction::Close)
    }
}
