use serde::{Deserialize, Serialize};

use crate::ui::Rect;

/// Screen placement of the HUD root panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Anchor {
    LeftTop,
    #[default]
    CenterTop,
    RightTop,
    LeftBottom,
    CenterBottom,
    RightBottom,
}

impl Anchor {
    /// Cyclic order used by the live editor.
    pub const ORDER: [Anchor; 6] = [
        Anchor::LeftTop,
        Anchor::CenterTop,
        Anchor::RightTop,
        Anchor::LeftBottom,
        Anchor::CenterBottom,
        Anchor::RightBottom,
    ];

    pub fn next(self) -> Self {
        let index = Self::ORDER
            .iter()
            .position(|anchor| *anchor == self)
            .unwrap_or(0);
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    /// Normalized screen rectangle for this anchor.
    pub fn rect(self) -> Rect {
        match self {
            Anchor::LeftTop => Rect::new(0.02, 0.88, 0.45, 0.98),
            Anchor::CenterTop => Rect::new(0.28, 0.88, 0.72, 0.98),
            Anchor::RightTop => Rect::new(0.55, 0.88, 0.98, 0.98),
            Anchor::LeftBottom => Rect::new(0.02, 0.02, 0.45, 0.12),
            Anchor::CenterBottom => Rect::new(0.28, 0.02, 0.72, 0.12),
            Anchor::RightBottom => Rect::new(0.55, 0.02, 0.98, 0.12),
        }
    }
}
