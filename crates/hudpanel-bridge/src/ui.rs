//! Declarative element trees handed to the host renderer.
//!
//! A tree is a flat list of elements, each naming its parent by id. The first
//! element of a tree is its root and is parented to [`OVERLAY_LAYER`].
//! Rectangles are normalized to the parent with the origin at the bottom-left.

use serde::{Deserialize, Serialize};

use crate::theme::FontAlign;

/// Host layer every surface root is attached to.
pub const OVERLAY_LAYER: &str = "Overlay";

/// Named UI surfaces the core draws for a client. Each client shows at most
/// one tree per surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Hud,
    Announcement,
    Admin,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Hud, Surface::Announcement, Surface::Admin];

    /// Identifier of the surface's root element.
    pub fn id(self) -> &'static str {
        match self {
            Surface::Hud => "HUDPP.Root",
            Surface::Announcement => "HUDPP.Announce",
            Surface::Admin => "HUDPP.Admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Normalized rectangle relative to the parent element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    pub const FULL: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Same rectangle moved by the given deltas.
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.min_x + dx,
            self.min_y + dy,
            self.max_x + dx,
            self.max_y + dy,
        )
    }
}

/// Absolute offsets, in host units, applied on top of a normalized [`Rect`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offsets {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Offsets {
    /// Offsets extending `half_width` and `half_height` around the anchor.
    pub fn centered(half_width: f32, half_height: f32) -> Self {
        Self {
            min_x: -half_width,
            min_y: -half_height,
            max_x: half_width,
            max_y: half_height,
        }
    }

    pub fn half_width(&self) -> f32 {
        (self.max_x - self.min_x) / 2.0
    }

    pub fn half_height(&self) -> f32 {
        (self.max_y - self.min_y) / 2.0
    }
}

/// The fixed widget primitives a host knows how to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    Panel {
        color: Rgba,
        cursor_enabled: bool,
    },
    Label {
        text: String,
        font_size: u32,
        align: FontAlign,
        color: Rgba,
    },
    /// A raw image, by the handle the icon provider returned.
    Image {
        png: String,
    },
    Button {
        command: String,
        text: String,
        font_size: u32,
        color: Rgba,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    pub parent: String,
    pub rect: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offsets: Option<Offsets>,
    pub kind: ElementKind,
}

impl Element {
    pub fn label_text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Label { text, .. } => Some(text),
            _ => None,
        }
    }
}

/// All elements drawn on one surface for one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementTree {
    pub surface: Surface,
    pub elements: Vec<Element>,
}

impl ElementTree {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            elements: Vec::new(),
        }
    }

    /// Adds the surface root. Returns its id.
    pub fn add_root(&mut self, rect: Rect, offsets: Option<Offsets>, kind: ElementKind) -> String {
        let id = self.surface.id().to_string();
        self.elements.push(Element {
            id: id.clone(),
            parent: OVERLAY_LAYER.to_string(),
            rect,
            offsets,
            kind,
        });
        id
    }

    /// Adds a child of `parent` and returns the generated id.
    pub fn add(&mut self, parent: &str, rect: Rect, kind: ElementKind) -> String {
        let id = format!("{}.{}", self.surface.id(), self.elements.len());
        self.elements.push(Element {
            id: id.clone(),
            parent: parent.to_string(),
            rect,
            offsets: None,
            kind,
        });
        id
    }

    pub fn root(&self) -> Option<&Element> {
        self.elements.first()
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    pub fn children_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements.iter().filter(move |element| element.parent == id)
    }

    /// Every label text in insertion order, drop shadows included.
    pub fn label_texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(Element::label_text)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
