//! Composition of the element trees a client sees.
//!
//! Every function in this crate is a pure transformation from theme, layout
//! settings and a snapshot of the world into an [`ElementTree`]. Nothing here
//! performs I/O or consults a provider directly: optional signals arrive
//! already resolved to a default, and icons are looked up through
//! [`IconLookup`], where a miss simply omits the icon.
//!
//! [`ElementTree`]: hudpanel_bridge::ui::ElementTree

pub mod admin;
pub mod announcement;
pub mod color;
pub mod events;
pub mod formatting;
pub mod grid;
pub mod hud;
mod widgets;

pub use admin::compose_admin_panel;
pub use announcement::{announcement_progress, compose_announcement};
pub use events::{EventEntry, event_entries};
pub use hud::{HudLayout, HudSnapshot, compose_hud};

/// Resolves an icon key to an image handle the host can draw.
pub trait IconLookup {
    fn icon(&self, key: &str) -> Option<String>;
}

impl<F> IconLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn icon(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Lookup used when no icon provider is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconLookup for NoIcons {
    fn icon(&self, _key: &str) -> Option<String> {
        None
    }
}
