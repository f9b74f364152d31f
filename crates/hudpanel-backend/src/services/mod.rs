//! Handlers behind the core's entry points.
//!
//! Each module adds an `impl` block to [`crate::HudCore`]: composition and
//! submission of the HUD, the announcement bar, the command surface and the
//! admin live editor. Handlers mutate the model, persist it and push the
//! resulting trees to the host before returning.

pub mod admin_service;
pub mod announce_service;
pub mod client_service;
pub mod hud_service;
pub mod theme_service;
