//! HUD core runtime entry point and public API surface.
//!
//! This crate owns the theme and configuration model, the per-client state
//! store, the event tracker, the tick scheduler and the admin live editor.
//! [`HudCore`] can be embedded directly by a host that implements [`Host`],
//! or driven over the bridge channels with [`run`].

mod app;
pub mod clients;
pub mod config;
pub mod events;
pub mod host;
pub mod runtime;
pub mod scheduler;
mod services;
pub mod state;

pub use crate::app::{ClientStateView, HudCore};
pub use crate::config::{ConfigError, FileStore, MemoryStore, Persistence};
pub use crate::host::{EconomyProvider, Host, IconProvider, Providers, PveProvider};
pub use crate::runtime::{BridgeHost, run, serve};
pub use crate::services::admin_service::{MAX_FONT_SIZE, MIN_FONT_SIZE, SAVED_THEME_NAME_FORMAT};
pub use crate::state::{State, ThemeError};
