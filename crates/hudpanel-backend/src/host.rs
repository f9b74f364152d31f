//! Capabilities the core consumes from its host and from optional
//! third-party providers.
//!
//! Providers answer with an `Option`; every caller has a defined default for
//! `None`, so a missing or failing provider never aborts composition.

use chrono::{DateTime, NaiveDateTime, Utc};
use hudpanel_bridge::{
    ClientId,
    ui::{ElementTree, Surface},
    world::Vec3,
};
use hudpanel_frontend::IconLookup;

/// Permission required to toggle the HUD.
pub const PERMISSION_USE: &str = "hudpanelplus.use";
/// Permission required for the editor, theme and announcement commands.
pub const PERMISSION_ADMIN: &str = "hudpanelplus.admin";

/// Primitives provided by the game host.
pub trait Host {
    fn connected_clients(&self) -> Vec<ClientId>;
    fn is_connected(&self, client: ClientId) -> bool;
    fn position_of(&self, client: ClientId) -> Option<Vec3>;
    fn sleeper_count(&self) -> usize;
    /// Edge length of the square world, in world units.
    fn world_size(&self) -> f32;
    /// Instantaneous server frame-rate estimate.
    fn frame_rate(&self) -> f32;
    /// The host's own PVE flag, used when no PVE provider answers.
    fn pve_mode(&self) -> bool;
    fn has_permission(&self, client: ClientId, permission: &str) -> bool;

    /// Shows `tree` to `client`, replacing anything already on the same surface.
    fn submit(&mut self, client: ClientId, tree: ElementTree);
    /// Removes `surface` from the client's screen. Withdrawing an absent
    /// surface is a no-op.
    fn withdraw(&mut self, client: ClientId, surface: Surface);
    fn reply(&mut self, client: ClientId, message: &str);

    /// Wall-clock time shown by the clock tile.
    fn local_time(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }

    /// Time used to name themes saved from the editor.
    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Resolves icon keys to image handles.
pub trait IconProvider {
    fn resolve(&self, key: &str) -> Option<String>;

    /// Announces an icon URL under `key`. Best-effort.
    fn register(&mut self, _key: &str, _url: &str) {}
}

pub trait EconomyProvider {
    fn balance_of(&self, client: ClientId) -> Option<f64>;
}

pub trait PveProvider {
    fn is_pve_server(&self) -> Option<bool>;
}

/// The optional providers installed alongside the host.
#[derive(Default)]
pub struct Providers {
    pub icons: Option<Box<dyn IconProvider + Send>>,
    /// Consulted in order; the first balance found wins.
    pub economy: Vec<Box<dyn EconomyProvider + Send>>,
    pub pve: Option<Box<dyn PveProvider + Send>>,
}

impl Providers {
    /// The client's balance rounded to whole units, or zero.
    pub fn balance_of(&self, client: ClientId) -> i64 {
        self.economy
            .iter()
            .find_map(|provider| provider.balance_of(client))
            .filter(|balance| balance.is_finite())
            .map(|balance| balance.round() as i64)
            .unwrap_or(0)
    }

    /// The PVE provider's answer, or `fallback` without one.
    pub fn is_pve(&self, fallback: bool) -> bool {
        self.pve
            .as_ref()
            .and_then(|provider| provider.is_pve_server())
            .unwrap_or(fallback)
    }

    pub fn register_icons<'a>(&mut self, icons: impl IntoIterator<Item = (&'a String, &'a String)>) {
        let Some(provider) = self.icons.as_mut() else {
            log::debug!("No icon provider installed, skipping icon registration");
            return;
        };
        for (key, url) in icons {
            provider.register(key, url);
        }
    }
}

impl IconLookup for Providers {
    fn icon(&self, key: &str) -> Option<String> {
        self.icons.as_ref().and_then(|provider| provider.resolve(key))
    }
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers")
            .field("icons", &self.icons.is_some())
            .field("economy", &self.economy.len())
            .field("pve", &self.pve.is_some())
            .finish()
    }
}
