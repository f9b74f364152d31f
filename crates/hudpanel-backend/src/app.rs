//! The coordinating core and its entry points.
//!
//! [`HudCore`] owns the model and is driven from one sequential context: the
//! host (or [`crate::runtime`]) calls exactly one entry point at a time.
//! Feature-specific handlers live in [`crate::services`] as further `impl`
//! blocks on the same type.

use hudpanel_bridge::{
    ClientId,
    config::CommandNames,
    editor::EDITOR_COMMAND,
    events::BuiltinEvent,
    ui::Surface,
    world::Vec3,
};
use serde::Serialize;

use crate::{
    config::{Persistence, load_or_default},
    host::{Host, Providers},
    state::State,
};

/// What an integration can learn about one client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientStateView {
    pub visible: bool,
    pub waypoint: Option<Vec3>,
    /// Name of the theme profile in effect.
    pub theme_profile: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandRoute {
    Hud,
    SetWaypoint,
    ClearWaypoint,
    Admin,
    Theme,
    Announce,
    Editor,
}

impl CommandRoute {
    fn resolve(commands: &CommandNames, name: &str) -> Option<Self> {
        [
            (commands.hud.as_str(), CommandRoute::Hud),
            (commands.set_waypoint.as_str(), CommandRoute::SetWaypoint),
            (commands.clear_waypoint.as_str(), CommandRoute::ClearWaypoint),
            (commands.admin.as_str(), CommandRoute::Admin),
            (commands.theme.as_str(), CommandRoute::Theme),
            (commands.announce.as_str(), CommandRoute::Announce),
            (EDITOR_COMMAND, CommandRoute::Editor),
        ]
        .into_iter()
        .find(|(configured, _)| configured.eq_ignore_ascii_case(name))
        .map(|(_, route)| route)
    }
}

/// The HUD core: model, stores and host capabilities.
pub struct HudCore<H, S> {
    pub(crate) host: H,
    pub(crate) store: S,
    pub(crate) state: State,
    pub(crate) providers: Providers,
}

impl<H: Host, S: Persistence> HudCore<H, S> {
    /// Loads both documents from `store`. Missing or malformed documents are
    /// replaced by defaults, which are written back immediately. A stored
    /// announcement index past the message list is wrapped into range.
    pub fn new(host: H, store: S, providers: Providers) -> Self {
        let (config, write_config) = load_or_default(store.load_config(), "configuration");
        let (data, mut write_data) = load_or_default(store.load_data(), "data file");

        let mut state = State::new(config, data);
        if state.normalize_announce_index() {
            log::warn!(
                "Stored announcement index was out of range, using {}",
                state.data.announce_index
            );
            write_data = true;
        }

        let mut core = Self {
            host,
            store,
            state,
            providers,
        };
        if write_config {
            core.persist_config();
        }
        if write_data {
            core.persist_data();
        }
        core
    }

    /// Registers icons and picks up clients that were connected before the
    /// core started.
    pub fn start(&mut self) {
        self.providers.register_icons(&self.state.config.icons);
        for client in self.host.connected_clients() {
            self.state.clients.ensure(client);
        }
        log::info!(
            "HUD core started with {} client(s), ticking every {:.2}s",
            self.state.clients.len(),
            self.update_interval()
        );
    }

    /// Removes every surface from every connected client and saves the
    /// transient data.
    pub fn shutdown(&mut self) {
        for client in self.host.connected_clients() {
            for surface in Surface::ALL {
                self.host.withdraw(client, surface);
            }
        }
        self.state.clients.clear();
        self.persist_data();
        log::info!("HUD core shut down");
    }

    pub fn on_client_connected(&mut self, client: ClientId) {
        self.state.clients.ensure(client);
        log::debug!("Client {client} connected");
    }

    pub fn on_client_disconnected(&mut self, client: ClientId) {
        for surface in Surface::ALL {
            self.host.withdraw(client, surface);
        }
        self.state.clients.remove(client);
        log::debug!("Client {client} disconnected");
    }

    pub fn on_entity_spawned(&mut self, event: BuiltinEvent) {
        if self.state.config.events.enabled {
            self.state.events.set_builtin(event, true);
        }
    }

    pub fn on_entity_killed(&mut self, event: BuiltinEvent) {
        if self.state.config.events.enabled {
            self.state.events.set_builtin(event, false);
        }
    }

    /// Inbound toggle from an external integration. Returns whether the
    /// toggle was accepted.
    pub fn toggle_custom_event(&mut self, key: &str, active: bool) -> bool {
        match self.state.events.toggle_custom(key, active) {
            Ok(()) => {
                log::debug!("Custom event {key} set to {active}");
                true
            }
            Err(error) => {
                log::warn!("Rejected toggle of custom event {key}: {error}");
                false
            }
        }
    }

    /// Routes a command by its configured name, ignoring case. Returns
    /// whether the name belongs to the core.
    pub fn handle_command(&mut self, client: ClientId, name: &str, args: &[String]) -> bool {
        let Some(route) = CommandRoute::resolve(&self.state.config.commands, name) else {
            log::debug!("Ignoring unknown command `{name}` from client {client}");
            return false;
        };

        match route {
            CommandRoute::Hud => self.handle_hud_toggle(client),
            CommandRoute::SetWaypoint => self.handle_set_waypoint(client, args),
            CommandRoute::ClearWaypoint => self.handle_clear_waypoint(client),
            CommandRoute::Admin => self.handle_admin_command(client),
            CommandRoute::Theme => self.handle_theme_command(client, args),
            CommandRoute::Announce => self.handle_announce_command(client, args),
            CommandRoute::Editor => self.handle_ui_action(client, &args.join(" ")),
        }
        true
    }

    pub fn client_state(&self, client: ClientId) -> ClientStateView {
        let ui = self.state.clients.get(client);
        ClientStateView {
            visible: ui.is_some_and(|ui| ui.visible),
            waypoint: ui.and_then(|ui| ui.waypoint),
            theme_profile: self.state.active_profile_name().to_string(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub(crate) fn persist_config(&mut self) {
        if let Err(error) = self.store.save_config(&self.state.config) {
            log::error!("Failed to save configuration: {error}");
        }
    }

    pub(crate) fn persist_data(&mut self) {
        if let Err(error) = self.store.save_data(&self.state.data) {
            log::error!("Failed to save data file: {error}");
        }
    }

    pub(crate) fn persist(&mut self) {
        self.persist_config();
        self.persist_data();
    }

    /// Replies to `client` and returns whether it holds `permission`.
    pub(crate) fn require_permission(&mut self, client: ClientId, permission: &str, denial: &str) -> bool {
        if self.host.has_permission(client, permission) {
            return true;
        }
        log::debug!("Client {client} lacks {permission}");
        self.host.reply(client, denial);
        false
    }
}
