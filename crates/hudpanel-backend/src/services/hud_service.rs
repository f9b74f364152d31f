use hudpanel_bridge::{ClientId, ui::Surface};
use hudpanel_frontend::{HudLayout, HudSnapshot, compose_hud, event_entries};

use crate::{app::HudCore, config::Persistence, host::Host};

impl<H: Host, S: Persistence> HudCore<H, S> {
    /// Gathers everything the HUD shows for `client`, resolving every
    /// optional signal to its default. `None` when the client is unknown to
    /// the store or the host cannot place it.
    pub(crate) fn hud_snapshot(&self, client: ClientId) -> Option<HudSnapshot> {
        let ui = self.state.clients.get(client)?;
        let position = self.host.position_of(client)?;

        Some(HudSnapshot {
            position,
            waypoint: ui.waypoint,
            online: self.host.connected_clients().len(),
            sleepers: self.host.sleeper_count(),
            balance: self.providers.balance_of(client),
            pve: self.providers.is_pve(self.host.pve_mode()),
            frame_rate: ui.frame_rate,
            local_time: self.host.local_time(),
            world_size: self.host.world_size(),
            events: event_entries(
                &self.state.events.active_keys(),
                &self.state.config.events.custom,
            ),
        })
    }

    /// Composes and submits the HUD for one client.
    pub(crate) fn build_hud(&mut self, client: ClientId) {
        let Some(snapshot) = self.hud_snapshot(client) else {
            log::debug!("Skipping HUD for client {client}: no position");
            return;
        };

        let config = &self.state.config;
        let layout = HudLayout {
            theme: self.state.resolve_active_theme(),
            anchor: config.anchor,
            display: &config.display,
            events_enabled: config.events.enabled,
        };
        let tree = compose_hud(&layout, &snapshot, &self.providers);
        log::trace!("Submitting HUD with {} elements to client {client}", tree.len());
        self.host.submit(client, tree);
    }

    /// Withdraws the HUD and the announcement bar.
    pub(crate) fn destroy_hud(&mut self, client: ClientId) {
        self.host.withdraw(client, Surface::Hud);
        self.host.withdraw(client, Surface::Announcement);
    }

    /// Rebuilds the HUD and announcement of every connected, visible client
    /// right away, without waiting for the next tick.
    pub(crate) fn broadcast_rebuild(&mut self) {
        for client in self.host.connected_clients() {
            if self.state.clients.get(client).is_some_and(|ui| ui.visible) {
                self.build_hud(client);
                self.draw_announcement(client);
            }
        }
    }
}
