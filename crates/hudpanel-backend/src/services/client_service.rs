use hudpanel_bridge::{ClientId, world::Vec3};

use crate::{
    app::HudCore,
    config::Persistence,
    host::{Host, PERMISSION_USE},
};

/// Parses exactly three numeric arguments as a position.
fn parse_position(args: &[String]) -> Option<Vec3> {
    let [x, y, z] = args else {
        return None;
    };
    Some(Vec3::new(x.parse().ok()?, y.parse().ok()?, z.parse().ok()?))
}

impl<H: Host, S: Persistence> HudCore<H, S> {
    pub(crate) fn handle_hud_toggle(&mut self, client: ClientId) {
        if !self.require_permission(client, PERMISSION_USE, "You don't have permission to use HUD.") {
            return;
        }

        if self.state.clients.toggle_visible(client) {
            self.build_hud(client);
            self.draw_announcement(client);
        } else {
            self.destroy_hud(client);
        }
    }

    /// Three numeric arguments set an explicit waypoint; anything else uses
    /// the client's current position.
    pub(crate) fn handle_set_waypoint(&mut self, client: ClientId, args: &[String]) {
        let Some(position) = parse_position(args).or_else(|| self.host.position_of(client)) else {
            self.host.reply(client, "Position unknown.");
            return;
        };

        self.state.clients.set_waypoint(client, Some(position));
        self.host.reply(client, &format!("Waypoint set to {position}"));
        self.refresh_if_visible(client);
    }

    pub(crate) fn handle_clear_waypoint(&mut self, client: ClientId) {
        self.state.clients.set_waypoint(client, None);
        self.host.reply(client, "Waypoint cleared");
        self.refresh_if_visible(client);
    }

    fn refresh_if_visible(&mut self, client: ClientId) {
        if self.state.clients.get(client).is_some_and(|ui| ui.visible) {
            self.build_hud(client);
        }
    }
}
