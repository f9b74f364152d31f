use hudpanel_bridge::{ClientId, ui::Surface};
use hudpanel_frontend::{announcement_progress, compose_announcement};

use crate::{
    app::HudCore,
    config::Persistence,
    host::{Host, PERMISSION_ADMIN},
};

impl<H: Host, S: Persistence> HudCore<H, S> {
    /// Draws the current announcement for `client`, or withdraws the bar
    /// when announcements are stopped or empty.
    pub(crate) fn draw_announcement(&mut self, client: ClientId) {
        let announcements = &self.state.config.announcements;
        let Some(last) = announcements.messages.len().checked_sub(1) else {
            self.host.withdraw(client, Surface::Announcement);
            return;
        };
        if !announcements.enabled {
            self.host.withdraw(client, Surface::Announcement);
            return;
        }

        let message = &announcements.messages[self.state.data.announce_index.min(last)];
        let progress = announcement_progress(self.state.data.announce_timer, announcements.duration);
        let tree = compose_announcement(self.state.resolve_active_theme(), message, progress);
        self.host.submit(client, tree);
    }

    pub(crate) fn hide_announcements_all(&mut self) {
        for client in self.host.connected_clients() {
            self.host.withdraw(client, Surface::Announcement);
        }
    }

    /// `announce add <text> | remove <index> | start | stop | list`.
    pub(crate) fn handle_announce_command(&mut self, client: ClientId, args: &[String]) {
        if !self.require_permission(client, PERMISSION_ADMIN, "No permission.") {
            return;
        }
        let command = self.state.config.commands.announce.clone();
        let Some(subcommand) = args.first() else {
            let usage = format!("Usage: /{command} add <text>|remove <index>|start|stop|list");
            self.host.reply(client, &usage);
            return;
        };

        match subcommand.to_lowercase().as_str() {
            "add" => {
                if args.len() < 2 {
                    self.host.reply(client, &format!("Usage: /{command} add <text>"));
                    return;
                }
                let text = args[1..].join(" ");
                log::info!("Client {client} added announcement {text:?}");
                self.state.config.announcements.messages.push(text);
                self.persist_config();
                self.host.reply(client, "Added.");
            }
            "remove" => {
                let Some(index) = args.get(1).and_then(|raw| raw.parse::<usize>().ok()) else {
                    self.host.reply(client, &format!("Usage: /{command} remove <index>"));
                    return;
                };
                if index >= self.state.config.announcements.messages.len() {
                    self.host.reply(client, "Index out of range.");
                    return;
                }
                self.remove_announcement(index);
                self.host.reply(client, "Removed.");
            }
            "start" => {
                self.state.config.announcements.enabled = true;
                self.persist_config();
                self.host.reply(client, "Announcements started.");
            }
            "stop" => {
                self.state.config.announcements.enabled = false;
                self.persist_config();
                self.hide_announcements_all();
                self.host.reply(client, "Announcements stopped.");
            }
            "list" => {
                let lines: Vec<String> = self
                    .state
                    .config
                    .announcements
                    .messages
                    .iter()
                    .enumerate()
                    .map(|(index, message)| format!("[{index}] {message}"))
                    .collect();
                if lines.is_empty() {
                    self.host.reply(client, "No announcements.");
                }
                for line in lines {
                    self.host.reply(client, &line);
                }
            }
            _ => self.host.reply(client, "Invalid subcommand."),
        }
    }

    /// Removes one message and keeps the rotation index pointing at a valid
    /// message. Emptying the list withdraws every bar.
    fn remove_announcement(&mut self, index: usize) {
        let announcements = &mut self.state.config.announcements;
        let removed = announcements.messages.remove(index);
        log::info!("Removed announcement {removed:?}");

        let remaining = announcements.messages.len();
        self.state.normalize_announce_index();
        self.persist();

        if remaining == 0 {
            self.hide_announcements_all();
        }
    }
}
