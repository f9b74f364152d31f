use hudpanel_bridge::ClientId;

use crate::{
    app::HudCore,
    config::Persistence,
    host::{Host, PERMISSION_ADMIN},
    state::ThemeError,
};

impl<H: Host, S: Persistence> HudCore<H, S> {
    /// `theme list | load <name> | save <name> | delete <name>`.
    pub(crate) fn handle_theme_command(&mut self, client: ClientId, args: &[String]) {
        if !self.require_permission(client, PERMISSION_ADMIN, "No permission.") {
            return;
        }
        let command = self.state.config.commands.theme.clone();
        let Some(subcommand) = args.first().map(|s| s.to_lowercase()) else {
            let usage = format!("Usage: /{command} list|load <name>|save <name>|delete <name>");
            self.host.reply(client, &usage);
            return;
        };

        if subcommand == "list" {
            let names = self.state.profile_names().join(", ");
            self.host.reply(client, &format!("Themes: {names}"));
            return;
        }
        if !matches!(subcommand.as_str(), "load" | "save" | "delete") {
            self.host.reply(client, "Invalid subcommand.");
            return;
        }
        let Some(name) = args.get(1) else {
            self.host.reply(client, &format!("Usage: /{command} {subcommand} <name>"));
            return;
        };

        let result = match subcommand.as_str() {
            "load" => self.load_theme(name).map(|()| format!("Theme '{name}' loaded.")),
            "save" => self.save_theme(name).map(|()| format!("Theme '{name}' saved.")),
            _ => self.delete_theme(name).map(|()| format!("Theme '{name}' deleted.")),
        };
        match result {
            Ok(reply) => self.host.reply(client, &reply),
            Err(ThemeError::NotFound(_)) => self.host.reply(client, "Theme not found."),
            Err(error) => self.host.reply(client, &error.to_string()),
        }
    }

    /// Replaces the current theme with a copy of the profile and makes the
    /// profile active.
    pub fn load_theme(&mut self, name: &str) -> Result<(), ThemeError> {
        let theme = self.state.load_profile(name)?;
        self.state.config.theme = theme;
        self.state.data.active_theme_profile = Some(name.to_string());
        log::info!("Loaded theme profile {name}");
        self.persist();
        self.broadcast_rebuild();
        Ok(())
    }

    /// Saves a copy of the current theme under `name` and makes it active.
    pub fn save_theme(&mut self, name: &str) -> Result<(), ThemeError> {
        let theme = self.state.config.theme.clone();
        self.state.save_profile(name, &theme)?;
        self.state.data.active_theme_profile = Some(name.to_string());
        log::info!("Saved theme profile {name}");
        self.persist();
        self.broadcast_rebuild();
        Ok(())
    }

    pub fn delete_theme(&mut self, name: &str) -> Result<(), ThemeError> {
        if !self.state.delete_profile(name) {
            return Err(ThemeError::NotFound(name.to_string()));
        }
        log::info!("Deleted theme profile {name}");
        self.persist_config();
        self.broadcast_rebuild();
        Ok(())
    }
}
