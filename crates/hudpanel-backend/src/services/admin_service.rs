//! The admin live editor: a per-client panel whose buttons mutate the shared
//! theme and anchor, each change reaching every viewer immediately.

use hudpanel_bridge::{ClientId, editor::EditorAction, ui::Surface};
use hudpanel_frontend::compose_admin_panel;

use crate::{
    app::HudCore,
    config::Persistence,
    host::{Host, PERMISSION_ADMIN},
};

pub const MIN_FONT_SIZE: u32 = 10;
pub const MAX_FONT_SIZE: u32 = 20;
pub const ACCENT_STEP: f32 = 0.05;

/// Pattern of the profile name the editor's save button generates.
pub const SAVED_THEME_NAME_FORMAT: &str = "Theme_%H%M%S";

impl<H: Host, S: Persistence> HudCore<H, S> {
    pub(crate) fn handle_admin_command(&mut self, client: ClientId) {
        if self.require_permission(client, PERMISSION_ADMIN, "No permission.") {
            self.toggle_admin_panel(client);
        }
    }

    /// Opens the editor when closed and closes it when open.
    pub fn toggle_admin_panel(&mut self, client: ClientId) {
        let ui = self.state.clients.ensure(client);
        if ui.admin_panel_open {
            ui.admin_panel_open = false;
            self.host.withdraw(client, Surface::Admin);
        } else {
            ui.admin_panel_open = true;
            self.render_admin_panel(client);
        }
    }

    fn render_admin_panel(&mut self, client: ClientId) {
        let tree = compose_admin_panel(self.state.resolve_active_theme(), self.state.config.anchor);
        self.host.submit(client, tree);
    }

    /// Handles an editor button press. Presses from clients without the
    /// admin permission and unknown button ids are ignored.
    pub fn handle_ui_action(&mut self, client: ClientId, raw: &str) {
        if !self.host.has_permission(client, PERMISSION_ADMIN) {
            log::debug!("Ignoring editor action from client {client} without permission");
            return;
        }
        let Some(action) = EditorAction::from_id(raw) else {
            log::debug!("Ignoring unknown editor action {raw:?}");
            return;
        };
        self.apply_editor_action(client, action);
    }

    /// Applies one editor action: mutate, persist, broadcast, then redraw the
    /// panel for the client that pressed the button.
    pub fn apply_editor_action(&mut self, client: ClientId, action: EditorAction) {
        if !action.mutates() {
            self.state.clients.ensure(client).admin_panel_open = false;
            self.host.withdraw(client, Surface::Admin);
            return;
        }

        match action {
            EditorAction::PresetNext => self.state.edit_current_theme(|theme| {
                *theme = theme.preset.next().theme();
            }),
            EditorAction::AnchorNext => {
                self.state.config.anchor = self.state.config.anchor.next();
            }
            EditorAction::AccentUp => self.state.edit_current_theme(|theme| {
                theme.accent_opacity = (theme.accent_opacity + ACCENT_STEP).clamp(0.0, 1.0);
            }),
            EditorAction::AccentDown => self.state.edit_current_theme(|theme| {
                theme.accent_opacity = (theme.accent_opacity - ACCENT_STEP).clamp(0.0, 1.0);
            }),
            EditorAction::FontUp => self.state.edit_current_theme(|theme| {
                theme.font_size = (theme.font_size + 1).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
            }),
            EditorAction::FontDown => self.state.edit_current_theme(|theme| {
                theme.font_size = theme.font_size.saturating_sub(1).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
            }),
            EditorAction::SaveThemeAs => {
                let name = self.host.utc_now().format(SAVED_THEME_NAME_FORMAT).to_string();
                let theme = self.state.config.theme.clone();
                if let Err(error) = self.state.save_profile(&name, &theme) {
                    log::error!("Failed to save theme from editor: {error}");
                    return;
                }
                self.state.data.active_theme_profile = Some(name.clone());
                self.host.reply(client, &format!("Saved current theme as {name}"));
            }
            EditorAction::Close => {}
        }
        log::info!("Client {client} applied editor action {action:?}");

        self.persist();
        self.broadcast_rebuild();
        self.state.clients.ensure(client).admin_panel_open = true;
        self.render_admin_panel(client);
    }
}
