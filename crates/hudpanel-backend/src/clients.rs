use std::collections::BTreeMap;

use hudpanel_bridge::{ClientId, world::Vec3};

/// Frame-rate estimate a client starts with.
pub const INITIAL_FRAME_RATE: f32 = 60.0;

/// Transient UI state of one connected client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientUiState {
    pub visible: bool,
    pub waypoint: Option<Vec3>,
    /// Exponentially smoothed frame-rate estimate.
    pub frame_rate: f32,
    /// Whether the admin editor panel is currently shown to this client.
    pub admin_panel_open: bool,
}

impl Default for ClientUiState {
    fn default() -> Self {
        Self {
            visible: true,
            waypoint: None,
            frame_rate: INITIAL_FRAME_RATE,
            admin_panel_open: false,
        }
    }
}

/// Per-client state, keyed by client identity. Iteration is in id order.
#[derive(Debug, Clone, Default)]
pub struct ClientStore {
    clients: BTreeMap<ClientId, ClientUiState>,
}

impl ClientStore {
    /// Returns the client's state, creating a default entry on first sight.
    pub fn ensure(&mut self, client: ClientId) -> &mut ClientUiState {
        self.clients.entry(client).or_default()
    }

    pub fn remove(&mut self, client: ClientId) -> Option<ClientUiState> {
        self.clients.remove(&client)
    }

    pub fn set_waypoint(&mut self, client: ClientId, waypoint: Option<Vec3>) {
        self.ensure(client).waypoint = waypoint;
    }

    /// Flips visibility and returns the new value.
    pub fn toggle_visible(&mut self, client: ClientId) -> bool {
        let state = self.ensure(client);
        state.visible = !state.visible;
        state.visible
    }

    pub fn get(&self, client: ClientId) -> Option<&ClientUiState> {
        self.clients.get(&client)
    }

    pub fn get_mut(&mut self, client: ClientId) -> Option<&mut ClientUiState> {
        self.clients.get_mut(&client)
    }

    pub fn ids(&self) -> Vec<ClientId> {
        self.clients.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn clear(&mut self) {
        self.clients.clear();
    }
}
