//! Communication bridge between the game host and the HUD core.
//!
//! This crate defines the data model and the protocol shared by the host
//! (which owns connections, timers and the actual renderer) and the core
//! (which owns theme state, per-client state and composition).
//!
//! The design is deliberately lightweight and unidirectional:
//! - The host sends events (clients connecting, moving and disconnecting,
//!   entity spawns, chat commands, editor button presses).
//! - The core pushes requests back (submit an element tree for a surface,
//!   withdraw a surface, reply to a client).
//!
//! Communication happens over bounded [`tokio::sync::mpsc`] channels wrapped
//! in [`BridgeChannels`]. The core consumes its side on a single task, so the
//! host never has to reason about two core entry points running at once.

pub mod anchor;
pub mod config;
pub mod editor;
pub mod events;
pub mod theme;
pub mod ui;
pub mod world;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, Receiver, Sender};

use crate::{
    events::BuiltinEvent,
    ui::{ElementTree, Surface},
    world::Vec3,
};

/// Stable identity of a connected client, as assigned by the host.
pub type ClientId = u64;

/// Messages emitted by the core to ask the host for a side effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageFromBackend {
    /// Show `tree` to `client`, replacing whatever is shown on the same surface.
    SubmitUi { client: ClientId, tree: ElementTree },
    /// Remove the given surface from the client's screen, if present.
    WithdrawUi { client: ClientId, surface: Surface },
    /// Plain text reply to a client that invoked a command.
    Reply { client: ClientId, message: String },
    /// Outcome of an inbound custom event toggle.
    CustomEventToggled { key: String, accepted: bool },
}

/// Events delivered by the host to the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageToBackend {
    ClientConnected {
        client: ClientId,
        display_name: String,
        position: Vec3,
        /// Permissions held by the client at connect time.
        permissions: Vec<String>,
    },
    ClientDisconnected {
        client: ClientId,
    },
    ClientMoved {
        client: ClientId,
        position: Vec3,
    },
    /// Periodic host metrics used by the stat tiles.
    HostStatus {
        frame_rate: f32,
        sleepers: usize,
        pve: bool,
        /// Edge length of the square world map, in world units.
        world_size: f32,
    },
    EntitySpawned {
        event: BuiltinEvent,
    },
    EntityKilled {
        event: BuiltinEvent,
    },
    /// A chat/console command already split into name and arguments.
    Command {
        client: ClientId,
        name: String,
        args: Vec<String>,
    },
    /// A button press on the admin editor panel.
    UiAction {
        client: ClientId,
        action: String,
    },
    ToggleCustomEvent {
        key: String,
        active: bool,
    },
    Shutdown,
}

/// Paired `tokio::mpsc` channels for bidirectional communication between
/// the host and the core.
pub struct BridgeChannels {
    /// Receiver used by the host to get requests from the core.
    pub host_rx: Receiver<MessageFromBackend>,
    /// Sender used by the host to deliver events to the core.
    pub host_tx: Sender<MessageToBackend>,

    /// Receiver used by the core to get events from the host.
    pub backend_rx: Receiver<MessageToBackend>,
    /// Sender used by the core to send requests to the host.
    pub backend_tx: Sender<MessageFromBackend>,
}

impl BridgeChannels {
    /// Creates a new pair of bridged channels with the given buffer capacity.
    pub fn new(buffer: usize) -> Self {
        let (to_backend_tx, to_backend_rx) = mpsc::channel(buffer);
        let (to_host_tx, to_host_rx) = mpsc::channel(buffer);
        Self {
            host_tx: to_backend_tx,
            host_rx: to_host_rx,
            backend_rx: to_backend_rx,
            backend_tx: to_host_tx,
        }
    }
}

impl Default for BridgeChannels {
    fn default() -> Self {
        Self::new(256)
    }
}
