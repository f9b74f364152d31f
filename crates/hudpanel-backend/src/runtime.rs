//! Tokio adapter between the bridge channels and the sequential core.
//!
//! One task owns the [`HudCore`]; host events and timer ticks are consumed
//! by the same `select!` loop, so no two core entry points ever run at once.

use std::{
    collections::{BTreeMap, BTreeSet},
    thread,
    time::Duration,
};

use hudpanel_bridge::{
    ClientId, MessageFromBackend, MessageToBackend,
    ui::{ElementTree, Surface},
    world::Vec3,
};
use tokio::{
    sync::mpsc::{Receiver, Sender, error::TrySendError},
    time::MissedTickBehavior,
};

use crate::{
    app::HudCore,
    config::Persistence,
    host::{Host, Providers},
};

/// Default world edge length until the host reports one.
pub const DEFAULT_WORLD_SIZE: f32 = 4000.0;

#[derive(Debug, Clone)]
struct ConnectedClient {
    display_name: String,
    position: Vec3,
    permissions: BTreeSet<String>,
}

/// [`Host`] backed by the bridge: it mirrors what the host reported over
/// the channel and turns core requests into outbound messages.
#[derive(Debug)]
pub struct BridgeHost {
    tx: Sender<MessageFromBackend>,
    clients: BTreeMap<ClientId, ConnectedClient>,
    frame_rate: f32,
    sleepers: usize,
    pve: bool,
    world_size: f32,
}

impl BridgeHost {
    pub fn new(tx: Sender<MessageFromBackend>) -> Self {
        Self {
            tx,
            clients: BTreeMap::new(),
            frame_rate: 60.0,
            sleepers: 0,
            pve: false,
            world_size: DEFAULT_WORLD_SIZE,
        }
    }

    /// Queues a message for the host. The core never waits on the host: a
    /// full queue drops the message and the next tick redraws.
    pub fn send(&self, message: MessageFromBackend) {
        match self.tx.try_send(message) {
            Ok(()) => {}
            Err(TrySendError::Full(message)) => {
                log::warn!("Host queue is full, dropping {}", describe(&message));
            }
            Err(TrySendError::Closed(_)) => {
                log::debug!("Host channel closed, dropping message");
            }
        }
    }

    fn connect(&mut self, client: ClientId, display_name: String, position: Vec3, permissions: Vec<String>) {
        log::info!("{display_name} ({client}) connected");
        self.clients.insert(
            client,
            ConnectedClient {
                display_name,
                position,
                permissions: permissions.into_iter().collect(),
            },
        );
    }

    fn disconnect(&mut self, client: ClientId) {
        if let Some(info) = self.clients.remove(&client) {
            log::info!("{} ({client}) disconnected", info.display_name);
        }
    }

    fn move_client(&mut self, client: ClientId, position: Vec3) {
        if let Some(info) = self.clients.get_mut(&client) {
            info.position = position;
        }
    }
}

fn describe(message: &MessageFromBackend) -> String {
    match message {
        MessageFromBackend::SubmitUi { client, tree } => {
            format!("{:?} tree for client {client}", tree.surface)
        }
        MessageFromBackend::WithdrawUi { client, surface } => {
            format!("{surface:?} withdrawal for client {client}")
        }
        MessageFromBackend::Reply { client, .. } => format!("reply to client {client}"),
        MessageFromBackend::CustomEventToggled { key, .. } => format!("toggle result for {key}"),
    }
}

impl Host for BridgeHost {
    fn connected_clients(&self) -> Vec<ClientId> {
        self.clients.keys().copied().collect()
    }

    fn is_connected(&self, client: ClientId) -> bool {
        self.clients.contains_key(&client)
    }

    fn position_of(&self, client: ClientId) -> Option<Vec3> {
        self.clients.get(&client).map(|info| info.position)
    }

    fn sleeper_count(&self) -> usize {
        self.sleepers
    }

    fn world_size(&self) -> f32 {
        self.world_size
    }

    fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    fn pve_mode(&self) -> bool {
        self.pve
    }

    fn has_permission(&self, client: ClientId, permission: &str) -> bool {
        self.clients
            .get(&client)
            .is_some_and(|info| info.permissions.contains(permission))
    }

    fn submit(&mut self, client: ClientId, tree: ElementTree) {
        self.send(MessageFromBackend::SubmitUi { client, tree });
    }

    fn withdraw(&mut self, client: ClientId, surface: Surface) {
        self.send(MessageFromBackend::WithdrawUi { client, surface });
    }

    fn reply(&mut self, client: ClientId, message: &str) {
        self.send(MessageFromBackend::Reply {
            client,
            message: message.to_string(),
        });
    }
}

/// The core type driven by the runtime.
pub type BridgeCore = HudCore<BridgeHost, Box<dyn Persistence + Send>>;

/// Applies one host message to the core. Returns `false` once the host asked
/// for a shutdown.
pub fn dispatch_message(core: &mut BridgeCore, message: MessageToBackend) -> bool {
    match message {
        MessageToBackend::ClientConnected {
            client,
            display_name,
            position,
            permissions,
        } => {
            core.host_mut().connect(client, display_name, position, permissions);
            core.on_client_connected(client);
        }
        MessageToBackend::ClientDisconnected { client } => {
            core.on_client_disconnected(client);
            core.host_mut().disconnect(client);
        }
        MessageToBackend::ClientMoved { client, position } => {
            core.host_mut().move_client(client, position);
        }
        MessageToBackend::HostStatus {
            frame_rate,
            sleepers,
            pve,
            world_size,
        } => {
            let host = core.host_mut();
            host.frame_rate = frame_rate;
            host.sleepers = sleepers;
            host.pve = pve;
            host.world_size = world_size;
        }
        MessageToBackend::EntitySpawned { event } => core.on_entity_spawned(event),
        MessageToBackend::EntityKilled { event } => core.on_entity_killed(event),
        MessageToBackend::Command { client, name, args } => {
            if !core.handle_command(client, &name, &args) {
                core.host_mut().reply(client, &format!("Unknown command: {name}"));
            }
        }
        MessageToBackend::UiAction { client, action } => core.handle_ui_action(client, &action),
        MessageToBackend::ToggleCustomEvent { key, active } => {
            let accepted = core.toggle_custom_event(&key, active);
            core.host()
                .send(MessageFromBackend::CustomEventToggled { key, accepted });
        }
        MessageToBackend::Shutdown => return false,
    }
    true
}

/// Runs the core until the host shuts it down or drops its sender.
pub async fn serve(
    mut rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
    store: Box<dyn Persistence + Send>,
    providers: Providers,
) {
    let mut core = HudCore::new(BridgeHost::new(tx), store, providers);
    core.start();

    let mut interval = tokio::time::interval(Duration::from_secs_f64(core.update_interval()));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    interval.tick().await;

    loop {
        tokio::select! {
            message = rx.recv() => {
                let Some(message) = message else {
                    log::info!("Host channel closed");
                    break;
                };
                log::debug!("Got a host message: {message:?}");
                if !dispatch_message(&mut core, message) {
                    break;
                }
            }
            _ = interval.tick() => core.tick(),
        }
    }

    core.shutdown();
}

/// Spawns the core on its own thread with a dedicated tokio runtime.
pub fn run(
    rx: Receiver<MessageToBackend>,
    tx: Sender<MessageFromBackend>,
    store: Box<dyn Persistence + Send>,
    providers: Providers,
) -> thread::JoinHandle<std::io::Result<()>> {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        runtime.block_on(serve(rx, tx, store, providers));
        Ok(())
    })
}
