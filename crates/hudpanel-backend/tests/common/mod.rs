#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use hudpanel_backend::{Host, HudCore, MemoryStore, Providers};
use hudpanel_bridge::{
    ClientId,
    ui::{ElementTree, Surface},
    world::Vec3,
};

pub type TestCore = HudCore<MockHost, MemoryStore>;

/// In-memory host recording everything the core asks it to do.
pub struct MockHost {
    pub positions: BTreeMap<ClientId, Vec3>,
    pub permissions: BTreeSet<(ClientId, String)>,
    pub frame_rate: f32,
    pub sleepers: usize,
    pub pve: bool,
    pub world_size: f32,
    pub shown: HashMap<(ClientId, Surface), ElementTree>,
    pub submissions: Vec<(ClientId, Surface)>,
    pub withdrawals: Vec<(ClientId, Surface)>,
    pub replies: Vec<(ClientId, String)>,
    pub now: DateTime<Utc>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            positions: BTreeMap::new(),
            permissions: BTreeSet::new(),
            frame_rate: 60.0,
            sleepers: 0,
            pve: false,
            world_size: 4000.0,
            shown: HashMap::new(),
            submissions: Vec::new(),
            withdrawals: Vec::new(),
            replies: Vec::new(),
            now: Utc
                .with_ymd_and_hms(2024, 5, 6, 7, 8, 9)
                .single()
                .expect("valid timestamp"),
        }
    }
}

impl MockHost {
    pub fn connect(&mut self, client: ClientId, position: Vec3, permissions: &[&str]) {
        self.positions.insert(client, position);
        for permission in permissions {
            self.permissions.insert((client, permission.to_string()));
        }
    }

    pub fn shown(&self, client: ClientId, surface: Surface) -> Option<&ElementTree> {
        self.shown.get(&(client, surface))
    }

    pub fn labels(&self, client: ClientId, surface: Surface) -> Vec<String> {
        self.shown(client, surface)
            .map(|tree| tree.label_texts().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn submissions_of(&self, client: ClientId, surface: Surface) -> usize {
        self.submissions
            .iter()
            .filter(|entry| **entry == (client, surface))
            .count()
    }

    pub fn replies_to(&self, client: ClientId) -> Vec<&str> {
        self.replies
            .iter()
            .filter(|(c, _)| *c == client)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    pub fn last_reply(&self, client: ClientId) -> Option<&str> {
        self.replies_to(client).last().copied()
    }

    pub fn clear_log(&mut self) {
        self.submissions.clear();
        self.withdrawals.clear();
        self.replies.clear();
    }
}

impl Host for MockHost {
    fn connected_clients(&self) -> Vec<ClientId> {
        self.positions.keys().copied().collect()
    }

    fn is_connected(&self, client: ClientId) -> bool {
        self.positions.contains_key(&client)
    }

    fn position_of(&self, client: ClientId) -> Option<Vec3> {
        self.positions.get(&client).copied()
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
        self.permissions.contains(&(client, permission.to_string()))
    }

    fn submit(&mut self, client: ClientId, tree: ElementTree) {
        self.submissions.push((client, tree.surface));
        self.shown.insert((client, tree.surface), tree);
    }

    fn withdraw(&mut self, client: ClientId, surface: Surface) {
        self.withdrawals.push((client, surface));
        self.shown.remove(&(client, surface));
    }

    fn reply(&mut self, client: ClientId, message: &str) {
        self.replies.push((client, message.to_string()));
    }

    fn local_time(&self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .and_then(|date| date.and_hms_opt(21, 45, 0))
            .expect("valid time")
    }

    fn utc_now(&self) -> DateTime<Utc> {
        self.now
    }
}

pub const ADMIN: ClientId = 1;
pub const PLAYER: ClientId = 2;

/// A started core with an admin and a regular player connected at the origin.
pub fn core_with(store: MemoryStore) -> TestCore {
    core_with_providers(store, Providers::default())
}

pub fn core_with_providers(store: MemoryStore, providers: Providers) -> TestCore {
    let mut host = MockHost::default();
    host.connect(
        ADMIN,
        Vec3::default(),
        &["hudpanelplus.use", "hudpanelplus.admin"],
    );
    host.connect(PLAYER, Vec3::default(), &["hudpanelplus.use"]);

    let mut core = HudCore::new(host, store, providers);
    core.start();
    core
}

pub fn core() -> TestCore {
    core_with(MemoryStore::default())
}

pub fn command(core: &mut TestCore, client: ClientId, line: &str) -> bool {
    let mut parts = line.split_whitespace().map(str::to_string);
    let name = parts.next().unwrap_or_default();
    let args: Vec<String> = parts.collect();
    core.handle_command(client, &name, &args)
}
