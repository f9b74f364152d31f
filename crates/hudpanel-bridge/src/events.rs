use serde::{Deserialize, Serialize};

/// World events the core tracks on its own from spawn and despawn
/// notifications. Anything else is a custom event toggled from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuiltinEvent {
    CargoPlane,
    CargoShip,
    Ch47,
    PatrolHeli,
    Bradley,
}

impl BuiltinEvent {
    /// Declaration order, which is also the display order.
    pub const ALL: [BuiltinEvent; 5] = [
        BuiltinEvent::CargoPlane,
        BuiltinEvent::CargoShip,
        BuiltinEvent::Ch47,
        BuiltinEvent::PatrolHeli,
        BuiltinEvent::Bradley,
    ];

    /// Key under which the event is tracked and displayed.
    pub fn key(self) -> &'static str {
        match self {
            BuiltinEvent::CargoPlane => "CargoPlane",
            BuiltinEvent::CargoShip => "CargoShip",
            BuiltinEvent::Ch47 => "CH47",
            BuiltinEvent::PatrolHeli => "PatrolHeli",
            BuiltinEvent::Bradley => "Bradley",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|event| event.key().eq_ignore_ascii_case(key))
    }
}
