use hudpanel_bridge::events::BuiltinEvent;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("custom events are disabled")]
    CustomEventsDisabled,
}

/// Active flags by event key, in insertion order. The built-in keys are
/// seeded first; entries are flipped but never removed.
#[derive(Debug, Clone)]
pub struct EventTracker {
    entries: Vec<(String, bool)>,
    custom_enabled: bool,
}

impl EventTracker {
    pub fn new(custom_enabled: bool) -> Self {
        let entries = BuiltinEvent::ALL
            .into_iter()
            .map(|event| (event.key().to_string(), false))
            .collect();
        Self {
            entries,
            custom_enabled,
        }
    }

    fn set(&mut self, key: &str, active: bool) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, flag)) => *flag = active,
            None => self.entries.push((key.to_string(), active)),
        }
    }

    pub fn set_builtin(&mut self, event: BuiltinEvent, active: bool) {
        self.set(event.key(), active);
    }

    /// Sets an external key. Rejected without any change while custom events
    /// are disabled.
    pub fn toggle_custom(&mut self, key: &str, active: bool) -> Result<(), EventError> {
        if !self.custom_enabled {
            return Err(EventError::CustomEventsDisabled);
        }
        self.set(key, active);
        Ok(())
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, active)| k == key && *active)
    }

    pub fn active_keys(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, active)| *active)
            .map(|(key, _)| key.clone())
            .collect()
    }
}
