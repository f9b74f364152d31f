use hudpanel_bridge::{
    config::{Config, PersistentData},
    theme::ThemeProfile,
};

use crate::{clients::ClientStore, events::EventTracker};

/// Failures of named theme profile operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("theme profile `{0}` not found")]
    NotFound(String),
    #[error("theme profile name must not be empty")]
    EmptyName,
}

/// The core's model: both persisted documents plus the runtime stores.
///
/// All reads of the theme go through [`State::resolve_active_theme`].
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded configuration document.
    pub config: Config,
    /// The loaded transient-data document.
    pub data: PersistentData,
    pub clients: ClientStore,
    pub events: EventTracker,
}

impl State {
    pub fn new(config: Config, data: PersistentData) -> Self {
        let events = EventTracker::new(config.events.custom_enabled);
        Self {
            config,
            data,
            clients: ClientStore::default(),
            events,
        }
    }

    /// The theme in effect: the profile the active pointer names, or the
    /// current theme when the pointer is unset or dangling.
    pub fn resolve_active_theme(&self) -> &ThemeProfile {
        self.data
            .active_theme_profile
            .as_ref()
            .and_then(|name| self.config.theme_profiles.get(name))
            .unwrap_or(&self.config.theme)
    }

    /// Name reported for the theme in effect.
    pub fn active_profile_name(&self) -> &str {
        self.data
            .active_theme_profile
            .as_deref()
            .unwrap_or(&self.config.default_theme_profile)
    }

    /// Stores a copy of `theme` under `name`, overwriting an existing profile.
    pub fn save_profile(&mut self, name: &str, theme: &ThemeProfile) -> Result<(), ThemeError> {
        if name.is_empty() {
            return Err(ThemeError::EmptyName);
        }
        self.config
            .theme_profiles
            .insert(name.to_string(), theme.clone());
        Ok(())
    }

    pub fn load_profile(&self, name: &str) -> Result<ThemeProfile, ThemeError> {
        self.config
            .theme_profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))
    }

    /// Returns whether a profile was removed. A pointer to the removed
    /// profile is left in place and resolves to the current theme.
    pub fn delete_profile(&mut self, name: &str) -> bool {
        self.config.theme_profiles.remove(name).is_some()
    }

    pub fn profile_names(&self) -> Vec<&str> {
        self.config.theme_profiles.keys().map(String::as_str).collect()
    }

    /// Brings the announcement index back into the message range. An empty
    /// list resets the rotation. Returns whether anything changed.
    pub fn normalize_announce_index(&mut self) -> bool {
        let count = self.config.announcements.messages.len();
        let data = &mut self.data;
        let (index, timer) = match count {
            0 => (0, 0.0),
            _ => (data.announce_index % count, data.announce_timer),
        };
        let changed = index != data.announce_index || timer != data.announce_timer;
        data.announce_index = index;
        data.announce_timer = timer;
        changed
    }

    /// Applies a live edit to the current theme. The active pointer is
    /// cleared so the edited theme is what clients see.
    pub fn edit_current_theme(&mut self, edit: impl FnOnce(&mut ThemeProfile)) {
        edit(&mut self.config.theme);
        self.data.active_theme_profile = None;
    }
}
