use std::collections::BTreeMap;

use hudpanel_bridge::config::CustomEvent;

/// One entry of the events card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    pub label: String,
    pub icon_key: Option<String>,
}

/// Turns the tracker's active keys into display entries.
///
/// Keys declared as custom events are dropped when disabled and otherwise
/// pick up the declared icon and order. Undeclared keys sort with order 0;
/// ties keep the tracker's order.
pub fn event_entries(active_keys: &[String], declared: &BTreeMap<String, CustomEvent>) -> Vec<EventEntry> {
    let mut entries: Vec<(i32, EventEntry)> = active_keys
        .iter()
        .filter_map(|key| match declared.get(key) {
            Some(event) if !event.enabled => None,
            Some(event) => Some((
                event.order,
                EventEntry {
                    label: key.clone(),
                    icon_key: event.icon_key.clone(),
                },
            )),
            None => Some((
                0,
                EventEntry {
                    label: key.clone(),
                    icon_key: None,
                },
            )),
        })
        .collect();

    entries.sort_by_key(|(order, _)| *order);
    entries.into_iter().map(|(_, entry)| entry).collect()
}
