//! The fixed-interval tick: frame-rate smoothing, HUD refresh and
//! announcement rotation.
//!
//! Every visible client gets a full rebuild on every tick; there is no
//! diffing, so the per-tick cost grows linearly with the client count.

use crate::{
    app::HudCore,
    config::Persistence,
    host::Host,
};

/// Shortest accepted tick interval, in seconds.
pub const MIN_UPDATE_INTERVAL: f64 = 0.05;
/// Shortest accepted announcement duration, in seconds.
pub const MIN_ANNOUNCEMENT_DURATION: f64 = 0.001;

pub const MIN_FRAME_RATE: f32 = 10.0;
pub const MAX_FRAME_RATE: f32 = 240.0;
/// Weight of the new sample in the exponential smoothing.
pub const FRAME_RATE_SMOOTHING: f32 = 0.2;

const ROTATION_EPSILON: f64 = 1e-9;

/// Moves `previous` a fixed fraction toward the host's estimate, which is
/// truncated and clamped to a plausible range first.
pub fn smooth_frame_rate(previous: f32, instantaneous: f32) -> f32 {
    if !instantaneous.is_finite() {
        return previous;
    }
    let target = instantaneous.clamp(MIN_FRAME_RATE, MAX_FRAME_RATE).trunc();
    previous + (target - previous) * FRAME_RATE_SMOOTHING
}

/// Rotation state after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnouncementStep {
    pub timer: f64,
    pub index: usize,
    /// Whether at least one message boundary was crossed.
    pub rotated: bool,
}

/// Advances the elapsed time by `dt` and moves to the next message each time
/// a full `duration` has elapsed. The elapsed time keeps the remainder past
/// the boundary. `count` must be positive.
pub fn advance_announcement(timer: f64, index: usize, dt: f64, duration: f64, count: usize) -> AnnouncementStep {
    debug_assert!(count > 0);
    let duration = duration.max(MIN_ANNOUNCEMENT_DURATION);
    let mut timer = timer.max(0.0) + dt;
    let mut index = index % count;

    let steps = ((timer + ROTATION_EPSILON) / duration).floor();
    let rotated = steps >= 1.0;
    if rotated {
        timer = (timer - steps * duration).max(0.0);
        index = (index + (steps as usize) % count) % count;
    }

    AnnouncementStep {
        timer,
        index,
        rotated,
    }
}

impl<H: Host, S: Persistence> HudCore<H, S> {
    /// Seconds between two ticks, as configured and floored at
    /// [`MIN_UPDATE_INTERVAL`].
    pub fn update_interval(&self) -> f64 {
        let configured = self.state.config.display.update_interval;
        if configured.is_finite() {
            configured.max(MIN_UPDATE_INTERVAL)
        } else {
            MIN_UPDATE_INTERVAL
        }
    }

    /// One scheduler tick.
    pub fn tick(&mut self) {
        let instantaneous = self.host.frame_rate();
        for client in self.state.clients.ids() {
            let Some(ui) = self.state.clients.get_mut(client) else {
                continue;
            };
            if !ui.visible || !self.host.is_connected(client) {
                continue;
            }
            ui.frame_rate = smooth_frame_rate(ui.frame_rate, instantaneous);
            self.build_hud(client);
        }

        self.rotate_announcements();
    }

    fn rotate_announcements(&mut self) {
        let announcements = &self.state.config.announcements;
        if !announcements.enabled || announcements.messages.is_empty() {
            return;
        }

        let step = advance_announcement(
            self.state.data.announce_timer,
            self.state.data.announce_index,
            self.update_interval(),
            announcements.duration,
            announcements.messages.len(),
        );
        self.state.data.announce_timer = step.timer;
        self.state.data.announce_index = step.index;
        if step.rotated {
            log::trace!("Announcement rotated to #{}", step.index);
            self.persist_data();
        }

        for client in self.host.connected_clients() {
            self.draw_announcement(client);
        }
    }
}
