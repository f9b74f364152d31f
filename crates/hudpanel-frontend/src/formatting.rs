use std::fmt::Write;

use chrono::NaiveDateTime;
use hudpanel_bridge::world::Vec3;

/// Shown on the waypoint card when no waypoint is set.
pub const NO_WAYPOINT: &str = "—";

/// Unit suffix for distances.
pub const DISTANCE_UNIT: &str = "m";

/// Clock pattern used when the configured one cannot be rendered.
pub const FALLBACK_TIME_FORMAT: &str = "%H:%M";

/// Straight-line distance from `position` to `waypoint`, rounded to the
/// nearest whole unit, or [`NO_WAYPOINT`] when there is none.
pub fn format_distance(position: Vec3, waypoint: Option<Vec3>) -> String {
    match waypoint {
        Some(waypoint) => {
            let distance = position.distance(waypoint).round() as i64;
            format!("{distance} {DISTANCE_UNIT}")
        }
        None => NO_WAYPOINT.to_string(),
    }
}

/// Formats `time` with a strftime `pattern`, falling back to
/// [`FALLBACK_TIME_FORMAT`] when the pattern contains invalid specifiers.
pub fn format_clock(time: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::with_capacity(8);
    if write!(&mut out, "{}", time.format(pattern)).is_ok() {
        return out;
    }

    log::debug!("Invalid time format {pattern:?}, using {FALLBACK_TIME_FORMAT:?}");
    out.clear();
    // The fallback pattern is always valid.
    let _ = write!(&mut out, "{}", time.format(FALLBACK_TIME_FORMAT));
    out
}

/// Whole frames per second, truncated.
pub fn format_frame_rate(frame_rate: f32) -> String {
    (frame_rate.max(0.0) as u32).to_string()
}

pub fn format_mode(pve: bool) -> &'static str {
    if pve { "PVE" } else { "PVP" }
}
