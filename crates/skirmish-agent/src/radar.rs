//! Radar sweep policy.
//!
//! Two mutually exclusive behaviors: a continuous one-directional rotation
//! while searching, and an oscillating sweep while tracking. The tracking
//! sweep snaps the radar onto the enemy's absolute bearing and overshoots by
//! `RADAR_OVERSHOOT_DEG`, so the beam passes the enemy and re-crosses it on
//! the way back. Over many ticks this oscillates in an arc centered on the
//! enemy's last bearing, re-acquiring without a full rotation.

use skirmish_core::constants::{RADAR_OVERSHOOT_DEG, SEARCH_SWEEP_DEG};
use skirmish_core::events::EnemySnapshot;
use skirmish_core::state::{DirectionState, SelfState};
use skirmish_core::types::normalize_relative;

/// Radar turn for one tracking tick.
///
/// Brings the radar onto the enemy bearing plus the overshoot in the current
/// scan direction, then flips the direction so successive sweeps alternate
/// sides of the target.
pub fn tracking_sweep(
    own: &SelfState,
    contact: &EnemySnapshot,
    dirs: &mut DirectionState,
) -> f64 {
    let turn = own.heading_deg - own.radar_heading_deg
        + contact.bearing_deg
        + RADAR_OVERSHOOT_DEG * dirs.scan_direction;
    dirs.flip_scan();
    normalize_relative(turn)
}

/// Radar turn for one searching tick: keep rotating the full circle in one
/// direction until something is detected. Not normalized; a full-circle
/// command is the point.
pub fn searching_sweep() -> f64 {
    SEARCH_SWEEP_DEG
}
