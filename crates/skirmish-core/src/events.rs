//! Sensor events delivered by the battle engine.

use serde::{Deserialize, Serialize};

/// Fresh sensor reading produced by a radar detection.
///
/// Valid for one tick only; the agent deliberately never retains or filters
/// snapshots across ticks, trading robustness to noise for simplicity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySnapshot {
    /// Bearing from own body heading to the enemy (degrees, signed).
    pub bearing_deg: f64,
    /// Distance to the enemy (always positive when a snapshot exists).
    pub distance: f64,
    /// Enemy's absolute heading (degrees).
    pub heading_deg: f64,
    /// Enemy's speed along its heading (units per tick).
    pub velocity: f64,
}
