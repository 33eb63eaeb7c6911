//! Kinematic state views and the agent's persistent direction flags.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Own kinematic state as read from the engine at the start of a tick.
///
/// The engine mutates this in response to previously issued commands; the
/// agent only ever reads it. Everything a tick's decision needs is re-read
/// fresh, so a bad decision self-corrects on the next tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfState {
    /// Position on the field (x = East, y = North).
    pub position: DVec2,
    /// Body heading (degrees, 0 = North, clockwise).
    pub heading_deg: f64,
    /// Gun heading (degrees, absolute).
    pub gun_heading_deg: f64,
    /// Radar heading (degrees, absolute).
    pub radar_heading_deg: f64,
    /// Chassis speed (units per tick; exactly zero when stalled).
    pub velocity: f64,
    /// Elapsed tick count this round.
    pub tick: u64,
    /// Portion of the last commanded gun turn not yet completed
    /// (degrees, signed).
    pub gun_turn_remaining_deg: f64,
    /// Gun heat; the gun can only fire at exactly zero.
    pub gun_heat: f64,
}

/// Persistent strafe/scan direction flags.
///
/// Each flag is always exactly +1.0 or -1.0 and is flipped only by the
/// policy that owns it: `move_direction` by the movement policy,
/// `scan_direction` by the radar policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionState {
    pub move_direction: f64,
    pub scan_direction: f64,
}

impl Default for DirectionState {
    fn default() -> Self {
        Self {
            move_direction: 1.0,
            scan_direction: 1.0,
        }
    }
}

impl DirectionState {
    /// Flip the strafe direction. Movement policy only.
    pub fn flip_move(&mut self) {
        self.move_direction = -self.move_direction;
    }

    /// Flip the scan direction. Radar policy only.
    pub fn flip_scan(&mut self) {
        self.scan_direction = -self.scan_direction;
    }
}
