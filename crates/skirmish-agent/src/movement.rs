//! Strafing movement policy.
//!
//! Keeps the body roughly perpendicular to the enemy, biased
//! `ORBIT_BIAS_DEG` off true perpendicular so the orbit slowly closes
//! distance, and reverses the strafe leg every
//! `STRAFE_REVERSAL_INTERVAL_TICKS` ticks or immediately on a stall.

use skirmish_core::constants::{
    ORBIT_BIAS_DEG, STRAFE_LEG_DISTANCE, STRAFE_REVERSAL_INTERVAL_TICKS,
};
use skirmish_core::events::EnemySnapshot;
use skirmish_core::state::{DirectionState, SelfState};
use skirmish_core::types::normalize_relative;

/// Output of the movement policy for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementDecision {
    /// Body turn toward the biased-perpendicular orbit heading (degrees).
    /// Issued on every detection tick.
    pub body_turn_deg: f64,
    /// Strafe leg distance, present only on a reversal tick.
    pub advance: Option<f64>,
}

/// Evaluate the movement policy against a fresh enemy snapshot.
///
/// Flips `move_direction` and issues a move on the periodic reversal tick,
/// or immediately when velocity is exactly zero — the engine's signal that
/// the chassis is clamped against a wall or another combatant.
pub fn strafe(
    own: &SelfState,
    contact: &EnemySnapshot,
    dirs: &mut DirectionState,
) -> MovementDecision {
    let body_turn_deg =
        normalize_relative(contact.bearing_deg + 90.0 - ORBIT_BIAS_DEG * dirs.move_direction);

    let stalled = own.velocity == 0.0;
    let advance = if own.tick % STRAFE_REVERSAL_INTERVAL_TICKS == 0 || stalled {
        dirs.flip_move();
        Some(STRAFE_LEG_DISTANCE * dirs.move_direction)
    } else {
        None
    };

    MovementDecision {
        body_turn_deg,
        advance,
    }
}
