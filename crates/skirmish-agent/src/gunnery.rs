//! Predictive gunnery.
//!
//! Linear-intercept firing solution: reconstruct the enemy's position from
//! the relative snapshot, estimate projectile flight time, lead the enemy
//! along its current heading for that long, and convert the intercept point
//! into a signed gun turn. Constant-heading, zero-acceleration target model;
//! a miss self-corrects on the next snapshot.

use glam::DVec2;

use skirmish_core::constants::*;
use skirmish_core::events::EnemySnapshot;
use skirmish_core::state::SelfState;
use skirmish_core::types::{absolute_bearing, bearing_unit, normalize_relative};

/// A computed firing solution for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiringSolution {
    /// Signed gun turn onto the predicted intercept bearing (degrees).
    pub gun_turn_deg: f64,
    /// Commanded shot power, present only when the gun is ready.
    pub fire: Option<f64>,
    /// Predicted enemy position at projectile arrival.
    pub predicted: DVec2,
}

/// Usable projectile speed given the turret's remaining turn (units/tick).
///
/// An unsettled gun is credited with a slower projectile, so the solver
/// leads further while the turret is still swinging onto target. Readiness
/// derating, not the engine's ballistics.
pub fn projectile_speed(gun_turn_remaining_deg: f64) -> f64 {
    PROJECTILE_SPEED_MAX
        - PROJECTILE_DERATE_PER_DEG * gun_turn_remaining_deg.abs().min(PROJECTILE_DERATE_CAP_DEG)
}

/// Shot power for a target at the given distance: full power up close,
/// falling off inversely with distance. Weaker shots fly faster, trading
/// damage for hit probability at range.
pub fn fire_power(distance: f64) -> f64 {
    (FIRE_POWER_DISTANCE_SCALE / distance).min(MAX_FIRE_POWER)
}

/// The gun releases a shot only when cool and nearly settled on target.
pub fn ready_to_fire(own: &SelfState) -> bool {
    own.gun_heat == 0.0 && own.gun_turn_remaining_deg.abs() < GUN_SETTLE_MARGIN_DEG
}

/// Compute the firing solution against a fresh enemy snapshot.
pub fn solve(own: &SelfState, contact: &EnemySnapshot) -> FiringSolution {
    // Enemy's current position from the relative snapshot
    let enemy_bearing = own.heading_deg + contact.bearing_deg;
    let mut predicted = own.position + contact.distance * bearing_unit(enemy_bearing);

    // Lead along the enemy's heading for the projectile's flight time
    let time_to_impact = contact.distance / projectile_speed(own.gun_turn_remaining_deg);
    predicted += contact.velocity * time_to_impact * bearing_unit(contact.heading_deg);

    let gun_turn_deg =
        normalize_relative(absolute_bearing(own.position, predicted) - own.gun_heading_deg);

    let fire = if ready_to_fire(own) {
        Some(fire_power(contact.distance))
    } else {
        None
    };

    FiringSolution {
        gun_turn_deg,
        fire,
        predicted,
    }
}
