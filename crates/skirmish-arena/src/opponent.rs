//! Scripted opponents for the practice arena.
//!
//! Motion profiles only — no return fire. Each script advances the enemy
//! body one tick; the random walk draws its jitter from the arena's seeded
//! RNG so duels replay exactly.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skirmish_core::constants::FIELD_SIZE;
use skirmish_core::types::{bearing_unit, normalize_absolute};

/// Enemy kinematic state inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyBody {
    pub position: DVec2,
    pub heading_deg: f64,
    pub speed: f64,
}

/// Motion profile for the practice opponent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OpponentScript {
    /// Holds the current course at constant speed.
    Straight { speed: f64 },
    /// Circles at a fixed turn rate.
    Orbit { speed: f64, turn_rate_deg: f64 },
    /// Wanders: per-tick heading jitter drawn from the seeded RNG.
    RandomWalk { speed: f64, max_jitter_deg: f64 },
}

impl OpponentScript {
    /// Advance the enemy one tick under this script.
    pub fn advance(&self, body: &mut EnemyBody, rng: &mut ChaCha8Rng) {
        match *self {
            OpponentScript::Straight { speed } => {
                body.speed = speed;
            }
            OpponentScript::Orbit {
                speed,
                turn_rate_deg,
            } => {
                body.heading_deg = normalize_absolute(body.heading_deg + turn_rate_deg);
                body.speed = speed;
            }
            OpponentScript::RandomWalk {
                speed,
                max_jitter_deg,
            } => {
                let jitter = rng.gen_range(-max_jitter_deg..=max_jitter_deg);
                body.heading_deg = normalize_absolute(body.heading_deg + jitter);
                body.speed = speed;
            }
        }

        body.position += body.speed * bearing_unit(body.heading_deg);

        // Bounce off the field edge instead of grinding along it
        let clamped = body.position.clamp(DVec2::ZERO, DVec2::splat(FIELD_SIZE));
        if clamped != body.position {
            body.position = clamped;
            body.heading_deg = normalize_absolute(body.heading_deg + 180.0);
        }
    }
}
