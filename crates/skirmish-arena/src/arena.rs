//! The practice range — a deterministic double for the battle engine.
//!
//! `Arena` owns both combatants' kinematic state, applies one `CommandBatch`
//! per tick under the engine's rate limits, honors the two turn-compensation
//! assists, and reports a detection whenever the tick's radar sweep crosses
//! the enemy bearing. Headless and seed-deterministic: same config, same
//! duel, same serialized trace.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use skirmish_agent::Agent;
use skirmish_core::commands::{CommandBatch, SetupConfig};
use skirmish_core::constants::*;
use skirmish_core::events::EnemySnapshot;
use skirmish_core::state::SelfState;
use skirmish_core::types::{absolute_bearing, bearing_unit, normalize_absolute, normalize_relative};

use crate::opponent::{EnemyBody, OpponentScript};

/// Configuration for a practice duel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// RNG seed for the opponent script. Same seed, same duel.
    pub seed: u64,
    /// Opponent motion profile.
    pub script: OpponentScript,
    /// Agent setup consumed before the first tick.
    pub setup: SetupConfig,
    /// Own starting position.
    pub own_start: DVec2,
    /// Enemy starting position and course.
    pub enemy_start: DVec2,
    pub enemy_heading_deg: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            script: OpponentScript::Straight { speed: 4.0 },
            setup: SetupConfig::default(),
            own_start: DVec2::new(FIELD_SIZE / 2.0, FIELD_SIZE / 4.0),
            enemy_start: DVec2::new(FIELD_SIZE / 2.0, FIELD_SIZE * 0.75),
            enemy_heading_deg: 90.0,
        }
    }
}

/// Own-body state tracked by the arena, including the uncompleted portions
/// of previously issued commands.
#[derive(Debug, Clone, Copy, Default)]
struct OwnBody {
    position: DVec2,
    heading_deg: f64,
    gun_heading_deg: f64,
    radar_heading_deg: f64,
    velocity: f64,
    gun_heat: f64,
    body_turn_remaining_deg: f64,
    gun_turn_remaining_deg: f64,
    radar_turn_remaining_deg: f64,
    distance_remaining: f64,
}

/// One recorded tick of a practice duel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    /// Own state as the agent saw it at the start of the tick.
    pub own: SelfState,
    /// Enemy ground truth before this tick's motion.
    pub enemy_position: DVec2,
    /// Whether this tick's radar sweep produced a detection (delivered to
    /// the agent at the start of the next tick).
    pub detected: bool,
    /// The batch the agent issued this tick.
    pub batch: CommandBatch,
}

/// A complete recorded duel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuelTrace {
    pub records: Vec<TickRecord>,
    /// Shots the engine actually released (hot-gun attempts are refused).
    pub shots_fired: u64,
}

/// The practice arena.
pub struct Arena {
    own: OwnBody,
    enemy: EnemyBody,
    script: OpponentScript,
    setup: SetupConfig,
    rng: ChaCha8Rng,
    tick: u64,
    shots_fired: u64,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Self {
            own: OwnBody {
                position: config.own_start,
                ..OwnBody::default()
            },
            enemy: EnemyBody {
                position: config.enemy_start,
                heading_deg: config.enemy_heading_deg,
                speed: 0.0,
            },
            script: config.script,
            setup: config.setup,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tick: 0,
            shots_fired: 0,
        }
    }

    /// Run a duel for the given number of ticks and record the trace.
    ///
    /// Each tick: hand the agent its state plus last tick's detection,
    /// apply the returned batch as one unit, then move the opponent. The
    /// snapshot the agent acts on is therefore always one tick stale,
    /// matching the commanded engine's sensor model.
    pub fn run(&mut self, agent: &mut Agent, ticks: u64) -> DuelTrace {
        let mut trace = DuelTrace::default();
        let mut contact: Option<EnemySnapshot> = None;

        for _ in 0..ticks {
            let own = self.self_state();
            let batch = agent.tick(&own, contact.as_ref());
            contact = self.apply(&batch);

            trace.records.push(TickRecord {
                tick: self.tick,
                own,
                enemy_position: self.enemy.position,
                detected: contact.is_some(),
                batch,
            });

            self.script.advance(&mut self.enemy, &mut self.rng);
            self.tick += 1;
        }

        trace.shots_fired = self.shots_fired;
        trace
    }

    /// The kinematic view handed to the agent at the start of a tick.
    fn self_state(&self) -> SelfState {
        SelfState {
            position: self.own.position,
            heading_deg: self.own.heading_deg,
            gun_heading_deg: self.own.gun_heading_deg,
            radar_heading_deg: self.own.radar_heading_deg,
            velocity: self.own.velocity,
            tick: self.tick,
            gun_turn_remaining_deg: self.own.gun_turn_remaining_deg,
            gun_heat: self.own.gun_heat,
        }
    }

    /// Apply one tick's batch and integrate one tick of motion. Returns the
    /// detection produced by this tick's radar sweep, if any.
    fn apply(&mut self, batch: &CommandBatch) -> Option<EnemySnapshot> {
        // New commands supersede whatever turn was still in progress
        if let Some(deg) = batch.radar_turn_deg {
            self.own.radar_turn_remaining_deg = deg;
        }
        if let Some(deg) = batch.body_turn_deg {
            self.own.body_turn_remaining_deg = deg;
        }
        if let Some(deg) = batch.gun_turn_deg {
            self.own.gun_turn_remaining_deg = deg;
        }
        if let Some(dist) = batch.advance {
            self.own.distance_remaining = dist;
        }

        // Body turn, slower at speed
        let body_rate =
            (BODY_TURN_RATE_DEG - BODY_TURN_SPEED_PENALTY_DEG * self.own.velocity.abs()).max(0.0);
        let body_step = clamp_step(self.own.body_turn_remaining_deg, body_rate);
        self.own.heading_deg = normalize_absolute(self.own.heading_deg + body_step);
        self.own.body_turn_remaining_deg -= body_step;

        // Gun rides the body unless the assist compensates it out
        let gun_step = clamp_step(self.own.gun_turn_remaining_deg, GUN_TURN_RATE_DEG);
        let gun_drift = if self.setup.adjust_gun_for_body_turn {
            0.0
        } else {
            body_step
        };
        self.own.gun_heading_deg =
            normalize_absolute(self.own.gun_heading_deg + gun_step + gun_drift);
        self.own.gun_turn_remaining_deg -= gun_step;

        // Radar rides the gun unless the assist compensates it out
        let radar_prev = self.own.radar_heading_deg;
        let radar_step = clamp_step(self.own.radar_turn_remaining_deg, RADAR_TURN_RATE_DEG);
        let radar_drift = if self.setup.adjust_radar_for_gun_turn {
            0.0
        } else {
            gun_step + gun_drift
        };
        let swept = radar_step + radar_drift;
        self.own.radar_heading_deg = normalize_absolute(radar_prev + swept);
        self.own.radar_turn_remaining_deg -= radar_step;

        self.integrate_chassis();
        self.update_gun(batch.fire);

        self.detect(radar_prev, swept)
    }

    /// Trapezoidal speed profile toward the commanded distance, then
    /// position integration with the wall clamp.
    fn integrate_chassis(&mut self) {
        let desired = if self.own.distance_remaining > 0.0 {
            MAX_SPEED
        } else if self.own.distance_remaining < 0.0 {
            -MAX_SPEED
        } else {
            0.0
        };

        let dv = desired - self.own.velocity;
        if dv != 0.0 {
            let speeding_up =
                self.own.velocity == 0.0 || self.own.velocity.signum() == dv.signum();
            let rate = if speeding_up { ACCELERATION } else { DECELERATION };
            self.own.velocity += dv.clamp(-rate, rate);
        }

        let travel = self.own.velocity;
        if travel != 0.0 {
            self.own.position += travel * bearing_unit(self.own.heading_deg);

            // Consume the commanded distance, stopping at its end
            if self.own.distance_remaining != 0.0 {
                let after = self.own.distance_remaining - travel;
                self.own.distance_remaining =
                    if after.signum() != self.own.distance_remaining.signum() {
                        0.0
                    } else {
                        after
                    };
            }
        }

        // The engine clamps at the wall; the stall is the agent's cue to
        // reverse its strafe
        let clamped = self.own.position.clamp(DVec2::ZERO, DVec2::splat(FIELD_SIZE));
        if clamped != self.own.position {
            self.own.position = clamped;
            self.own.velocity = 0.0;
            self.own.distance_remaining = 0.0;
        }
    }

    /// Cool the gun, then release the commanded shot if it is legal.
    fn update_gun(&mut self, fire: Option<f64>) {
        self.own.gun_heat = (self.own.gun_heat - GUN_COOLING_RATE).max(0.0);

        if let Some(power) = fire {
            // A hot gun simply refuses the shot
            if self.own.gun_heat == 0.0 {
                let power = power.clamp(0.1, MAX_FIRE_POWER);
                self.own.gun_heat = GUN_HEAT_BASE + power / GUN_HEAT_POWER_DIVISOR;
                self.shots_fired += 1;
            }
        }
    }

    /// Build the detection for this tick's sweep, if the beam crossed the
    /// enemy. The snapshot is relative to own heading, like the engine's.
    fn detect(&self, radar_prev_deg: f64, swept_deg: f64) -> Option<EnemySnapshot> {
        let offset = self.enemy.position - self.own.position;
        let distance = offset.length();
        if distance <= f64::EPSILON {
            // Degenerate overlap yields no echo
            return None;
        }

        let enemy_bearing = absolute_bearing(self.own.position, self.enemy.position);
        if !beam_crossed(radar_prev_deg, swept_deg, enemy_bearing) {
            return None;
        }

        Some(EnemySnapshot {
            bearing_deg: normalize_relative(enemy_bearing - self.own.heading_deg),
            distance,
            heading_deg: self.enemy.heading_deg,
            velocity: self.enemy.speed,
        })
    }
}

/// Turn actually performed this tick: the remaining turn clamped to the
/// sub-system's rate limit.
fn clamp_step(remaining_deg: f64, rate_deg: f64) -> f64 {
    remaining_deg.clamp(-rate_deg, rate_deg)
}

/// Whether a tick's radar sweep from `prev_deg` through `swept_deg` degrees
/// crossed the target bearing, credited with a small beam half-width on
/// both ends.
fn beam_crossed(prev_deg: f64, swept_deg: f64, target_deg: f64) -> bool {
    let diff = normalize_relative(target_deg - prev_deg);
    if swept_deg >= 0.0 {
        diff >= -RADAR_BEAM_HALF_WIDTH_DEG && diff <= swept_deg + RADAR_BEAM_HALF_WIDTH_DEG
    } else {
        diff <= RADAR_BEAM_HALF_WIDTH_DEG && diff >= swept_deg - RADAR_BEAM_HALF_WIDTH_DEG
    }
}
