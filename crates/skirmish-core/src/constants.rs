//! Agent tuning parameters and engine interface constants.

// --- Radar ---

/// Overshoot added past the enemy bearing on each tracking sweep (degrees).
/// The beam deliberately passes the enemy so it re-crosses it on the way back.
pub const RADAR_OVERSHOOT_DEG: f64 = 30.0;

/// Radar turn issued per quiet tick while searching (degrees, one direction).
pub const SEARCH_SWEEP_DEG: f64 = 360.0;

/// Consecutive ticks without a detection before tracking reverts to search.
/// The longest tracking sweep (180 degrees) completes in 4 ticks at the
/// radar's rate limit; this allows it to finish plus a return pass.
pub const TARGET_LOSS_TICKS: u64 = 8;

// --- Movement ---

/// Offset from true perpendicular toward the enemy (degrees), so the orbit
/// slowly closes distance instead of circling at constant range.
pub const ORBIT_BIAS_DEG: f64 = 15.0;

/// Distance of one strafe leg (engine distance units).
pub const STRAFE_LEG_DISTANCE: f64 = 150.0;

/// Ticks between periodic strafe reversals.
pub const STRAFE_REVERSAL_INTERVAL_TICKS: u64 = 20;

// --- Gunnery ---

/// Projectile speed with a fully settled turret (units per tick).
pub const PROJECTILE_SPEED_MAX: f64 = 20.0;

/// Speed derating per degree of remaining gun turn (units/tick per degree).
/// Readiness heuristic, not engine ballistics; tune together with
/// `PROJECTILE_DERATE_CAP_DEG`.
pub const PROJECTILE_DERATE_PER_DEG: f64 = 3.0;

/// Remaining-turn magnitude beyond which the derating stops growing (degrees).
pub const PROJECTILE_DERATE_CAP_DEG: f64 = 3.0;

/// Fire power numerator: power = this / distance, capped at `MAX_FIRE_POWER`.
/// Full power inside ~133 units, weaker but faster shots beyond.
pub const FIRE_POWER_DISTANCE_SCALE: f64 = 400.0;

/// Engine maximum fire power.
pub const MAX_FIRE_POWER: f64 = 3.0;

/// Remaining gun turn must be inside this margin to release a shot (degrees).
pub const GUN_SETTLE_MARGIN_DEG: f64 = 10.0;

// --- Engine interface (the commanded engine's published limits) ---

/// Maximum body turn per tick at standstill (degrees).
pub const BODY_TURN_RATE_DEG: f64 = 10.0;

/// Body turn rate penalty per unit of speed (degrees per tick per unit).
pub const BODY_TURN_SPEED_PENALTY_DEG: f64 = 0.75;

/// Maximum gun turn per tick (degrees).
pub const GUN_TURN_RATE_DEG: f64 = 20.0;

/// Maximum radar turn per tick (degrees).
pub const RADAR_TURN_RATE_DEG: f64 = 45.0;

/// Top chassis speed (units per tick).
pub const MAX_SPEED: f64 = 8.0;

/// Chassis acceleration (units per tick per tick).
pub const ACCELERATION: f64 = 1.0;

/// Chassis braking deceleration (units per tick per tick).
pub const DECELERATION: f64 = 2.0;

/// Gun heat added per shot: `GUN_HEAT_BASE + power / GUN_HEAT_POWER_DIVISOR`.
pub const GUN_HEAT_BASE: f64 = 1.0;

/// Divisor applied to fire power in the per-shot heat formula.
pub const GUN_HEAT_POWER_DIVISOR: f64 = 5.0;

/// Gun heat removed per tick.
pub const GUN_COOLING_RATE: f64 = 0.1;

// --- Practice arena ---

/// Side length of the square practice field (distance units).
pub const FIELD_SIZE: f64 = 800.0;

/// Beam half-width credited to the radar when checking whether a tick's
/// sweep crossed the enemy bearing (degrees).
pub const RADAR_BEAM_HALF_WIDTH_DEG: f64 = 2.0;

// --- Victory celebration ---

/// Full body circles (each direction) in the victory lap.
pub const VICTORY_BODY_TURNS: usize = 3;

/// Gun/radar counter-swings between each pair of body circles.
pub const VICTORY_SWING_REPEATS: usize = 3;

/// Half-circle swing for gun and radar during the victory lap (degrees).
pub const VICTORY_SWING_DEG: f64 = 180.0;
