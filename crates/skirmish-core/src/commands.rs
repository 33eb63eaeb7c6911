//! Commands issued by the agent to the battle engine.
//!
//! All commands for a tick are accumulated into one `CommandBatch` and handed
//! to the engine as a unit, so the engine never observes a partial update.
//! A `None` turn field means "no new command this tick": the engine keeps
//! working through whatever turn it was last given.

use serde::{Deserialize, Serialize};

/// One tick's complete command set. Angles in degrees, signed clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandBatch {
    /// Radar turn delta; supersedes any uncompleted radar turn.
    pub radar_turn_deg: Option<f64>,
    /// Body turn delta; supersedes any uncompleted body turn.
    pub body_turn_deg: Option<f64>,
    /// Gun turn delta; supersedes any uncompleted gun turn.
    pub gun_turn_deg: Option<f64>,
    /// Move distance along the body heading; issued only on strafe reversals.
    pub advance: Option<f64>,
    /// Fire power, at most one shot per tick.
    pub fire: Option<f64>,
}

impl CommandBatch {
    /// A batch holding only a radar turn.
    pub fn radar_turn(deg: f64) -> Self {
        Self {
            radar_turn_deg: Some(deg),
            ..Self::default()
        }
    }

    /// A batch holding only a body turn.
    pub fn body_turn(deg: f64) -> Self {
        Self {
            body_turn_deg: Some(deg),
            ..Self::default()
        }
    }

    /// A batch holding only a gun turn.
    pub fn gun_turn(deg: f64) -> Self {
        Self {
            gun_turn_deg: Some(deg),
            ..Self::default()
        }
    }
}

/// RGB color for the one-time cosmetic setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const LIGHT_GRAY: Rgb = Rgb {
        r: 192,
        g: 192,
        b: 192,
    };
    pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
}

/// One-time startup configuration: cosmetics plus the engine's
/// turn-compensation assists. Consumed by the engine before the first tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupConfig {
    pub body_color: Rgb,
    pub gun_color: Rgb,
    pub radar_color: Rgb,
    pub bullet_color: Rgb,
    /// Engine subtracts gun rotation from the radar, making radar turn
    /// commands world-frame.
    pub adjust_radar_for_gun_turn: bool,
    /// Engine subtracts body rotation from the gun, making gun turn
    /// commands world-frame.
    pub adjust_gun_for_body_turn: bool,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            body_color: Rgb::BLACK,
            gun_color: Rgb::LIGHT_GRAY,
            radar_color: Rgb::BLUE,
            bullet_color: Rgb::RED,
            adjust_radar_for_gun_turn: true,
            adjust_gun_for_body_turn: true,
        }
    }
}
