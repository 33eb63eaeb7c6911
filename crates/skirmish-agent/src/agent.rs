//! The agent controller: per-tick composition of the three policies.
//!
//! Control flow on a detection tick is fixed: radar, then movement, then
//! gunnery, with all resulting commands returned as one batch — the engine
//! applies the batch as a unit, so it never observes a partial tick. Between
//! detections the controller runs the search-mode radar behavior and, after
//! enough quiet ticks, gives up on the last target.

use skirmish_core::commands::{CommandBatch, SetupConfig};
use skirmish_core::constants::TARGET_LOSS_TICKS;
use skirmish_core::enums::ScanMode;
use skirmish_core::events::EnemySnapshot;
use skirmish_core::state::{DirectionState, SelfState};

use crate::{celebration, gunnery, movement, radar};

/// The combat agent. Owns the only state that persists across ticks:
/// the direction flags, the radar mode, and the quiet-tick counter.
#[derive(Debug, Default)]
pub struct Agent {
    dirs: DirectionState,
    mode: ScanMode,
    quiet_ticks: u64,
}

impl Agent {
    pub fn new() -> Self {
        Self::default()
    }

    /// One-time startup configuration handed to the engine before the round:
    /// cosmetics plus both turn-compensation assists, so radar and gun turn
    /// commands are world-frame.
    pub fn setup(&self) -> SetupConfig {
        SetupConfig::default()
    }

    /// Current radar mode.
    pub fn scan_mode(&self) -> ScanMode {
        self.mode
    }

    /// Decide one tick.
    ///
    /// `contact` is the fresh detection for this tick, if the radar produced
    /// one. The returned batch is the tick's complete command set.
    pub fn tick(&mut self, own: &SelfState, contact: Option<&EnemySnapshot>) -> CommandBatch {
        match contact {
            Some(snapshot) => {
                self.mode = ScanMode::Tracking;
                self.quiet_ticks = 0;
                self.engage(own, snapshot)
            }
            None => self.idle(),
        }
    }

    /// Victory celebration: a fixed turn sequence with no decision content,
    /// never interleaved with targeting.
    pub fn on_round_won(&self) -> Vec<CommandBatch> {
        celebration::victory_lap()
    }

    /// Detection tick: radar sweep, strafing move, firing solution.
    fn engage(&mut self, own: &SelfState, contact: &EnemySnapshot) -> CommandBatch {
        let radar_turn = radar::tracking_sweep(own, contact, &mut self.dirs);
        let movement = movement::strafe(own, contact, &mut self.dirs);
        let solution = gunnery::solve(own, contact);

        CommandBatch {
            radar_turn_deg: Some(radar_turn),
            body_turn_deg: Some(movement.body_turn_deg),
            gun_turn_deg: Some(solution.gun_turn_deg),
            advance: movement.advance,
            fire: solution.fire,
        }
    }

    /// Quiet tick: keep the search rotation going, or let a recent tracking
    /// sweep finish. After `TARGET_LOSS_TICKS` without a detection the
    /// target is considered lost and the full rotation resumes.
    fn idle(&mut self) -> CommandBatch {
        if self.mode == ScanMode::Tracking {
            self.quiet_ticks += 1;
            if self.quiet_ticks >= TARGET_LOSS_TICKS {
                self.mode = ScanMode::Searching;
            }
        }

        match self.mode {
            ScanMode::Searching => CommandBatch::radar_turn(radar::searching_sweep()),
            // The oscillation issued on the last detection still stands;
            // the engine keeps turning until it completes.
            ScanMode::Tracking => CommandBatch::default(),
        }
    }
}
