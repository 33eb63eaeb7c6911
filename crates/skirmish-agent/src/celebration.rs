//! Victory celebration — a fixed turn sequence with no decision content.

use skirmish_core::commands::CommandBatch;
use skirmish_core::constants::{VICTORY_BODY_TURNS, VICTORY_SWING_DEG, VICTORY_SWING_REPEATS};

/// The sequence issued after a round win: full body circles in both
/// directions, with gun/radar counter-swings between each pair. One command
/// per batch; the engine plays them back to back.
pub fn victory_lap() -> Vec<CommandBatch> {
    let mut steps = Vec::new();
    for _ in 0..VICTORY_BODY_TURNS {
        steps.push(CommandBatch::body_turn(360.0));
        steps.push(CommandBatch::body_turn(-360.0));
        for _ in 0..VICTORY_SWING_REPEATS {
            steps.push(CommandBatch::gun_turn(VICTORY_SWING_DEG));
            steps.push(CommandBatch::radar_turn(-VICTORY_SWING_DEG));
            steps.push(CommandBatch::gun_turn(-VICTORY_SWING_DEG));
            steps.push(CommandBatch::radar_turn(VICTORY_SWING_DEG));
        }
    }
    steps
}
