//! Practice arena for the SKIRMISH agent.
//!
//! A deterministic double for the battle engine interface: applies command
//! batches under the engine's rate limits, moves a scripted opponent, and
//! records per-tick duel traces for tests and the headless runner. Not a
//! battle engine — there is no damage model and no round lifecycle beyond a
//! fixed tick count.

pub mod arena;
pub mod opponent;

pub use arena::{Arena, ArenaConfig, DuelTrace};
pub use skirmish_core as core;
