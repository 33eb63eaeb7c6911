//! Enumeration types used throughout the agent.

use serde::{Deserialize, Serialize};

/// Radar behavioral mode.
///
/// The two modes are mutually exclusive: the radar either rotates a full
/// circle in one direction looking for anything (Searching), or oscillates
/// in a narrowing arc around the last detected bearing (Tracking).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMode {
    /// No target yet, or the last target has been lost.
    #[default]
    Searching,
    /// Oscillating sweep centered on the last detected bearing.
    Tracking,
}
