//! Enumeration types used throughout the engine.

use serde::{Deserialize, Serialize};

/// Scheduler lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulerPhase {
    /// Holding for the initial delay.
    #[default]
    AwaitingFirstSpawn,
    /// Allocating one slot per respawn interval.
    Spawning,
    /// Draining out-of-range entities, one slot per interval.
    Reclaiming,
    /// No further scheduling. Terminal.
    Terminated,
}

/// What the scheduler does once the spawn window closes.
///
/// Only reachable when `spawn_duration_secs` is nonzero; a zero duration
/// keeps the scheduler in `Spawning` forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndBehavior {
    /// Stop scheduling and leave every entity as it stands.
    #[default]
    Halt,
    /// Drain the pool: deactivate entities outside the tracking radius.
    Reclaim,
}
