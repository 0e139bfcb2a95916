//! Diagnostic events emitted by the engine, drained into each snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::SchedulerPhase;
use crate::types::Position;

/// Lifecycle moments observable by hosts and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PoolEvent {
    /// A slot was repositioned and activated.
    Spawned { slot: usize, position: Position },
    /// The slot's entity was active and inside the tracking radius, so its
    /// turn came up without touching it.
    KeptInPlay { slot: usize },
    /// The sweep deactivated an out-of-range entity.
    Deactivated { slot: usize },
    /// The sweep found an active entity still inside the tracking radius.
    StillInRange { slot: usize },
    /// A sweep pass ended with survivors; a fresh pass begins.
    SweepRestarted { pass: u64 },
    /// Every slot ended a pass inactive; the sweep is done.
    PoolDrained { passes: u64 },
    /// The allocation cursor was found out of bounds and reset to zero.
    CursorReset { observed: usize },
    /// The scheduler moved between phases.
    PhaseChanged {
        from: SchedulerPhase,
        to: SchedulerPhase,
    },
}
