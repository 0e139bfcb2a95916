//! Pool snapshot — the complete visible state returned from each tick.

use serde::{Deserialize, Serialize};

use crate::enums::SchedulerPhase;
use crate::events::PoolEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete engine state visible to the host after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub time: SimTime,
    pub phase: SchedulerPhase,
    /// Reference point supplied with this tick.
    pub reference: Position,
    /// Number of slots currently in play.
    pub active_count: usize,
    /// Completed reclamation passes (zero until the sweep starts).
    pub sweep_passes: u64,
    pub slots: Vec<SlotView>,
    pub events: Vec<PoolEvent>,
}

/// One pooled slot as visible to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotView {
    pub index: usize,
    pub position: Position,
    pub active: bool,
    /// Present only when the prototype carries kinetics.
    pub velocity: Option<Velocity>,
    pub angular: Option<f64>,
    /// One-shot randomization results, when enabled.
    pub scale: Option<f64>,
    pub orientation: Option<f64>,
}
