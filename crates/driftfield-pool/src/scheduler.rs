//! Time-driven spawn scheduling.
//!
//! The host owns the clock: each tick the scheduler accumulates the supplied
//! delta and reports whether a step is due. At most one step fires per tick
//! call, so a long host stall never produces a burst; backlogged steps
//! drain one per subsequent tick.

use driftfield_core::config::PoolConfig;
use driftfield_core::enums::{EndBehavior, SchedulerPhase};
use driftfield_core::events::PoolEvent;

use crate::systems::sweep::SweepOutcome;

/// What the engine must do for this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerStep {
    /// Nothing due.
    Idle,
    /// Allocate one slot.
    Spawn,
    /// Evaluate one slot of the reclamation sweep.
    Sweep { slot: usize },
}

/// Bookkeeping for one reclamation drain.
#[derive(Debug, Clone, Copy, Default)]
struct SweepProgress {
    /// Next slot to evaluate, in pool order.
    next_slot: usize,
    /// Whether the current pass has seen no in-range survivor so far.
    clean: bool,
    /// Completed passes.
    passes: u64,
}

/// Explicit state machine behind the spawn/reclaim lifecycle:
/// `AwaitingFirstSpawn -> Spawning -> { Terminated | Reclaiming }`.
pub struct SpawnScheduler {
    phase: SchedulerPhase,
    /// Seconds accumulated toward the next step.
    acc: f64,
    /// Spawn window consumed so far, advancing one interval per spawn.
    elapsed_in_window: f64,
    sweep: SweepProgress,
}

impl Default for SpawnScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SpawnScheduler {
    pub fn new() -> Self {
        Self {
            phase: SchedulerPhase::AwaitingFirstSpawn,
            acc: 0.0,
            elapsed_in_window: 0.0,
            sweep: SweepProgress::default(),
        }
    }

    pub fn phase(&self) -> SchedulerPhase {
        self.phase
    }

    /// Completed reclamation passes.
    pub fn passes(&self) -> u64 {
        self.sweep.passes
    }

    /// Advance the clock by `dt` and report the step due this tick.
    pub fn advance(
        &mut self,
        dt: f64,
        config: &PoolConfig,
        events: &mut Vec<PoolEvent>,
    ) -> SchedulerStep {
        match self.phase {
            SchedulerPhase::Terminated => SchedulerStep::Idle,
            SchedulerPhase::AwaitingFirstSpawn => {
                self.acc += dt;
                if self.acc >= config.delay_secs {
                    self.set_phase(SchedulerPhase::Spawning, events);
                    // First spawn fires the moment the delay expires.
                    self.acc = 0.0;
                    self.step_spawn(config, events)
                } else {
                    SchedulerStep::Idle
                }
            }
            SchedulerPhase::Spawning => {
                self.acc += dt;
                if self.acc >= config.respawn_secs {
                    self.acc -= config.respawn_secs;
                    self.step_spawn(config, events)
                } else {
                    SchedulerStep::Idle
                }
            }
            SchedulerPhase::Reclaiming => {
                self.acc += dt;
                if self.acc >= config.respawn_secs {
                    self.acc -= config.respawn_secs;
                    SchedulerStep::Sweep {
                        slot: self.sweep.next_slot,
                    }
                } else {
                    SchedulerStep::Idle
                }
            }
        }
    }

    /// Record the outcome of a sweep evaluation and handle pass boundaries.
    pub fn finish_sweep_step(
        &mut self,
        outcome: SweepOutcome,
        config: &PoolConfig,
        events: &mut Vec<PoolEvent>,
    ) {
        if outcome == SweepOutcome::StillInRange {
            self.sweep.clean = false;
        }
        self.sweep.next_slot += 1;
        if self.sweep.next_slot < config.pool_size {
            return;
        }

        self.sweep.passes += 1;
        if self.sweep.clean {
            log::debug!("pool drained after {} pass(es)", self.sweep.passes);
            events.push(PoolEvent::PoolDrained {
                passes: self.sweep.passes,
            });
            self.set_phase(SchedulerPhase::Terminated, events);
        } else if config.max_sweep_passes > 0 && self.sweep.passes >= config.max_sweep_passes {
            log::warn!(
                "sweep pass cap ({}) reached with entities still in range",
                config.max_sweep_passes
            );
            self.set_phase(SchedulerPhase::Terminated, events);
        } else {
            // Survivors restart a full fresh pass from the first slot.
            self.sweep.next_slot = 0;
            self.sweep.clean = true;
            events.push(PoolEvent::SweepRestarted {
                pass: self.sweep.passes,
            });
        }
    }

    /// External cancellation from any phase. Idempotent; never touches the
    /// pool.
    pub fn cancel(&mut self, events: &mut Vec<PoolEvent>) {
        self.set_phase(SchedulerPhase::Terminated, events);
    }

    /// Gate each spawn on the window: zero duration means unbounded, and the
    /// window check happens before the allocation, so the last interval of a
    /// bounded window ends with a transition instead of a spawn.
    fn step_spawn(
        &mut self,
        config: &PoolConfig,
        events: &mut Vec<PoolEvent>,
    ) -> SchedulerStep {
        let window_open = config.spawn_duration_secs == 0.0
            || self.elapsed_in_window < config.spawn_duration_secs;
        if window_open {
            self.elapsed_in_window += config.respawn_secs;
            return SchedulerStep::Spawn;
        }

        match config.end_behavior {
            EndBehavior::Reclaim => {
                self.set_phase(SchedulerPhase::Reclaiming, events);
                self.sweep = SweepProgress {
                    next_slot: 0,
                    clean: true,
                    passes: 0,
                };
                // The first evaluation fires with the transition itself.
                SchedulerStep::Sweep { slot: 0 }
            }
            EndBehavior::Halt => {
                self.set_phase(SchedulerPhase::Terminated, events);
                SchedulerStep::Idle
            }
        }
    }

    fn set_phase(&mut self, to: SchedulerPhase, events: &mut Vec<PoolEvent>) {
        if self.phase != to {
            log::debug!("scheduler phase {:?} -> {:?}", self.phase, to);
            events.push(PoolEvent::PhaseChanged {
                from: self.phase,
                to,
            });
            self.phase = to;
        }
    }
}
