//! Pool engine — the single entry point for hosts.
//!
//! `PoolEngine` owns the hecs ECS world, the slot pool, and the scheduler,
//! and advances everything from host-supplied ticks. One logical timeline:
//! spawning and reclamation are never active concurrently for the same
//! pool, and `&mut self` serializes all mutation.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use driftfield_core::config::PoolConfig;
use driftfield_core::enums::SchedulerPhase;
use driftfield_core::error::ConfigError;
use driftfield_core::events::PoolEvent;
use driftfield_core::state::PoolSnapshot;
use driftfield_core::types::{Position, SimTime};

use crate::pool::EntityPool;
use crate::scheduler::{SchedulerStep, SpawnScheduler};
use crate::systems::snapshot;
use crate::systems::sweep::{self, SweepOutcome};
use crate::world_setup::PrototypeFactory;

/// Configuration for constructing a pool engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed for determinism. Same seed = same run.
    pub seed: u64,
    pub pool: PoolConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pool: PoolConfig::default(),
        }
    }
}

/// The pool engine. Owns the ECS world and all scheduling state.
pub struct PoolEngine {
    world: World,
    pool: EntityPool,
    scheduler: SpawnScheduler,
    config: PoolConfig,
    rng: ChaCha8Rng,
    time: SimTime,
    reference: Position,
    events: Vec<PoolEvent>,
}

impl PoolEngine {
    /// Validate the configuration and populate the pool via the factory.
    pub fn new(
        config: EngineConfig,
        mut factory: impl PrototypeFactory,
    ) -> Result<Self, ConfigError> {
        config.pool.validate()?;

        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut pool = EntityPool::new();
        pool.populate(&mut world, &mut factory, &config.pool, &mut rng)?;

        Ok(Self {
            world,
            pool,
            scheduler: SpawnScheduler::new(),
            config: config.pool,
            rng,
            time: SimTime::default(),
            reference: Position::default(),
            events: Vec::new(),
        })
    }

    /// Advance the engine by one host tick and return the resulting snapshot.
    ///
    /// `reference` is the tracked viewpoint for this tick; placement and
    /// range tests both use the most recently supplied value. Never fails:
    /// degraded conditions inside a tick are logged no-ops.
    pub fn tick(&mut self, dt: f64, reference: Position) -> PoolSnapshot {
        self.reference = reference;
        let running = self.scheduler.phase() != SchedulerPhase::Terminated;

        match self.scheduler.advance(dt, &self.config, &mut self.events) {
            SchedulerStep::Idle => {}
            SchedulerStep::Spawn => {
                self.pool.allocate_and_place(
                    &mut self.world,
                    &mut self.rng,
                    reference,
                    &self.config,
                    &mut self.events,
                );
            }
            SchedulerStep::Sweep { slot } => {
                let entity = self.pool.slots()[slot];
                let outcome = sweep::evaluate_slot(
                    &mut self.world,
                    entity,
                    reference,
                    self.config.outer_radius,
                );
                match outcome {
                    SweepOutcome::Deactivated => {
                        log::debug!("slot {slot} left the tracking radius, deactivated");
                        self.events.push(PoolEvent::Deactivated { slot });
                    }
                    SweepOutcome::StillInRange => {
                        log::debug!("slot {slot} still inside the tracking radius");
                        self.events.push(PoolEvent::StillInRange { slot });
                    }
                    SweepOutcome::Inactive => {}
                }
                self.scheduler
                    .finish_sweep_step(outcome, &self.config, &mut self.events);
            }
        }

        if running {
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        snapshot::build_snapshot(
            &self.world,
            &self.pool,
            &self.time,
            self.scheduler.phase(),
            self.reference,
            self.scheduler.passes(),
            events,
        )
    }

    /// Stop all scheduling. Idempotent; entities keep whatever state they
    /// were last set to. No rollback semantics.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel(&mut self.events);
    }

    /// Get the current scheduler phase.
    pub fn phase(&self) -> SchedulerPhase {
        self.scheduler.phase()
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the slot pool.
    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    /// Overwrite the allocation cursor (for corruption tests).
    #[cfg(test)]
    pub fn corrupt_cursor(&mut self, value: usize) {
        self.pool.corrupt_cursor(value);
    }
}
