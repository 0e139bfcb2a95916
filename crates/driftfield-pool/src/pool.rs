//! Fixed-capacity slot pool with round-robin allocation.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use driftfield_core::components::{Active, AngularVelocity, Drifter, Orientation, Scale};
use driftfield_core::config::PoolConfig;
use driftfield_core::constants::{ANGULAR_STAMP_RANGE, LINEAR_STAMP_RANGE};
use driftfield_core::error::ConfigError;
use driftfield_core::events::PoolEvent;
use driftfield_core::types::{Position, Velocity};

use crate::systems::placement;
use crate::world_setup::PrototypeFactory;

/// The recyclable slot array.
///
/// Entities are created once at populate time and never despawned; slots
/// cycle between active and inactive indefinitely. The pool mutates only
/// position, activity, and (when present) kinetics.
#[derive(Default)]
pub struct EntityPool {
    slots: Vec<Entity>,
    cursor: usize,
}

impl EntityPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot handles in pool order.
    pub fn slots(&self) -> &[Entity] {
        &self.slots
    }

    /// Current allocation cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Create and prepare all entities via the external factory.
    ///
    /// Attaches `Drifter` and `Active(false)` to every entity and stamps the
    /// one-shot scale/orientation randomization when enabled. A second call
    /// on a populated pool is a no-op.
    pub fn populate(
        &mut self,
        world: &mut World,
        factory: &mut dyn PrototypeFactory,
        config: &PoolConfig,
        rng: &mut ChaCha8Rng,
    ) -> Result<(), ConfigError> {
        if !self.slots.is_empty() {
            return Ok(());
        }

        for _ in 0..config.pool_size {
            let entity = factory.spawn(world);
            if !world.satisfies::<&Position>(entity).unwrap_or(false) {
                return Err(ConfigError::IncompletePrototype);
            }
            let _ = world.insert(entity, (Drifter, Active(false)));

            if config.random_size {
                let (min, max) = config.size_range;
                let factor = rng.gen_range(min..=max);
                let _ = world.insert_one(entity, Scale { factor });
            }
            if config.random_rotation {
                let radians = rng.gen_range(0.0..std::f64::consts::TAU);
                let _ = world.insert_one(entity, Orientation { radians });
            }

            self.slots.push(entity);
        }
        Ok(())
    }

    /// Allocate the next slot and place its entity around `reference`.
    ///
    /// The cursor advances unconditionally, so every slot is revisited every
    /// `pool_size` calls whatever the outcome. Exactly one entity's state
    /// changes per call. The pool must be populated first; the engine
    /// guarantees this.
    pub fn allocate_and_place(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        reference: Position,
        config: &PoolConfig,
        events: &mut Vec<PoolEvent>,
    ) -> Entity {
        // Self-heal against external corruption; non-fatal.
        if self.cursor >= self.slots.len() {
            log::warn!(
                "allocation cursor {} out of bounds, resetting to 0",
                self.cursor
            );
            events.push(PoolEvent::CursorReset {
                observed: self.cursor,
            });
            self.cursor = 0;
        }

        let slot = self.cursor;
        let entity = self.slots[slot];
        self.cursor = (self.cursor + 1) % self.slots.len();

        if self.is_active_within_radius(world, entity, reference, config.outer_radius) {
            log::debug!("slot {slot} active and in range, keeping as-is");
            events.push(PoolEvent::KeptInPlay { slot });
            return entity;
        }

        let position =
            placement::sample(rng, reference, config.inner_radius, config.outer_radius);
        if let Ok(pos) = world.query_one_mut::<&mut Position>(entity) {
            *pos = position;
        }

        self.stamp_momentum(world, entity, rng, config.keep_momentum);

        if let Ok(active) = world.query_one_mut::<&mut Active>(entity) {
            active.0 = true;
        }

        log::debug!(
            "slot {slot} spawned at ({:.2}, {:.2})",
            position.x,
            position.y
        );
        events.push(PoolEvent::Spawned { slot, position });
        entity
    }

    /// Reuse guard: an active entity inside the tracking radius keeps its
    /// position and momentum when its turn comes up.
    fn is_active_within_radius(
        &self,
        world: &mut World,
        entity: Entity,
        reference: Position,
        outer_radius: f64,
    ) -> bool {
        match world.query_one_mut::<(&Position, &Active)>(entity) {
            Ok((position, active)) => {
                active.0 && position.distance_to(&reference) <= outer_radius
            }
            Err(_) => false,
        }
    }

    /// Stamp fresh random kinetics on entities that carry them.
    ///
    /// Velocities are always written from the RNG first and then cleared
    /// unless momentum is kept, so the RNG stream does not depend on
    /// `keep_momentum`. Entities without the kinetic pair draw nothing.
    fn stamp_momentum(
        &self,
        world: &mut World,
        entity: Entity,
        rng: &mut ChaCha8Rng,
        keep_momentum: bool,
    ) {
        let Ok((velocity, angular)) =
            world.query_one_mut::<(&mut Velocity, &mut AngularVelocity)>(entity)
        else {
            return;
        };

        velocity.x = rng.gen_range(-LINEAR_STAMP_RANGE..=LINEAR_STAMP_RANGE);
        velocity.y = rng.gen_range(-LINEAR_STAMP_RANGE..=LINEAR_STAMP_RANGE);
        angular.rads_per_sec = rng.gen_range(-ANGULAR_STAMP_RANGE..=ANGULAR_STAMP_RANGE);

        if !keep_momentum {
            *velocity = Velocity::default();
            angular.rads_per_sec = 0.0;
        }
    }

    /// Force the cursor to an arbitrary value (for corruption tests).
    #[cfg(test)]
    pub fn corrupt_cursor(&mut self, value: usize) {
        self.cursor = value;
    }
}
