//! Prototype factories for populating the pool.
//!
//! The pool never decides what an entity is made of; that comes from an
//! external factory, once, at initialization. The factories here cover the
//! two shipped capability sets. Hosts supply their own closure for anything
//! richer, like sprites or collision shapes.

use hecs::World;

use driftfield_core::components::AngularVelocity;
use driftfield_core::types::{Position, Velocity};

/// Builds one pool entity. The entity must carry at least a `Position`;
/// the pool attaches its own bookkeeping components afterwards.
///
/// Implemented for any `FnMut(&mut World) -> hecs::Entity`.
pub trait PrototypeFactory {
    fn spawn(&mut self, world: &mut World) -> hecs::Entity;
}

impl<F> PrototypeFactory for F
where
    F: FnMut(&mut World) -> hecs::Entity,
{
    fn spawn(&mut self, world: &mut World) -> hecs::Entity {
        self(world)
    }
}

/// Spawn a drifter with kinetic components: the momentum stamp applies.
pub fn spawn_kinetic_drifter(world: &mut World) -> hecs::Entity {
    world.spawn((
        Position::default(),
        Velocity::default(),
        AngularVelocity::default(),
    ))
}

/// Spawn a drifter with position only: the momentum stamp skips it.
pub fn spawn_static_drifter(world: &mut World) -> hecs::Entity {
    world.spawn((Position::default(),))
}
