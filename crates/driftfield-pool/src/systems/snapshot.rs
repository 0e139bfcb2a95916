//! Snapshot system: reads the world into a complete `PoolSnapshot`.
//!
//! Strictly read-only; nothing here mutates the world.

use hecs::World;

use driftfield_core::components::{Active, AngularVelocity, Orientation, Scale};
use driftfield_core::enums::SchedulerPhase;
use driftfield_core::events::PoolEvent;
use driftfield_core::state::{PoolSnapshot, SlotView};
use driftfield_core::types::{Position, SimTime, Velocity};

use crate::pool::EntityPool;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    pool: &EntityPool,
    time: &SimTime,
    phase: SchedulerPhase,
    reference: Position,
    sweep_passes: u64,
    events: Vec<PoolEvent>,
) -> PoolSnapshot {
    let slots: Vec<SlotView> = pool
        .slots()
        .iter()
        .enumerate()
        .map(|(index, &entity)| SlotView {
            index,
            position: world
                .get::<&Position>(entity)
                .map(|p| *p)
                .unwrap_or_default(),
            active: world.get::<&Active>(entity).map(|a| a.0).unwrap_or(false),
            velocity: world.get::<&Velocity>(entity).ok().map(|v| *v),
            angular: world
                .get::<&AngularVelocity>(entity)
                .ok()
                .map(|a| a.rads_per_sec),
            scale: world.get::<&Scale>(entity).ok().map(|s| s.factor),
            orientation: world.get::<&Orientation>(entity).ok().map(|o| o.radians),
        })
        .collect();

    let active_count = slots.iter().filter(|s| s.active).count();

    PoolSnapshot {
        time: *time,
        phase,
        reference,
        active_count,
        sweep_passes,
        slots,
        events,
    }
}
