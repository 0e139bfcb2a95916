//! Reclamation sweep: per-slot evaluation against the tracking radius.
//!
//! One slot is evaluated per scheduler step, in pool order, inactive slots
//! included, so draining a pool of N slots costs N steps. Pass bookkeeping
//! (restart on survivors, termination when clean) lives in the scheduler.

use hecs::{Entity, World};

use driftfield_core::components::Active;
use driftfield_core::types::Position;

/// Result of evaluating one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    /// Active and beyond the tracking radius: deactivated.
    Deactivated,
    /// Active and still inside the tracking radius: left alone.
    StillInRange,
    /// Already inactive: nothing to do.
    Inactive,
}

/// Evaluate one slot against the last known reference point.
pub fn evaluate_slot(
    world: &mut World,
    entity: Entity,
    reference: Position,
    outer_radius: f64,
) -> SweepOutcome {
    match world.query_one_mut::<(&Position, &mut Active)>(entity) {
        Ok((position, active)) if active.0 => {
            if position.distance_to(&reference) > outer_radius {
                active.0 = false;
                SweepOutcome::Deactivated
            } else {
                SweepOutcome::StillInRange
            }
        }
        _ => SweepOutcome::Inactive,
    }
}
