//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Pool logic lives in the engine crate, not here.

use serde::{Deserialize, Serialize};

/// Marks an entity as a pooled drifter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drifter;

/// Whether the pooled entity is currently in play.
///
/// Toggled only by the pool (activation) and the reclamation sweep
/// (deactivation). Hosts treat it as read-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Active(pub bool);

/// Angular velocity about the entity's own axis.
///
/// Optional capability, paired with `Velocity`: the momentum stamp applies
/// only to entities whose prototype carries both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AngularVelocity {
    pub rads_per_sec: f64,
}

/// One-shot random scale stamped at pool initialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scale {
    pub factor: f64,
}

/// One-shot random orientation stamped at pool initialization.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Orientation {
    pub radians: f64,
}

// Position and Velocity live in types.rs but double as ECS components.
