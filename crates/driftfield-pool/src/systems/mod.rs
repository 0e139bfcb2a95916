//! Systems that operate on the pool world.
//!
//! Systems are functions over `&mut World` (or `&World` for read-only).
//! They do not own state: scheduling state lives in the engine and the
//! scheduler, entity state lives in components.

pub mod placement;
pub mod snapshot;
pub mod sweep;
