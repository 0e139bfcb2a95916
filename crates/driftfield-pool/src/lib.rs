//! Pool engine for driftfield.
//!
//! Owns the hecs ECS world, drives the spawn scheduler and reclamation
//! sweep from host-supplied ticks, and produces `PoolSnapshot`s. Completely
//! headless (the host owns the timer and the rendering), enabling
//! deterministic testing.

pub mod engine;
pub mod pool;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use driftfield_core as core;
pub use engine::{EngineConfig, PoolEngine};
