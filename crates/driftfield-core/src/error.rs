//! Configuration errors — the only fatal failures in the engine.
//!
//! Everything past construction degrades gracefully: a corrupted cursor
//! self-heals, and an entity without kinetic components simply skips the
//! momentum stamp.

use thiserror::Error;

/// Rejected at engine construction; the engine does not start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("pool size must be greater than zero")]
    EmptyPool,

    #[error("inner radius must be greater than zero, got {inner}")]
    NonPositiveInnerRadius { inner: f64 },

    #[error("outer radius ({outer}) must be greater than inner radius ({inner})")]
    RadiusOrder { inner: f64, outer: f64 },

    #[error("respawn interval must be greater than zero, got {secs}")]
    NonPositiveInterval { secs: f64 },

    #[error("spawn delay must not be negative, got {secs}")]
    NegativeDelay { secs: f64 },

    #[error("spawn duration must not be negative, got {secs}")]
    NegativeDuration { secs: f64 },

    #[error("size range [{min}, {max}] is not a positive, ordered interval")]
    SizeRange { min: f64, max: f64 },

    #[error("prototype factory produced an entity without a position")]
    IncompletePrototype,
}
