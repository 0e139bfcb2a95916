//! Pool configuration surface.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EndBehavior;
use crate::error::ConfigError;

/// Tuning for one pool engine.
///
/// All values are plain data. Constraints are checked once by `validate`
/// at engine construction and never re-checked per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Number of recyclable slots. Fixed for the pool's lifetime.
    pub pool_size: usize,
    /// Inner placement radius around the reference point.
    pub inner_radius: f64,
    /// Outer placement radius, doubling as the tracking radius for the
    /// reuse guard and the reclamation sweep.
    pub outer_radius: f64,
    /// Seconds between spawn ticks (and between sweep evaluations).
    pub respawn_secs: f64,
    /// Seconds before the first spawn.
    pub delay_secs: f64,
    /// Total spawn window in seconds. Zero means unbounded.
    pub spawn_duration_secs: f64,
    /// What happens when the spawn window closes.
    pub end_behavior: EndBehavior,
    /// Keep the stamped random velocities instead of zeroing them.
    pub keep_momentum: bool,
    /// Stamp each entity with a random scale at initialization.
    pub random_size: bool,
    /// Scale range used when `random_size` is set.
    pub size_range: (f64, f64),
    /// Stamp each entity with a random orientation at initialization.
    pub random_rotation: bool,
    /// Upper bound on reclamation passes. Zero means unbounded, which
    /// lets an entity that never leaves the tracking radius keep the
    /// sweep restarting forever.
    pub max_sweep_passes: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            inner_radius: DEFAULT_INNER_RADIUS,
            outer_radius: DEFAULT_OUTER_RADIUS,
            respawn_secs: DEFAULT_RESPAWN_SECS,
            delay_secs: DEFAULT_DELAY_SECS,
            spawn_duration_secs: DEFAULT_SPAWN_DURATION_SECS,
            end_behavior: EndBehavior::Halt,
            keep_momentum: false,
            random_size: false,
            size_range: DEFAULT_SIZE_RANGE,
            random_rotation: false,
            max_sweep_passes: 0,
        }
    }
}

impl PoolConfig {
    /// Check every construction-time constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.inner_radius <= 0.0 {
            return Err(ConfigError::NonPositiveInnerRadius {
                inner: self.inner_radius,
            });
        }
        if self.outer_radius <= self.inner_radius {
            return Err(ConfigError::RadiusOrder {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }
        if self.respawn_secs <= 0.0 {
            return Err(ConfigError::NonPositiveInterval {
                secs: self.respawn_secs,
            });
        }
        if self.delay_secs < 0.0 {
            return Err(ConfigError::NegativeDelay {
                secs: self.delay_secs,
            });
        }
        if self.spawn_duration_secs < 0.0 {
            return Err(ConfigError::NegativeDuration {
                secs: self.spawn_duration_secs,
            });
        }
        if self.random_size {
            let (min, max) = self.size_range;
            if min <= 0.0 || max < min {
                return Err(ConfigError::SizeRange { min, max });
            }
        }
        Ok(())
    }
}
