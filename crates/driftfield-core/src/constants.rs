//! Tuning constants and stamp ranges.

// --- Default pool tuning ---

/// Default number of recyclable slots.
pub const DEFAULT_POOL_SIZE: usize = 10;

/// Default seconds between spawn ticks (and between sweep evaluations).
pub const DEFAULT_RESPAWN_SECS: f64 = 0.2;

/// Default delay before the first spawn (seconds).
pub const DEFAULT_DELAY_SECS: f64 = 5.0;

/// Default inner placement radius.
pub const DEFAULT_INNER_RADIUS: f64 = 12.0;

/// Default outer placement radius, doubling as the tracking radius.
pub const DEFAULT_OUTER_RADIUS: f64 = 20.0;

/// Default spawn window (seconds). Zero would mean unbounded.
pub const DEFAULT_SPAWN_DURATION_SECS: f64 = 10.0;

/// Default one-shot scale range.
pub const DEFAULT_SIZE_RANGE: (f64, f64) = (1.0, 4.0);

// --- Momentum stamp ---

/// Per-axis bound for the stamped linear velocity: uniform in [-3, 3].
pub const LINEAR_STAMP_RANGE: f64 = 3.0;

/// Bound for the stamped angular velocity: uniform in [-10, 10].
pub const ANGULAR_STAMP_RANGE: f64 = 10.0;
