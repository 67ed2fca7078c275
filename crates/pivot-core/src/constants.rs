//! Simulation constants and defaults.

/// Mean Earth radius used by the spherical model (meters).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// --- Duty cycle ---

/// Length of one run/pause cycle in simulated seconds.
pub const CYCLE_PERIOD_SECS: f64 = 60.0;

/// Duty cycle at which the arm never pauses.
pub const DUTY_CYCLE_FULL: f64 = 100.0;

// --- Parameter defaults ---

/// Default travel speed of the arm tip (meters per minute).
pub const DEFAULT_SPEED_M_PER_MIN: f64 = 4.886;

/// Default duty cycle (percent).
pub const DEFAULT_DUTY_CYCLE_PERCENT: f64 = 100.0;

/// Default time acceleration (1.0 = real time).
pub const DEFAULT_TIME_ACCELERATION: f64 = 1.0;

// --- Angles ---

/// Full turn in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Seconds per minute, for speed conversions.
pub const SECS_PER_MINUTE: f64 = 60.0;

pub const MINUTES_PER_HOUR: f64 = 60.0;
