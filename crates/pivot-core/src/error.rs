//! Validation errors raised by setters and commands.
//!
//! Every setter validates before it mutates, so an `Err` always means the
//! previous state is untouched.

/// Rejected input value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("arm length must be positive, got {0} m")]
    ArmLength(f64),

    #[error("duty cycle must be within 0..=100 %, got {0}")]
    DutyCycle(f64),

    #[error("speed must not be negative, got {0} m/min")]
    Speed(f64),

    #[error("time acceleration must be positive, got {0}")]
    TimeAcceleration(f64),

    #[error("latitude must be within -90..=90 degrees, got {0}")]
    Latitude(f64),

    #[error("longitude must be within -180..360 degrees, got {0}")]
    Longitude(f64),

    #[error("direction must be 1 or -1, got {0}")]
    Direction(i8),

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Reject NaN and infinities before any range check.
pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NonFinite(name))
    }
}
