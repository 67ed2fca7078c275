//! Fundamental geographic and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::Direction;
use crate::error::{finite, ValidationError};

/// A point on the spherical Earth, in degrees.
///
/// Longitude is kept in `[-180, 180)`. Constructors accept `[-180, 360)`
/// and normalize on write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Validated constructor.
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        let lat = finite("latitude", lat)?;
        let lon = finite("longitude", lon)?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::Latitude(lat));
        }
        if !(-180.0..360.0).contains(&lon) {
            return Err(ValidationError::Longitude(lon));
        }
        Ok(Self {
            lat,
            lon: normalize_lon(lon),
        })
    }

    /// Build a point from already-computed coordinates (e.g. geodesy output),
    /// normalizing longitude but not range-checking latitude.
    pub fn from_degrees(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon: normalize_lon(lon),
        }
    }
}

/// Wrap any longitude into `[-180, 180)`.
pub fn normalize_lon(lon: f64) -> f64 {
    let wrapped = (lon + 180.0).rem_euclid(FULL_TURN_DEG) - 180.0;
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 180.0 {
        wrapped - FULL_TURN_DEG
    } else {
        wrapped
    }
}

/// Wrap any angle into `[0, 360)`.
pub fn normalize_deg(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN_DEG);
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Validate an arm length (meters).
pub fn validate_arm_length(meters: f64) -> Result<f64, ValidationError> {
    let meters = finite("arm length", meters)?;
    if meters > 0.0 {
        Ok(meters)
    } else {
        Err(ValidationError::ArmLength(meters))
    }
}

/// Pivot geometry: center point and arm length.
///
/// Either half may be missing while the operator is still configuring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PivotGeometry {
    pub center: Option<GeoPoint>,
    pub arm_length_m: Option<f64>,
}

impl PivotGeometry {
    /// Center and arm length, if both are set and usable.
    pub fn complete(&self) -> Option<(GeoPoint, f64)> {
        match (self.center, self.arm_length_m) {
            (Some(center), Some(length)) if length > 0.0 => Some((center, length)),
            _ => None,
        }
    }

    /// Circumference of the irrigated circle (meters), zero when no arm length.
    pub fn circumference_m(&self) -> f64 {
        self.arm_length_m
            .map(|r| std::f64::consts::TAU * r)
            .unwrap_or(0.0)
    }
}

/// Operator-tunable motion parameters. Changes apply from the next tick on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PivotParams {
    /// Arm tip travel speed (meters per minute).
    pub speed_m_per_min: f64,
    pub direction: Direction,
    /// Share of each cycle spent moving (percent, 0..=100).
    pub duty_cycle_percent: f64,
    /// Simulated seconds per real second.
    pub time_acceleration: f64,
}

impl Default for PivotParams {
    fn default() -> Self {
        Self {
            speed_m_per_min: DEFAULT_SPEED_M_PER_MIN,
            direction: Direction::default(),
            duty_cycle_percent: DEFAULT_DUTY_CYCLE_PERCENT,
            time_acceleration: DEFAULT_TIME_ACCELERATION,
        }
    }
}

impl PivotParams {
    pub fn validate_speed(speed: f64) -> Result<f64, ValidationError> {
        let speed = finite("speed", speed)?;
        if speed >= 0.0 {
            Ok(speed)
        } else {
            Err(ValidationError::Speed(speed))
        }
    }

    pub fn validate_duty_cycle(percent: f64) -> Result<f64, ValidationError> {
        let percent = finite("duty cycle", percent)?;
        if (0.0..=DUTY_CYCLE_FULL).contains(&percent) {
            Ok(percent)
        } else {
            Err(ValidationError::DutyCycle(percent))
        }
    }

    pub fn validate_time_acceleration(factor: f64) -> Result<f64, ValidationError> {
        let factor = finite("time acceleration", factor)?;
        if factor > 0.0 {
            Ok(factor)
        } else {
            Err(ValidationError::TimeAcceleration(factor))
        }
    }

    /// Estimated minutes for one full rotation, `None` if the arm never moves.
    pub fn full_rotation_minutes(&self, circumference_m: f64) -> Option<f64> {
        let effective = self.speed_m_per_min * self.duty_cycle_percent / DUTY_CYCLE_FULL;
        if circumference_m > 0.0 && effective > 0.0 {
            Some(circumference_m / effective)
        } else {
            None
        }
    }
}

/// Format minutes as `HH:MM`, truncating seconds. `None` renders as `00:00`.
pub fn format_hhmm(minutes: Option<f64>) -> String {
    match minutes {
        Some(mins) if mins.is_finite() && mins > 0.0 => {
            let h = (mins / MINUTES_PER_HOUR).floor() as u64;
            let m = (mins % MINUTES_PER_HOUR).floor() as u64;
            format!("{h:02}:{m:02}")
        }
        _ => "00:00".to_string(),
    }
}
