//! Operator commands sent from the transport layer to the simulation.
//!
//! Commands are validated when applied; a rejected command changes nothing.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PivotCommand {
    // --- Geometry (each resets angle and timers) ---
    /// Place the pivot center.
    SetCenter { lat: f64, lon: f64 },
    /// Set the arm length in meters.
    SetArmLength { meters: f64 },

    // --- Motion parameters ---
    SetDirection { direction: Direction },
    SetSpeed { meters_per_minute: f64 },
    SetDutyCycle { percent: f64 },
    SetTimeAcceleration { factor: f64 },
    /// Several parameter changes applied atomically.
    Control(ControlUpdate),

    // --- Run control ---
    /// Begin moving, starting a fresh duty cycle.
    Start,
    /// Settle to the current time, then stop moving.
    Stop,
    /// Zero angle and timers, stop, keep geometry and parameters.
    Reset,
    /// Forget geometry and restore default parameters.
    Clear,
}

/// Batch of optional parameter changes (the `/control` form).
///
/// All present fields are validated before any is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlUpdate {
    pub direction: Option<Direction>,
    pub speed: Option<f64>,
    pub duty_cycle: Option<f64>,
    pub time_acceleration: Option<f64>,
    pub running: Option<bool>,
    pub reset: bool,
}
