//! Status snapshot: the complete visible state returned by each status query.

use serde::{Deserialize, Serialize};

use crate::enums::{CyclePhase, Direction};
use crate::types::GeoPoint;

/// Everything a display needs after one `tick`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PivotStatus {
    pub center: Option<GeoPoint>,
    pub arm_length_m: Option<f64>,
    /// Current arm bearing from the center, `[0, 360)`.
    pub current_angle_deg: f64,
    /// Compass azimuth of the arm; equals `current_angle_deg`.
    pub azimuth_deg: f64,
    /// Arm tip position, `None` until center and arm length are set.
    pub end_point: Option<GeoPoint>,
    /// Arm tip at bearing 0 (reference marker).
    pub zero_point: Option<GeoPoint>,
    /// Simulated seconds the arm has actually been moving.
    pub elapsed_simulated_secs: f64,
    pub running: bool,
    pub cycle_phase: CyclePhase,
    pub direction: Direction,
    pub speed_m_per_min: f64,
    pub duty_cycle_percent: f64,
    pub time_acceleration: f64,
    pub circumference_m: f64,
    /// `None` when speed, duty cycle or arm length is zero.
    pub estimated_full_rotation_minutes: Option<f64>,
    /// Same estimate as `HH:MM`.
    pub full_rotation_hhmm: String,
}
