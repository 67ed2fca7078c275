//! Tick integrator: turns elapsed wall time into arm rotation.
//!
//! Ticking is poll-driven. Whatever wall time has passed since the previous
//! tick is scaled by the time acceleration, filtered through the duty cycle
//! and applied in one step.

use serde::{Deserialize, Serialize};

use pivot_core::constants::SECS_PER_MINUTE;
use pivot_core::types::{normalize_deg, GeoPoint, PivotGeometry, PivotParams};

use crate::duty_cycle::{self, DutyCycleState};

/// Mutable simulation record. Owned by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Arm bearing from center, always in `[0, 360)`.
    pub current_angle_deg: f64,
    pub duty: DutyCycleState,
    /// Simulated seconds spent moving.
    pub elapsed_simulated_secs: f64,
    pub running: bool,
    /// Wall-clock time of the previous tick (seconds). `None` before the first.
    pub last_tick_wall_secs: Option<f64>,
    /// Arm tip, refreshed whenever angle or geometry changes.
    pub end_point: Option<GeoPoint>,
}

impl SimState {
    /// Zero angle and timers and start a fresh cycle. Keeps the wall reference.
    pub fn rewind(&mut self) {
        self.current_angle_deg = 0.0;
        self.duty = DutyCycleState::fresh();
        self.elapsed_simulated_secs = 0.0;
    }

    /// Recompute derived values from the current angle.
    pub fn refresh_end_point(&mut self, geometry: &PivotGeometry) {
        self.end_point = geometry
            .complete()
            .map(|(center, arm)| pivot_geodesy::forward(center, arm, self.current_angle_deg));
    }
}

/// What a single tick did. Mostly useful for tests and logging.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickOutcome {
    /// Real seconds since the previous tick (clamped to >= 0).
    pub real_delta_secs: f64,
    /// Real seconds scaled by time acceleration.
    pub effective_delta_secs: f64,
    /// Share of the effective interval the arm was moving.
    pub movable_secs: f64,
    /// Signed rotation applied this tick.
    pub angle_delta_deg: f64,
}

/// Angular speed of the arm (radians per simulated second).
pub fn angular_speed_rad_per_sec(speed_m_per_min: f64, arm_length_m: f64) -> f64 {
    if arm_length_m > 0.0 {
        speed_m_per_min / SECS_PER_MINUTE / arm_length_m
    } else {
        0.0
    }
}

/// Advance `state` to `now_wall_secs`.
///
/// When stopped or unconfigured the wall reference still moves forward, so
/// idle time is never applied retroactively.
pub fn tick(
    state: &mut SimState,
    params: &PivotParams,
    geometry: &PivotGeometry,
    now_wall_secs: f64,
) -> TickOutcome {
    let raw_delta = state
        .last_tick_wall_secs
        .map(|last| now_wall_secs - last)
        .unwrap_or(0.0);
    if raw_delta < 0.0 {
        log::warn!("wall clock went backwards by {:.3} s, ignoring", -raw_delta);
    }
    let real_delta_secs = raw_delta.max(0.0);
    let effective_delta_secs = real_delta_secs * params.time_acceleration;
    state.last_tick_wall_secs = Some(now_wall_secs);

    let mut outcome = TickOutcome {
        real_delta_secs,
        effective_delta_secs,
        ..Default::default()
    };

    let Some((_, arm_length_m)) = geometry.complete() else {
        return outcome;
    };
    if !state.running {
        return outcome;
    }

    let (movable_secs, duty) =
        duty_cycle::advance(state.duty, params.duty_cycle_percent, effective_delta_secs);
    state.duty = duty;

    let omega = angular_speed_rad_per_sec(params.speed_m_per_min, arm_length_m);
    let angle_delta_deg = (omega * movable_secs).to_degrees() * params.direction.sign();

    state.current_angle_deg = normalize_deg(state.current_angle_deg + angle_delta_deg);
    state.elapsed_simulated_secs += movable_secs;
    state.refresh_end_point(geometry);

    outcome.movable_secs = movable_secs;
    outcome.angle_delta_deg = angle_delta_deg;
    outcome
}
