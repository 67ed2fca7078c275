//! Snapshot builder: turns engine state into a `PivotStatus`.
//!
//! Read-only. Never ticks or mutates.

use pivot_core::state::PivotStatus;
use pivot_core::types::{format_hhmm, PivotGeometry, PivotParams};

use crate::integrator::SimState;

/// Build a complete status snapshot from the current state.
pub fn build_status(geometry: &PivotGeometry, params: &PivotParams, state: &SimState) -> PivotStatus {
    let circumference_m = geometry.circumference_m();
    let estimated_full_rotation_minutes = params.full_rotation_minutes(circumference_m);
    let zero_point = geometry
        .complete()
        .map(|(center, arm)| pivot_geodesy::forward(center, arm, 0.0));

    PivotStatus {
        center: geometry.center,
        arm_length_m: geometry.arm_length_m,
        current_angle_deg: state.current_angle_deg,
        azimuth_deg: state.current_angle_deg,
        end_point: state.end_point,
        zero_point,
        elapsed_simulated_secs: state.elapsed_simulated_secs,
        running: state.running,
        cycle_phase: state.duty.phase(params.duty_cycle_percent),
        direction: params.direction,
        speed_m_per_min: params.speed_m_per_min,
        duty_cycle_percent: params.duty_cycle_percent,
        time_acceleration: params.time_acceleration,
        circumference_m,
        estimated_full_rotation_minutes,
        full_rotation_hhmm: format_hhmm(estimated_full_rotation_minutes),
    }
}
