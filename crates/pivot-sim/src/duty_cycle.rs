//! Duty-cycle scheduler.
//!
//! Each cycle lasts [`CYCLE_PERIOD_SECS`] of simulated time: the arm runs for
//! `duty%` of it and pauses for the rest. `advance` answers how much of an
//! interval counts as moving time. Intervals of any length are resolved in
//! closed form, so one long step gives the same answer as many short ones.
//!
//! Only the offset into the cycle is stored. Phase and time-in-phase are
//! derived from it for whatever duty cycle is current, so changing the duty
//! mid-cycle never moves the arm to a different point of the cycle.

use serde::{Deserialize, Serialize};

use pivot_core::constants::{CYCLE_PERIOD_SECS, DUTY_CYCLE_FULL};
use pivot_core::enums::CyclePhase;

/// Position of the arm within its current duty cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DutyCycleState {
    /// Seconds since the cycle began, in `[0, CYCLE_PERIOD_SECS)`.
    pub cycle_offset_secs: f64,
}

impl DutyCycleState {
    /// Fresh cycle, at the start of the run phase.
    pub fn fresh() -> Self {
        Self::default()
    }

    /// Phase at this offset under `duty_cycle_percent`.
    pub fn phase(&self, duty_cycle_percent: f64) -> CyclePhase {
        if duty_cycle_percent >= DUTY_CYCLE_FULL {
            CyclePhase::Run
        } else if duty_cycle_percent <= 0.0 {
            CyclePhase::Pause
        } else if self.offset() < run_duration_secs(duty_cycle_percent) {
            CyclePhase::Run
        } else {
            CyclePhase::Pause
        }
    }

    /// Seconds spent in the current phase: `[0, run)` while running,
    /// `[0, pause)` while paused.
    pub fn phase_elapsed_secs(&self, duty_cycle_percent: f64) -> f64 {
        let offset = self.offset();
        if duty_cycle_percent >= DUTY_CYCLE_FULL || duty_cycle_percent <= 0.0 {
            return offset;
        }
        let run = run_duration_secs(duty_cycle_percent);
        if offset < run {
            offset
        } else {
            offset - run
        }
    }

    fn offset(&self) -> f64 {
        self.cycle_offset_secs.rem_euclid(CYCLE_PERIOD_SECS)
    }
}

/// Run portion of one cycle (seconds).
pub fn run_duration_secs(duty_cycle_percent: f64) -> f64 {
    CYCLE_PERIOD_SECS * duty_cycle_percent.clamp(0.0, DUTY_CYCLE_FULL) / DUTY_CYCLE_FULL
}

/// Pause portion of one cycle (seconds).
pub fn pause_duration_secs(duty_cycle_percent: f64) -> f64 {
    CYCLE_PERIOD_SECS - run_duration_secs(duty_cycle_percent)
}

/// Advance the cycle by `effective_delta_secs` of simulated time.
///
/// Returns the movable seconds within the interval and the new cycle state.
/// `movable` is always within `[0, effective_delta_secs]`. The cycle offset
/// keeps advancing at 0 % and 100 % too.
pub fn advance(
    state: DutyCycleState,
    duty_cycle_percent: f64,
    effective_delta_secs: f64,
) -> (f64, DutyCycleState) {
    let delta = effective_delta_secs.max(0.0);
    let period = CYCLE_PERIOD_SECS;

    let start = state.offset();
    let end = start + delta;

    let mut cycles = (end / period).floor();
    let mut offset = end - cycles * period;
    if offset < 0.0 {
        offset += period;
        cycles -= 1.0;
    } else if offset >= period {
        offset -= period;
        cycles += 1.0;
    }
    let next = DutyCycleState {
        cycle_offset_secs: offset,
    };

    if duty_cycle_percent >= DUTY_CYCLE_FULL {
        return (delta, next);
    }
    if duty_cycle_percent <= 0.0 {
        return (0.0, next);
    }

    let run = run_duration_secs(duty_cycle_percent);
    let movable = cycles * run + offset.min(run) - start.min(run);

    (movable.clamp(0.0, delta), next)
}
