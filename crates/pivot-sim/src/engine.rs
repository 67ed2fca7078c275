//! Simulation engine: owns geometry, parameters and state.
//!
//! `PivotSimulation` is the only thing that mutates `SimState`. Every
//! operation takes the caller's wall-clock time and first settles the
//! simulation up to that instant, so parameter changes never reach back into
//! time that already elapsed. Completely headless and deterministic.

use serde::{Deserialize, Serialize};

use pivot_core::commands::{ControlUpdate, PivotCommand};
use pivot_core::enums::Direction;
use pivot_core::error::ValidationError;
use pivot_core::state::PivotStatus;
use pivot_core::types::{validate_arm_length, GeoPoint, PivotGeometry, PivotParams};

use crate::duty_cycle::DutyCycleState;
use crate::integrator::{self, SimState, TickOutcome};
use crate::snapshot;

/// Initial setup for a simulation, typically loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub center: Option<GeoPoint>,
    pub arm_length_m: Option<f64>,
    #[serde(flatten)]
    pub params: PivotParams,
    /// Start running immediately.
    pub autostart: bool,
}

/// The pivot simulation.
#[derive(Debug, Clone, Default)]
pub struct PivotSimulation {
    geometry: PivotGeometry,
    params: PivotParams,
    state: SimState,
}

impl PivotSimulation {
    /// Unconfigured simulation with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a simulation from a config, validating every field.
    pub fn from_config(config: &SimConfig, now: f64) -> Result<Self, ValidationError> {
        let mut sim = Self::new();
        if let Some(center) = config.center {
            sim.set_center(center.lat, center.lon, now)?;
        }
        if let Some(length) = config.arm_length_m {
            sim.set_arm_length(length, now)?;
        }
        sim.control(
            ControlUpdate {
                direction: Some(config.params.direction),
                speed: Some(config.params.speed_m_per_min),
                duty_cycle: Some(config.params.duty_cycle_percent),
                time_acceleration: Some(config.params.time_acceleration),
                running: config.autostart.then_some(true),
                reset: false,
            },
            now,
        )?;
        Ok(sim)
    }

    /// Apply one operator command at wall time `now`.
    pub fn apply(&mut self, command: PivotCommand, now: f64) -> Result<(), ValidationError> {
        log::debug!("apply {command:?} at {now:.3}");
        let result = match command {
            PivotCommand::SetCenter { lat, lon } => self.set_center(lat, lon, now),
            PivotCommand::SetArmLength { meters } => self.set_arm_length(meters, now),
            PivotCommand::SetDirection { direction } => {
                self.set_direction(direction, now);
                Ok(())
            }
            PivotCommand::SetSpeed { meters_per_minute } => self.set_speed(meters_per_minute, now),
            PivotCommand::SetDutyCycle { percent } => self.set_duty_cycle(percent, now),
            PivotCommand::SetTimeAcceleration { factor } => self.set_time_acceleration(factor, now),
            PivotCommand::Control(update) => self.control(update, now),
            PivotCommand::Start => {
                self.start(now);
                Ok(())
            }
            PivotCommand::Stop => {
                self.stop(now);
                Ok(())
            }
            PivotCommand::Reset => {
                self.reset(now);
                Ok(())
            }
            PivotCommand::Clear => {
                self.clear(now);
                Ok(())
            }
        };
        if let Err(e) = &result {
            log::warn!("rejected command: {e}");
        }
        result
    }

    /// Advance to `now`. Safe to call as often as the caller likes.
    pub fn tick(&mut self, now: f64) -> TickOutcome {
        let outcome = integrator::tick(&mut self.state, &self.params, &self.geometry, now);
        if outcome.angle_delta_deg != 0.0 {
            log::debug!(
                "tick: +{:.3} s effective, {:.3} s moving, angle {:.4} deg",
                outcome.effective_delta_secs,
                outcome.movable_secs,
                self.state.current_angle_deg
            );
        }
        outcome
    }

    /// Tick to `now` and return the resulting snapshot.
    pub fn status(&mut self, now: f64) -> PivotStatus {
        self.tick(now);
        self.snapshot()
    }

    /// Snapshot of the current state without ticking.
    pub fn snapshot(&self) -> PivotStatus {
        snapshot::build_status(&self.geometry, &self.params, &self.state)
    }

    // --- Geometry ---

    pub fn set_center(&mut self, lat: f64, lon: f64, now: f64) -> Result<(), ValidationError> {
        let center = GeoPoint::new(lat, lon)?;
        self.tick(now);
        self.geometry.center = Some(center);
        self.reconfigured();
        log::info!("center set to ({:.6}, {:.6})", center.lat, center.lon);
        Ok(())
    }

    pub fn set_arm_length(&mut self, meters: f64, now: f64) -> Result<(), ValidationError> {
        let meters = validate_arm_length(meters)?;
        self.tick(now);
        self.geometry.arm_length_m = Some(meters);
        self.reconfigured();
        log::info!("arm length set to {meters} m");
        Ok(())
    }

    fn reconfigured(&mut self) {
        self.state.rewind();
        self.state.refresh_end_point(&self.geometry);
    }

    // --- Parameters ---

    pub fn set_direction(&mut self, direction: Direction, now: f64) {
        self.tick(now);
        self.params.direction = direction;
    }

    pub fn set_speed(&mut self, meters_per_minute: f64, now: f64) -> Result<(), ValidationError> {
        let speed = PivotParams::validate_speed(meters_per_minute)?;
        self.tick(now);
        self.params.speed_m_per_min = speed;
        Ok(())
    }

    pub fn set_duty_cycle(&mut self, percent: f64, now: f64) -> Result<(), ValidationError> {
        let percent = PivotParams::validate_duty_cycle(percent)?;
        self.tick(now);
        self.params.duty_cycle_percent = percent;
        Ok(())
    }

    pub fn set_time_acceleration(&mut self, factor: f64, now: f64) -> Result<(), ValidationError> {
        let factor = PivotParams::validate_time_acceleration(factor)?;
        self.tick(now);
        self.params.time_acceleration = factor;
        Ok(())
    }

    /// Apply a batch of changes. Nothing is applied unless every field is valid.
    pub fn control(&mut self, update: ControlUpdate, now: f64) -> Result<(), ValidationError> {
        let speed = update.speed.map(PivotParams::validate_speed).transpose()?;
        let duty = update.duty_cycle.map(PivotParams::validate_duty_cycle).transpose()?;
        let factor = update
            .time_acceleration
            .map(PivotParams::validate_time_acceleration)
            .transpose()?;

        self.tick(now);
        if let Some(direction) = update.direction {
            self.params.direction = direction;
        }
        if let Some(speed) = speed {
            self.params.speed_m_per_min = speed;
        }
        if let Some(duty) = duty {
            self.params.duty_cycle_percent = duty;
        }
        if let Some(factor) = factor {
            self.params.time_acceleration = factor;
        }
        match update.running {
            Some(true) if !self.state.running => self.start(now),
            Some(false) if self.state.running => self.stop(now),
            _ => {}
        }
        if update.reset {
            self.reset(now);
        }
        Ok(())
    }

    // --- Run control ---

    /// Begin moving. A restart always begins a fresh duty cycle.
    pub fn start(&mut self, now: f64) {
        self.tick(now);
        self.state.running = true;
        self.state.duty = DutyCycleState::fresh();
        log::info!("pivot started at angle {:.3}", self.state.current_angle_deg);
    }

    /// Settle to `now`, then stop.
    pub fn stop(&mut self, now: f64) {
        self.tick(now);
        self.state.running = false;
        log::info!("pivot stopped at angle {:.3}", self.state.current_angle_deg);
    }

    /// Zero angle and timers and stop. Geometry and parameters are kept.
    pub fn reset(&mut self, now: f64) {
        self.tick(now);
        self.state.running = false;
        self.state.rewind();
        self.state.refresh_end_point(&self.geometry);
        log::info!("pivot reset");
    }

    /// Forget geometry and restore default parameters.
    pub fn clear(&mut self, now: f64) {
        self.geometry = PivotGeometry::default();
        self.params = PivotParams::default();
        self.state = SimState {
            last_tick_wall_secs: Some(now),
            ..Default::default()
        };
        log::info!("pivot cleared");
    }

    pub fn geometry(&self) -> &PivotGeometry {
        &self.geometry
    }

    pub fn params(&self) -> &PivotParams {
        &self.params
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }
}
