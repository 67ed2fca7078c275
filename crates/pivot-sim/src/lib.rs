//! Simulation engine for the center-pivot simulator.
//!
//! Combines the duty-cycle scheduler and the tick integrator behind
//! `PivotSimulation`, and builds `PivotStatus` snapshots for callers.

pub mod duty_cycle;
pub mod engine;
pub mod integrator;
pub mod snapshot;

pub use engine::{PivotSimulation, SimConfig};
pub use pivot_core as core;
