//! Center-pivot application layer.
//!
//! Wires the simulation engine to a transport: one shared, locked
//! `PivotSimulation`, handler functions for each operator action, and a
//! line-oriented request handler. Time only advances when a caller asks.

pub mod clock;
pub mod handlers;
pub mod state;

pub use pivot_core as core;
