//! Core types and definitions for the center-pivot simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geographic points, simulation parameters, commands, status snapshots,
//! validation errors, and constants. It has no dependency on any runtime.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
