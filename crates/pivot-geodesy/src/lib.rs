//! Spherical-Earth geodesy for the pivot simulator.
//!
//! Forward (destination point) and inverse (initial bearing) solutions on a
//! sphere of radius [`EARTH_RADIUS_M`](pivot_core::constants::EARTH_RADIUS_M),
//! plus haversine distance. All functions are pure.

pub mod geodesic;

pub use geodesic::{distance, forward, inverse};
