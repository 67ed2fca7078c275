//! Application state shared by the handlers and the poll thread.

use std::sync::{Arc, Mutex};

use pivot_core::error::ValidationError;
use pivot_sim::{PivotSimulation, SimConfig};

use crate::clock::{Clock, SystemClock};

/// Shared application state.
///
/// All access to the simulation serializes on one `Mutex`; every handler
/// reads the clock while holding the lock so ticks are strictly ordered.
pub struct AppState {
    pub simulation: Mutex<PivotSimulation>,
    pub clock: Arc<dyn Clock>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            simulation: Mutex::new(PivotSimulation::new()),
            clock,
        }
    }

    /// State pre-loaded from a config, validated at the current clock time.
    pub fn from_config(config: &SimConfig, clock: Arc<dyn Clock>) -> Result<Self, ValidationError> {
        let simulation = PivotSimulation::from_config(config, clock.now_secs())?;
        Ok(Self {
            simulation: Mutex::new(simulation),
            clock,
        })
    }
}
