//! Operator-facing handlers.
//!
//! One function per operator action of the web form. A transport (HTTP,
//! stdin, IPC) only has to decode the request and call one of these. Errors
//! are flattened to `String` at this boundary.

use pivot_core::commands::{ControlUpdate, PivotCommand};
use pivot_core::state::PivotStatus;
use serde_json::Value;

use crate::state::AppState;

/// Tick to the current time and return the status. This is the only
/// thing that moves the simulation forward.
pub fn status(state: &AppState) -> Result<PivotStatus, String> {
    let mut sim = state.simulation.lock().map_err(|e| e.to_string())?;
    Ok(sim.status(state.clock.now_secs()))
}

/// Apply any command.
pub fn send_command(command: PivotCommand, state: &AppState) -> Result<(), String> {
    let mut sim = state.simulation.lock().map_err(|e| e.to_string())?;
    sim.apply(command, state.clock.now_secs())
        .map_err(|e| e.to_string())
}

pub fn set_center(lat: f64, lon: f64, state: &AppState) -> Result<(), String> {
    send_command(PivotCommand::SetCenter { lat, lon }, state)
}

pub fn set_length(meters: f64, state: &AppState) -> Result<(), String> {
    send_command(PivotCommand::SetArmLength { meters }, state)
}

pub fn control(update: ControlUpdate, state: &AppState) -> Result<(), String> {
    send_command(PivotCommand::Control(update), state)
}

pub fn start(state: &AppState) -> Result<(), String> {
    send_command(PivotCommand::Start, state)
}

pub fn stop(state: &AppState) -> Result<(), String> {
    send_command(PivotCommand::Stop, state)
}

pub fn reset(state: &AppState) -> Result<(), String> {
    send_command(PivotCommand::Reset, state)
}

/// Forget geometry and restore defaults.
pub fn clear(state: &AppState) -> Result<(), String> {
    send_command(PivotCommand::Clear, state)
}

/// Handle one line-delimited JSON request and answer with the status.
///
/// `{"type":"Status"}` only polls. Anything else must decode as a
/// `PivotCommand`, which is applied before the status is read. Runs on the
/// caller's thread; nothing ticks between requests.
pub fn handle_line(line: &str, state: &AppState) -> Result<PivotStatus, String> {
    let request: Value = serde_json::from_str(line).map_err(|e| format!("bad request: {e}"))?;
    if request.get("type").and_then(Value::as_str) != Some("Status") {
        let command: PivotCommand =
            serde_json::from_value(request).map_err(|e| format!("bad command: {e}"))?;
        send_command(command, state)?;
    }
    status(state)
}
