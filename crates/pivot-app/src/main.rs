//! Headless pivot simulator.
//!
//! Reads JSON requests from stdin (one per line) and answers each with a
//! JSON status line. `{"type":"Status"}` polls; any other line is a
//! command. An optional first argument names a JSON config file.
//!
//! Usage:
//!   pivot-app [config.json]
//!   printf '{"type":"Start"}\n{"type":"Status"}\n' | pivot-app field.json

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

use pivot_app::clock::SystemClock;
use pivot_app::handlers;
use pivot_app::state::AppState;
use pivot_sim::SimConfig;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path)).unwrap_or_else(|e| {
            eprintln!("Failed to load config {path}: {e}");
            process::exit(1);
        }),
        None => SimConfig::default(),
    };

    let state = match AppState::from_config(&config, Arc::new(SystemClock)) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Invalid config: {e}");
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let status = match handlers::handle_line(&line, &state) {
            Ok(status) => status,
            Err(e) => {
                eprintln!("rejected: {e}");
                continue;
            }
        };
        match serde_json::to_string(&status) {
            Ok(json) => {
                let mut out = stdout.lock();
                if writeln!(out, "{json}").and_then(|()| out.flush()).is_err() {
                    break;
                }
            }
            Err(e) => log::error!("failed to encode status: {e}"),
        }
    }
}

fn load_config(path: &Path) -> Result<SimConfig, String> {
    let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}
