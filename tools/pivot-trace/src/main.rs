//! pivot-trace: offline arm-tip track generator.
//!
//! Runs a pivot against a synthetic clock and prints one CSV row per poll.
//! Handy for checking duty-cycle and catch-up behavior without a UI.
//!
//! Usage:
//!   pivot-trace --center 46.48,30.72 --length 400 --minutes 120
//!   pivot-trace --config field.json --minutes 60 --step 30

use std::path::Path;
use std::process;

use pivot_core::types::GeoPoint;
use pivot_geodesy::{distance, inverse};
use pivot_sim::{PivotSimulation, SimConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            process::exit(1);
        }
    };
    let (minutes, step) = match (parse_f64(&args, "--minutes"), parse_f64(&args, "--step")) {
        (Ok(minutes), Ok(step)) => (minutes.unwrap_or(60.0), step.unwrap_or(60.0)),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    if !(minutes > 0.0 && step > 0.0) {
        eprintln!("--minutes and --step must be positive");
        process::exit(1);
    }

    let mut sim = match PivotSimulation::from_config(&config, 0.0) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };
    if !config.autostart {
        sim.start(0.0);
    }

    println!("wall_secs,angle_deg,phase,lat,lon,bearing_deg,radius_m");
    let total = minutes * 60.0;
    let mut now = 0.0;
    while now <= total {
        let status = sim.status(now);
        if let (Some(center), Some(end)) = (status.center, status.end_point) {
            println!(
                "{:.1},{:.6},{:?},{:.8},{:.8},{:.6},{:.4}",
                now,
                status.current_angle_deg,
                status.cycle_phase,
                end.lat,
                end.lon,
                inverse(center, end),
                distance(center, end),
            );
        }
        now += step;
    }
    log::info!(
        "traced {:.0} min, arm moved for {:.0} simulated s",
        minutes,
        sim.state().elapsed_simulated_secs
    );
}

fn print_usage() {
    eprintln!(
        "pivot-trace: print the arm-tip track of a center pivot as CSV\n\
         \n\
           --config <path>      JSON config (same format as pivot-app)\n\
           --center <lat,lon>   Pivot center (overrides config)\n\
           --length <m>         Arm length in meters (overrides config)\n\
           --speed <m/min>      Tip speed\n\
           --duty <percent>     Duty cycle, 0-100\n\
           --accel <factor>     Time acceleration\n\
           --reverse            Rotate counter-clockwise\n\
           --minutes <N>        Wall minutes to trace (default: 60)\n\
           --step <secs>        Wall seconds between polls (default: 60)\n\
         \n\
         Example:\n\
         \n\
           pivot-trace --center 46.48,30.72 --length 400 --duty 50 --minutes 120\n"
    );
}

fn build_config(args: &[String]) -> Result<SimConfig, String> {
    let mut config = match parse_value(args, "--config")? {
        Some(path) => load_config(Path::new(path))?,
        None => SimConfig::default(),
    };

    if let Some(center) = parse_center(args)? {
        config.center = Some(center);
    }
    if let Some(length) = parse_f64(args, "--length")? {
        config.arm_length_m = Some(length);
    }
    if let Some(speed) = parse_f64(args, "--speed")? {
        config.params.speed_m_per_min = speed;
    }
    if let Some(duty) = parse_f64(args, "--duty")? {
        config.params.duty_cycle_percent = duty;
    }
    if let Some(accel) = parse_f64(args, "--accel")? {
        config.params.time_acceleration = accel;
    }
    if args.iter().any(|a| a == "--reverse") {
        config.params.direction = config.params.direction.reversed();
    }

    if config.center.is_none() || config.arm_length_m.is_none() {
        return Err("A center and an arm length are required".into());
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<SimConfig, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Value following `flag`. `Ok(None)` if the flag is absent, an error if it
/// is the last argument.
fn parse_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>, String> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| format!("missing value for {flag}")),
    }
}

fn parse_f64(args: &[String], flag: &str) -> Result<Option<f64>, String> {
    match parse_value(args, flag)? {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid value for {flag}: {raw}")),
    }
}

fn parse_center(args: &[String]) -> Result<Option<GeoPoint>, String> {
    let Some(raw) = parse_value(args, "--center")? else {
        return Ok(None);
    };
    let invalid = || format!("invalid value for --center: {raw} (expected lat,lon)");
    let (lat, lon) = raw.split_once(',').ok_or_else(invalid)?;
    Ok(Some(GeoPoint {
        lat: lat.trim().parse().map_err(|_| invalid())?,
        lon: lon.trim().parse().map_err(|_| invalid())?,
    }))
}
