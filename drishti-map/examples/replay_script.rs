//! Replay a recorded frame script through the mapper.
//!
//! This example demonstrates:
//! - Loading configuration (YAML) with `DrishtiConfig`
//! - Loading a frame script with recorded actions, sensor tuples and detections
//! - Printing the per-frame statuses and the final map as text
//!
//! # Usage
//!
//! ```bash
//! cargo run --example replay_script -- scripts/demo.yaml [configs/config.yaml]
//! ```

use std::path::Path;

use drishti_map::io::FrameScript;
use drishti_map::{DrishtiConfig, LiveMap};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse CLI args
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <script.yaml> [config.yaml]", args[0]);
        std::process::exit(1);
    }

    let config = match args.get(2) {
        Some(path) => DrishtiConfig::load(Path::new(path))?,
        None => DrishtiConfig::load_default()?,
    };
    let script = FrameScript::load(Path::new(&args[1]))?;
    log::info!("Replaying '{}' ({} frames)", script.name, script.frames.len());

    let mut map = LiveMap::from_config(&config);
    if let Some(initial) = script.initial_snapshot()? {
        map = map.with_initial_sensor(initial);
    }

    let statuses = script.replay(&mut map)?;
    for (index, status) in statuses.iter().enumerate() {
        println!("frame {:3}: {}", index, status);
    }

    let stats = map.coverage_stats();
    println!();
    println!("{}", map.snapshot().to_ascii());
    println!();
    println!(
        "grid {}x{}, {} objects, {} walls, {:.1}% visited",
        stats.width,
        stats.height,
        stats.objects,
        stats.counts.wall,
        stats.visited_fraction * 100.0
    );

    Ok(())
}
