//! Orb Arena headless driver
//!
//! Runs the simulation on a simulated 60 Hz clock and prints the final
//! snapshot as JSON.
//!
//! Usage: `orb-arena [settings.json] [ticks]`

use std::process::ExitCode;

use orb_arena::consts::ARENA_PADDING;
use orb_arena::sim::{Arena, Simulation, TickInput, TickOutcome, tick};
use orb_arena::{ConfigError, Settings};

const VIEWPORT_WIDTH: f64 = 800.0;
const VIEWPORT_HEIGHT: f64 = 600.0;
const FRAME_MS: f64 = 1000.0 / 60.0;
const DEFAULT_TICKS: u64 = 600;

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ConfigError> {
    let mut args = std::env::args().skip(1);

    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("No settings file given, using defaults");
            Settings::default()
        }
    };
    let ticks = match args.next() {
        Some(arg) => arg.parse::<u64>().unwrap_or_else(|err| {
            log::warn!("Ignoring tick count {arg:?} ({err}), running {DEFAULT_TICKS}");
            DEFAULT_TICKS
        }),
        None => DEFAULT_TICKS,
    };

    let arena = Arena::from_viewport(VIEWPORT_WIDTH, VIEWPORT_HEIGHT, ARENA_PADDING);
    let mut sim = Simulation::new(settings, arena, 0.0)?;

    let mut now = 0.0;
    let mut events = 0usize;
    let mut regenerations = 0u64;
    for _ in 0..ticks {
        now += FRAME_MS;
        if tick(&mut sim, &TickInput { now_ms: now, arena })? == TickOutcome::Regenerated {
            regenerations += 1;
        }
        events += sim.events().len();
    }

    log::info!(
        "Ran {} ticks over {:.1} s: {} regenerations, {} collision events, kinetic energy {:.3}",
        ticks,
        now / 1000.0,
        regenerations,
        events,
        sim.total_kinetic_energy()
    );

    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}
