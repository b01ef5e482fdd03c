//! Per-tick simulation step
//!
//! The host calls `tick` at whatever cadence it likes with a monotonic
//! timestamp and the current arena. Each call either regenerates the
//! population (epoch elapsed) or runs one physics step:
//! sub-stepped motion with wall bounces, then iterated pair resolution.

use super::arena::Arena;
use super::collision::resolve_overlaps;
use super::integrator::advance;
use super::state::Simulation;
use crate::error::ConfigError;

/// Host input for a single tick
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    /// Monotonic clock in milliseconds
    pub now_ms: f64,
    /// Arena for this tick (may change when the viewport resizes)
    pub arena: Arena,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Physics advanced one step
    Stepped,
    /// The epoch elapsed and a fresh population replaced the old one
    Regenerated,
}

/// Advance the simulation by one tick
///
/// Fails only when the epoch elapses and the current settings cannot produce
/// a population for the current arena; the old population is then kept and
/// regeneration is retried on the next tick.
pub fn tick(sim: &mut Simulation, input: &TickInput) -> Result<TickOutcome, ConfigError> {
    sim.events.clear();
    sim.arena = input.arena;

    if input.now_ms - sim.epoch_start_ms > sim.settings.epoch_duration_ms {
        sim.regenerate(input.now_ms)?;
        return Ok(TickOutcome::Regenerated);
    }

    step_physics(sim);
    Ok(TickOutcome::Stepped)
}

/// One physics step, independent of the epoch clock
pub fn step_physics(sim: &mut Simulation) {
    sim.ticks += 1;

    let settings = &sim.settings;
    let arena = sim.arena;

    let mut wall_hits = 0;
    for body in &mut sim.bodies {
        body.decay_flash(settings.flash_decay_per_tick);
        wall_hits += advance(
            body,
            &arena,
            settings.sub_steps_per_tick,
            settings.restitution,
            &mut sim.events,
        );
    }

    let pair_resolutions = resolve_overlaps(
        &mut sim.bodies,
        &arena,
        settings.resolution_iterations_per_tick,
        &mut sim.events,
    );

    log::trace!(
        "tick {}: {} wall hits, {} pair resolutions, {} events",
        sim.ticks,
        wall_hits,
        pair_resolutions,
        sim.events.len()
    );
}
