//! Simulation state and emitted events
//!
//! `Simulation` owns the body population for the current epoch along with the
//! clock bookkeeping needed to regenerate it. The host only ever reads bodies
//! and events back out.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::Body;
use super::boundary::Edge;
use super::spawn::spawn_population;
use crate::error::ConfigError;
use crate::settings::Settings;

/// What produced a collision event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionSource {
    Wall(Edge),
    /// Body ids of the resolved pair
    Pair { a: u64, b: u64 },
}

/// A collision for the effects layer to react to (not retained between ticks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionEvent {
    pub point: DVec2,
    pub source: CollisionSource,
}

/// Serializable copy of the population
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub epoch: u64,
    pub tick: u64,
    pub arena: Arena,
    pub bodies: Vec<Body>,
}

/// Cycle controller state
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) settings: Settings,
    pub(crate) arena: Arena,
    pub(crate) bodies: Vec<Body>,
    /// Events from the most recent tick
    pub(crate) events: Vec<CollisionEvent>,
    pub(crate) epoch_start_ms: f64,
    /// Number of populations generated so far
    pub(crate) epoch: u64,
    /// Physics steps run
    pub(crate) ticks: u64,
    rng: Pcg32,
    next_id: u64,
}

impl Simulation {
    /// Create a simulation and generate its first population
    pub fn new(settings: Settings, arena: Arena, now_ms: f64) -> Result<Self, ConfigError> {
        settings.validate_for(&arena)?;

        let mut sim = Self::empty(settings, arena, now_ms);
        sim.regenerate(now_ms)?;
        log::info!(
            "Simulation started: {} bodies in {}x{} arena (seed {:#x})",
            sim.bodies.len(),
            arena.width(),
            arena.height(),
            sim.settings.seed
        );
        Ok(sim)
    }

    /// Create a simulation around a caller-supplied population
    ///
    /// The population is replaced as usual when the first epoch elapses.
    pub fn with_bodies(
        settings: Settings,
        arena: Arena,
        bodies: Vec<Body>,
        now_ms: f64,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        for body in &bodies {
            if !body.radius.is_finite() || body.radius <= 0.0 {
                return Err(ConfigError::InvalidBody {
                    id: body.id,
                    radius: body.radius,
                });
            }
            arena.check_fits(body.radius)?;
        }

        let mut sim = Self::empty(settings, arena, now_ms);
        sim.next_id = match bodies.iter().map(|b| b.id).max() {
            Some(id) => id.checked_add(1).ok_or(ConfigError::IdsExhausted)?,
            None => 1,
        };
        sim.bodies = bodies;
        sim.epoch = 1;
        Ok(sim)
    }

    fn empty(settings: Settings, arena: Arena, now_ms: f64) -> Self {
        let rng = Pcg32::seed_from_u64(settings.seed);
        Self {
            settings,
            arena,
            bodies: Vec::new(),
            events: Vec::new(),
            epoch_start_ms: now_ms,
            epoch: 0,
            ticks: 0,
            rng,
            next_id: 1,
        }
    }

    /// Discard the population and spawn a fresh one inside the current arena
    pub(crate) fn regenerate(&mut self, now_ms: f64) -> Result<(), ConfigError> {
        let bodies = spawn_population(&self.settings, &self.arena, &mut self.rng, self.next_id)?;

        if self.epoch > 0 {
            log::debug!(
                "Epoch {} ended after {} ticks: kinetic energy {:.3}",
                self.epoch,
                self.ticks,
                self.total_kinetic_energy()
            );
        }

        self.next_id = self
            .next_id
            .checked_add(bodies.len() as u64)
            .ok_or(ConfigError::IdsExhausted)?;
        self.bodies = bodies;
        self.epoch += 1;
        self.epoch_start_ms = now_ms;
        log::info!("Epoch {} started with {} bodies", self.epoch, self.bodies.len());
        Ok(())
    }

    /// Advance to `now_ms` inside `arena`, returning this tick's events
    pub fn tick(&mut self, now_ms: f64, arena: Arena) -> Result<&[CollisionEvent], ConfigError> {
        super::tick::tick(self, &super::tick::TickInput { now_ms, arena })?;
        Ok(&self.events)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn events(&self) -> &[CollisionEvent] {
        &self.events
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn epoch_start_ms(&self) -> f64 {
        self.epoch_start_ms
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    pub fn total_momentum(&self) -> DVec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            epoch: self.epoch,
            tick: self.ticks,
            arena: self.arena,
            bodies: self.bodies.clone(),
        }
    }
}
