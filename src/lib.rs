//! Orb Arena - bouncing disc collision simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, arena, integration, collisions, epochs)
//! - `settings`: Data-driven simulation tuning
//! - `error`: Configuration errors surfaced to the host

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{Settings, ValueRange};
pub use sim::{Arena, Body, CollisionEvent, CollisionSource, Simulation, TickInput, tick};

/// Simulation defaults
pub mod consts {
    /// Number of bodies in each population
    pub const BODY_COUNT: usize = 12;

    /// Body radius bounds
    pub const RADIUS_MIN: f64 = 15.0;
    pub const RADIUS_MAX: f64 = 40.0;

    /// Initial speed bounds (units per sub-step)
    pub const SPEED_MIN: f64 = 0.3;
    pub const SPEED_MAX: f64 = 1.2;

    /// Fraction of the reflected velocity kept after a wall bounce
    pub const RESTITUTION: f64 = 0.98;

    /// Integration sub-steps per tick
    pub const SUB_STEPS: u32 = 10;
    /// All-pairs resolution passes per tick
    pub const RESOLUTION_ITERATIONS: u32 = 3;

    /// Lifetime of one population before it is regenerated
    pub const EPOCH_DURATION_MS: f64 = 350.0;

    /// Collision flash lost per tick
    pub const FLASH_DECAY: f64 = 0.05;

    /// Placement retries per body when avoiding spawn overlap
    pub const SPAWN_ATTEMPTS: u32 = 32;

    /// Default RNG seed
    pub const DEFAULT_SEED: u64 = 0x0B5E_55ED;

    /// Padding between the viewport edge and the arena
    pub const ARENA_PADDING: f64 = 20.0;
}
