//! Simulation settings
//!
//! Loaded from JSON (any missing field falls back to its default) and
//! validated before a population is generated.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Arena;

/// Inclusive `[min, max]` range a random value is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Both bounds finite and ordered
    fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Bodies per population
    pub body_count: usize,
    /// Radius (and therefore mass) bounds
    pub radius_range: ValueRange,
    /// Initial speed magnitude bounds, in units per sub-step
    pub speed_range: ValueRange,
    /// Wall energy retention (1.0 = perfectly elastic)
    pub restitution: f64,
    /// Integration sub-steps per tick
    pub sub_steps_per_tick: u32,
    /// All-pairs overlap resolution passes per tick
    pub resolution_iterations_per_tick: u32,
    /// Population lifetime in milliseconds
    pub epoch_duration_ms: f64,
    /// Flash intensity lost per tick
    pub flash_decay_per_tick: f64,
    /// Placement retries per body when avoiding spawn overlap
    pub spawn_attempts: u32,
    /// RNG seed for population generation
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            body_count: BODY_COUNT,
            radius_range: ValueRange::new(RADIUS_MIN, RADIUS_MAX),
            speed_range: ValueRange::new(SPEED_MIN, SPEED_MAX),
            restitution: RESTITUTION,
            sub_steps_per_tick: SUB_STEPS,
            resolution_iterations_per_tick: RESOLUTION_ITERATIONS,
            epoch_duration_ms: EPOCH_DURATION_MS,
            flash_decay_per_tick: FLASH_DECAY,
            spawn_attempts: SPAWN_ATTEMPTS,
            seed: DEFAULT_SEED,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check every scalar invariant
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.body_count == 0 {
            return Err(ConfigError::EmptyPopulation);
        }

        let r = self.radius_range;
        if !r.is_ordered() || r.min <= 0.0 {
            return Err(ConfigError::InvalidRadiusRange { min: r.min, max: r.max });
        }

        let s = self.speed_range;
        if !s.is_ordered() || s.min < 0.0 {
            return Err(ConfigError::InvalidSpeedRange { min: s.min, max: s.max });
        }

        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::InvalidRestitution(self.restitution));
        }
        if self.sub_steps_per_tick == 0 {
            return Err(ConfigError::ZeroSubSteps);
        }
        if self.resolution_iterations_per_tick == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !self.epoch_duration_ms.is_finite() || self.epoch_duration_ms <= 0.0 {
            return Err(ConfigError::InvalidEpochDuration(self.epoch_duration_ms));
        }
        if !(0.0..=1.0).contains(&self.flash_decay_per_tick) {
            return Err(ConfigError::InvalidFlashDecay(self.flash_decay_per_tick));
        }

        Ok(())
    }

    /// Validate, then check the arena can hold the largest possible body
    pub fn validate_for(&self, arena: &Arena) -> Result<(), ConfigError> {
        self.validate()?;
        arena.check_fits(self.radius_range.max)
    }
}
