//! Simulated disc state
//!
//! A `Body` is plain data. Motion, wall handling and pair resolution are free
//! functions in the sibling modules that mutate it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// One simulated disc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Unique within a simulation, never reused across epochs
    pub id: u64,
    pub pos: DVec2,
    /// Units per sub-step
    pub vel: DVec2,
    /// Fixed for the body's lifetime, always > 0
    pub radius: f64,
    /// Collision feedback intensity in [0, 1] (decays each tick)
    pub flash: f64,
}

impl Body {
    pub fn new(id: u64, pos: DVec2, vel: DVec2, radius: f64) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            flash: 0.0,
        }
    }

    /// Mass equals radius: bigger bodies are heavier
    #[inline]
    pub fn mass(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.vel.length_squared()
    }

    #[inline]
    pub fn momentum(&self) -> DVec2 {
        self.vel * self.mass()
    }

    /// Mark a collision for the renderer
    #[inline]
    pub fn trigger_flash(&mut self) {
        self.flash = 1.0;
    }

    pub fn decay_flash(&mut self, rate: f64) {
        if self.flash > 0.0 {
            self.flash = (self.flash - rate).max(0.0);
        }
    }
}
