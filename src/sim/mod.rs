//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (population order, pairs by index)
//! - No rendering or platform dependencies

pub mod arena;
pub mod body;
pub mod boundary;
pub mod collision;
pub mod integrator;
pub mod spawn;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use body::Body;
pub use boundary::{Edge, resolve_walls};
pub use collision::{Contact, NUDGE_DISTANCE, max_overlap, resolve_overlaps, resolve_pair};
pub use integrator::{advance, integrate};
pub use spawn::spawn_population;
pub use state::{CollisionEvent, CollisionSource, Simulation, Snapshot};
pub use tick::{TickInput, TickOutcome, step_physics, tick};
