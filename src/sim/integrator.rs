//! Sub-stepped motion integration
//!
//! Velocity is expressed per sub-step, so a tick moves a body by
//! `sub_steps * vel`. Walls are checked after every sub-step to keep each
//! positional delta small relative to the radius and avoid tunnelling.

use super::arena::Arena;
use super::body::Body;
use super::boundary::resolve_walls;
use super::state::CollisionEvent;

/// Advance one sub-step
#[inline]
pub fn integrate(body: &mut Body) {
    body.pos += body.vel;
}

/// Advance a body through a full tick, bouncing off walls between sub-steps
///
/// Returns the number of wall hits.
pub fn advance(
    body: &mut Body,
    arena: &Arena,
    sub_steps: u32,
    restitution: f64,
    events: &mut Vec<CollisionEvent>,
) -> usize {
    let mut hits = 0;
    for _ in 0..sub_steps {
        integrate(body);
        hits += resolve_walls(body, arena, restitution, events);
    }
    hits
}
