//! Wall collision handling
//!
//! Each edge is tested independently, so a body clipping a corner gets both
//! axis corrections in the same pass. No combined diagonal reflection is
//! computed; the two axes are reflected separately.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::body::Body;
use super::state::{CollisionEvent, CollisionSource};

/// Arena edge hit by a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Push a body back inside the arena and bounce it off every edge it crossed
///
/// The offending coordinate is clamped so the circle is tangent to the edge,
/// the velocity component along that axis is reflected inward and scaled by
/// `restitution`, and one event is emitted at the wall contact point.
///
/// Returns the number of edges hit.
pub fn resolve_walls(
    body: &mut Body,
    arena: &Arena,
    restitution: f64,
    events: &mut Vec<CollisionEvent>,
) -> usize {
    let r = body.radius;
    let mut hits = 0;

    if body.pos.x - r < arena.left {
        body.pos.x = arena.left + r;
        body.vel.x = body.vel.x.abs() * restitution;
        hit(body, Edge::Left, DVec2::new(arena.left, body.pos.y), events);
        hits += 1;
    }
    if body.pos.x + r > arena.right {
        body.pos.x = arena.right - r;
        body.vel.x = -body.vel.x.abs() * restitution;
        hit(body, Edge::Right, DVec2::new(arena.right, body.pos.y), events);
        hits += 1;
    }
    if body.pos.y - r < arena.top {
        body.pos.y = arena.top + r;
        body.vel.y = body.vel.y.abs() * restitution;
        hit(body, Edge::Top, DVec2::new(body.pos.x, arena.top), events);
        hits += 1;
    }
    if body.pos.y + r > arena.bottom {
        body.pos.y = arena.bottom - r;
        body.vel.y = -body.vel.y.abs() * restitution;
        hit(body, Edge::Bottom, DVec2::new(body.pos.x, arena.bottom), events);
        hits += 1;
    }

    hits
}

fn hit(body: &mut Body, edge: Edge, point: DVec2, events: &mut Vec<CollisionEvent>) {
    body.trigger_flash();
    events.push(CollisionEvent {
        point,
        source: CollisionSource::Wall(edge),
    });
}
