//! Pairwise disc collision resolution
//!
//! Overlapping pairs are solved as a 1-D elastic collision along the contact
//! normal (tangential velocity untouched, no friction) and then pushed apart
//! by the full overlap, split by inverse mass share. A body that its share
//! would push through a wall stops at the wall and its partner takes the rest.
//! Resolving one pair can push it into a third body, so the all-pairs scan is
//! repeated a fixed number of times per tick.

use glam::DVec2;

use super::arena::Arena;
use super::body::Body;
use super::state::{CollisionEvent, CollisionSource};

/// Separation applied along +x when two centres coincide exactly
pub const NUDGE_DISTANCE: f64 = 0.5;

/// Alternating push-outs allowed when a wall blocks the mass-weighted split
const WALL_SLIDE_ROUNDS: usize = 8;

/// Outcome of resolving one overlapping pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Where the two surfaces touch after separation
    pub point: DVec2,
    /// Penetration depth before separation
    pub overlap: f64,
    /// Centres were coincident; only the positional nudge was applied
    pub degenerate: bool,
}

/// Resolve a single pair if the discs overlap
///
/// Velocities are only exchanged while the pair is closing along the normal
/// (`v1n > v2n`); a pair already moving apart is only separated. The contact
/// point is where the two surfaces touch after separation, not the midpoint
/// of the centres (except for coincident centres).
///
/// Both bodies stay inside `arena`. Returns `None` without touching either
/// body when they are apart or exactly tangent.
pub fn resolve_pair(a: &mut Body, b: &mut Body, arena: &Arena) -> Option<Contact> {
    let delta = b.pos - a.pos;
    let min_dist = a.radius + b.radius;
    let dist_sq = delta.length_squared();

    // Fast path, no sqrt
    if dist_sq >= min_dist * min_dist {
        return None;
    }

    let dist = dist_sq.sqrt();

    if dist == 0.0 {
        // No normal to speak of: split along a fixed axis and let the next
        // pass do the physics
        split_apart(a, b, DVec2::X, NUDGE_DISTANCE, arena);
        a.trigger_flash();
        b.trigger_flash();
        return Some(Contact {
            point: (a.pos + b.pos) * 0.5,
            overlap: min_dist,
            degenerate: true,
        });
    }

    let normal = delta / dist;
    let tangent = normal.perp();

    let (m1, m2) = (a.mass(), b.mass());
    let total = m1 + m2;

    let v1n = a.vel.dot(normal);
    let v2n = b.vel.dot(normal);

    // Only exchange momentum while closing; a pair already separating is just
    // pushed apart so leftover rounding overlap can't bounce it back together
    if v1n > v2n {
        let v1t = a.vel.dot(tangent);
        let v2t = b.vel.dot(tangent);

        let v1n_new = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / total;
        let v2n_new = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / total;

        a.vel = normal * v1n_new + tangent * v1t;
        b.vel = normal * v2n_new + tangent * v2t;
    }

    let overlap = min_dist - dist;
    split_apart(a, b, normal, overlap, arena);
    slide_clear(a, b, arena);

    a.trigger_flash();
    b.trigger_flash();

    let facing = (b.pos - a.pos).try_normalize().unwrap_or(normal);
    Some(Contact {
        point: a.pos + facing * a.radius,
        overlap,
        degenerate: false,
    })
}

/// Move the pair `amount` apart along `normal`, lighter body yielding more,
/// then clamp both back inside the arena
fn split_apart(a: &mut Body, b: &mut Body, normal: DVec2, amount: f64, arena: &Arena) {
    let (m1, m2) = (a.mass(), b.mass());
    let total = m1 + m2;
    a.pos = arena.clamp_center(a.pos - normal * (amount * m2 / total), a.radius);
    b.pos = arena.clamp_center(b.pos + normal * (amount * m1 / total), b.radius);
}

/// Hand whatever overlap a wall clamp left over to the body that can still move
fn slide_clear(a: &mut Body, b: &mut Body, arena: &Arena) {
    for _ in 0..WALL_SLIDE_ROUNDS {
        let moved_b = push_clear(b, a, arena);
        let moved_a = push_clear(a, b, arena);
        if !moved_b && !moved_a {
            break;
        }
    }
}

/// Push `mover` directly away from `anchor` until they touch, staying inside
fn push_clear(mover: &mut Body, anchor: &Body, arena: &Arena) -> bool {
    let delta = mover.pos - anchor.pos;
    let min_dist = mover.radius + anchor.radius;
    let dist_sq = delta.length_squared();
    if dist_sq >= min_dist * min_dist || dist_sq == 0.0 {
        return false;
    }

    let dist = dist_sq.sqrt();
    let target = mover.pos + delta / dist * (min_dist - dist);
    let clamped = arena.clamp_center(target, mover.radius);
    let moved = clamped != mover.pos;
    mover.pos = clamped;
    moved
}

/// Run `iterations` all-pairs passes over the population
///
/// Events are only recorded on the first pass; later passes are settling
/// corrections. Returns the total number of pair resolutions across passes.
pub fn resolve_overlaps(
    bodies: &mut [Body],
    arena: &Arena,
    iterations: u32,
    events: &mut Vec<CollisionEvent>,
) -> usize {
    let n = bodies.len();
    let mut resolved = 0;

    for pass in 0..iterations {
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = pair_mut(bodies, i, j);
                if let Some(contact) = resolve_pair(a, b, arena) {
                    resolved += 1;
                    if pass == 0 {
                        events.push(CollisionEvent {
                            point: contact.point,
                            source: CollisionSource::Pair { a: a.id, b: b.id },
                        });
                    }
                }
            }
        }
    }

    resolved
}

/// Deepest penetration among all pairs (0 when nothing overlaps)
pub fn max_overlap(bodies: &[Body]) -> f64 {
    let mut worst = 0.0_f64;
    for (i, a) in bodies.iter().enumerate() {
        for b in &bodies[i + 1..] {
            let overlap = a.radius + b.radius - a.pos.distance(b.pos);
            worst = worst.max(overlap);
        }
    }
    worst
}

/// Two distinct mutable borrows, `i < j`
#[inline]
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert!(i < j);
    let (head, tail) = bodies.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
