//! Population generation
//!
//! Radius, speed and heading are drawn uniformly from the configured ranges.
//! Positions keep every circle fully inside the arena and, where the space
//! allows, clear of bodies already placed.

use glam::DVec2;
use rand::Rng;

use super::arena::Arena;
use super::body::Body;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Spawn `settings.body_count` bodies with ids starting at `first_id`
pub fn spawn_population<R: Rng>(
    settings: &Settings,
    arena: &Arena,
    rng: &mut R,
    first_id: u64,
) -> Result<Vec<Body>, ConfigError> {
    settings.validate_for(arena)?;

    let mut bodies: Vec<Body> = Vec::with_capacity(settings.body_count);
    let mut crowded = 0;

    for i in 0..settings.body_count {
        let radius = rng.random_range(settings.radius_range.min..=settings.radius_range.max);
        let speed = rng.random_range(settings.speed_range.min..=settings.speed_range.max);
        let heading = rng.random_range(0.0..std::f64::consts::TAU);

        let mut pos = random_position(arena, radius, rng);
        let mut attempts = 1;
        while attempts < settings.spawn_attempts && overlaps_any(pos, radius, &bodies) {
            pos = random_position(arena, radius, rng);
            attempts += 1;
        }
        if overlaps_any(pos, radius, &bodies) {
            crowded += 1;
        }

        let id = first_id
            .checked_add(i as u64)
            .ok_or(ConfigError::IdsExhausted)?;
        bodies.push(Body::new(
            id,
            pos,
            DVec2::from_angle(heading) * speed,
            radius,
        ));
    }

    if crowded > 0 {
        log::warn!("{crowded} bodies spawned overlapping; the first tick will separate them");
    }

    Ok(bodies)
}

/// Centre drawn so the whole circle lies inside the arena
fn random_position<R: Rng>(arena: &Arena, radius: f64, rng: &mut R) -> DVec2 {
    DVec2::new(
        rng.random_range((arena.left + radius)..=(arena.right - radius)),
        rng.random_range((arena.top + radius)..=(arena.bottom - radius)),
    )
}

fn overlaps_any(pos: DVec2, radius: f64, placed: &[Body]) -> bool {
    placed.iter().any(|b| {
        let min_dist = b.radius + radius;
        b.pos.distance_squared(pos) < min_dist * min_dist
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ValueRange;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn arena() -> Arena {
        Arena::from_viewport(800.0, 600.0, 20.0)
    }

    #[test]
    fn test_population_within_ranges() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let bodies = spawn_population(&settings, &arena(), &mut rng, 100).unwrap();

        assert_eq!(bodies.len(), settings.body_count);
        for (i, body) in bodies.iter().enumerate() {
            assert_eq!(body.id, 100 + i as u64);
            assert!(body.radius >= settings.radius_range.min);
            assert!(body.radius <= settings.radius_range.max);
            let speed = body.vel.length();
            assert!(speed >= settings.speed_range.min - 1e-12);
            assert!(speed <= settings.speed_range.max + 1e-12);
            assert!(arena().contains(body));
            assert_eq!(body.flash, 0.0);
        }
    }

    #[test]
    fn test_spawn_avoids_overlap_when_roomy() {
        let settings = Settings {
            body_count: 6,
            radius_range: ValueRange::new(10.0, 10.0),
            spawn_attempts: 200,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let bodies = spawn_population(&settings, &arena(), &mut rng, 1).unwrap();
        assert_eq!(crate::sim::collision::max_overlap(&bodies), 0.0);
    }

    #[test]
    fn test_fixed_ranges_are_deterministic() {
        let settings = Settings {
            body_count: 3,
            radius_range: ValueRange::new(12.0, 12.0),
            speed_range: ValueRange::new(2.0, 2.0),
            ..Default::default()
        };
        let a = spawn_population(&settings, &arena(), &mut Pcg32::seed_from_u64(1), 1).unwrap();
        let b = spawn_population(&settings, &arena(), &mut Pcg32::seed_from_u64(1), 1).unwrap();

        assert_eq!(a, b);
        for body in &a {
            assert_eq!(body.radius, 12.0);
            assert!((body.vel.length() - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_arena_exactly_body_sized() {
        let settings = Settings {
            body_count: 2,
            radius_range: ValueRange::new(25.0, 25.0),
            ..Default::default()
        };
        let arena = Arena::new(0.0, 0.0, 50.0, 50.0);
        let bodies = spawn_population(&settings, &arena, &mut Pcg32::seed_from_u64(5), 1).unwrap();
        for body in &bodies {
            assert_eq!(body.pos, DVec2::new(25.0, 25.0));
        }
    }

    #[test]
    fn test_invalid_settings_fail_fast() {
        let settings = Settings {
            body_count: 0,
            ..Default::default()
        };
        let err = spawn_population(&settings, &arena(), &mut Pcg32::seed_from_u64(1), 1).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPopulation));
    }

    #[test]
    fn test_id_overflow_is_an_error() {
        let settings = Settings {
            body_count: 3,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);

        let last = spawn_population(&settings, &arena(), &mut rng, u64::MAX - 2).unwrap();
        assert_eq!(last[2].id, u64::MAX);

        let err = spawn_population(&settings, &arena(), &mut rng, u64::MAX - 1).unwrap_err();
        assert!(matches!(err, ConfigError::IdsExhausted));
    }
}
