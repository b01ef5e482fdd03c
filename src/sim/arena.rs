//! Rectangular containment region
//!
//! Axis-aligned, screen-style coordinates: `top < bottom`, `left < right`.
//! Derived from the host viewport minus a fixed padding.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use crate::error::ConfigError;

/// The padded arena `[left, right] x [top, bottom]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Arena {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Arena inset by `padding` on every side of a `width x height` viewport
    pub fn from_viewport(width: f64, height: f64, padding: f64) -> Self {
        Self::new(padding, padding, width - padding, height - padding)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// A disc of this radius fits inside on both axes
    pub fn fits_radius(&self, radius: f64) -> bool {
        self.width() >= 2.0 * radius && self.height() >= 2.0 * radius
    }

    pub(crate) fn check_fits(&self, radius: f64) -> Result<(), ConfigError> {
        if self.fits_radius(radius) {
            Ok(())
        } else {
            Err(ConfigError::ArenaTooSmall {
                width: self.width(),
                height: self.height(),
                radius,
            })
        }
    }

    /// Body's whole circle lies inside (with a little slack for rounding)
    pub fn contains(&self, body: &Body) -> bool {
        const SLACK: f64 = 1e-9;
        let r = body.radius;
        body.pos.x >= self.left + r - SLACK
            && body.pos.x <= self.right - r + SLACK
            && body.pos.y >= self.top + r - SLACK
            && body.pos.y <= self.bottom - r + SLACK
    }

    /// Nearest centre position that keeps the body's circle inside
    pub fn clamp_center(&self, pos: DVec2, radius: f64) -> DVec2 {
        DVec2::new(
            clamp_axis(pos.x, self.left + radius, self.right - radius),
            clamp_axis(pos.y, self.top + radius, self.bottom - radius),
        )
    }
}

/// Like `f64::clamp` but tolerates `lo > hi` (arena narrower than the body)
#[inline]
fn clamp_axis(v: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi { (lo + hi) * 0.5 } else { v.clamp(lo, hi) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_viewport() {
        let arena = Arena::from_viewport(800.0, 600.0, 20.0);
        assert_eq!(arena, Arena::new(20.0, 20.0, 780.0, 580.0));
        assert_eq!(arena.width(), 760.0);
        assert_eq!(arena.height(), 560.0);
        assert_eq!(arena.center(), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn test_fits_radius() {
        let arena = Arena::new(0.0, 0.0, 100.0, 60.0);
        assert!(arena.fits_radius(30.0));
        assert!(!arena.fits_radius(30.5));
        assert!(arena.check_fits(31.0).is_err());
    }

    #[test]
    fn test_contains_and_clamp() {
        let arena = Arena::new(0.0, 0.0, 100.0, 100.0);
        let mut body = Body::new(1, DVec2::new(5.0, 50.0), DVec2::ZERO, 10.0);
        assert!(!arena.contains(&body));

        body.pos = arena.clamp_center(body.pos, body.radius);
        assert_eq!(body.pos, DVec2::new(10.0, 50.0));
        assert!(arena.contains(&body));
    }

    #[test]
    fn test_clamp_degenerate_axis() {
        let arena = Arena::new(0.0, 0.0, 10.0, 100.0);
        let pos = arena.clamp_center(DVec2::new(-40.0, 50.0), 20.0);
        assert_eq!(pos.x, 5.0);
    }
}
