//! Debris fragments thrown off by a shattering shape.

use serde::Serialize;

use crate::vector::Vector;

/// A single-cell fragment with its own ballistic motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub position: Vector,
    pub direction: Vector,
    /// Speed drawn at creation. Motion currently follows `direction` alone.
    pub velocity: f64,
    /// Under gravity or propelled?
    pub gravity: bool,
    pub deleted: bool,
}

impl Particle {
    pub fn new(position: Vector, direction: Vector, velocity: f64) -> Self {
        Self {
            position,
            direction,
            velocity,
            gravity: true,
            deleted: false,
        }
    }

    /// Advance one tick inside a `width` x `height` playfield.
    ///
    /// Side walls reflect the direction (at most one bounce per tick); leaving
    /// through the top or bottom marks the particle deleted for good.
    pub fn step(&mut self, width: i32, height: i32) {
        if self.deleted {
            return;
        }

        let previous = self.position;
        self.position += self.direction;

        if !in_range(self.position.x, width) {
            self.direction *= -1.0;
            // Re-advancing by the reflected direction lands exactly here.
            self.position = previous;
        }

        if !in_range(self.position.y, height) {
            self.deleted = true;
        }
    }

    /// Pixel the particle currently covers, if it is still live.
    pub fn pixel(&self) -> Option<(i32, i32)> {
        if self.deleted {
            return None;
        }
        Some((self.position.x as i32, self.position.y as i32))
    }
}

#[inline]
fn in_range(v: f64, limit: i32) -> bool {
    v >= 0.0 && v < f64::from(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_by_direction() {
        let mut p = Particle::new(Vector::new_2d(5.0, 5.0), Vector::new_2d(1.0, -0.5), 1.0);
        p.step(10, 10);
        assert_eq!(p.position, Vector::new_2d(6.0, 4.5));
        assert!(!p.deleted);
    }

    #[test]
    fn bounces_off_left_wall() {
        let mut p = Particle::new(Vector::new_2d(0.5, 5.0), Vector::new_2d(-1.0, 0.0), 1.0);
        p.step(10, 10);
        assert_eq!(p.direction, Vector::new_2d(1.0, 0.0));
        assert_eq!(p.position, Vector::new_2d(0.5, 5.0));

        p.step(10, 10);
        assert_eq!(p.position, Vector::new_2d(1.5, 5.0));
    }

    #[test]
    fn bounces_off_right_wall() {
        let mut p = Particle::new(Vector::new_2d(9.5, 5.0), Vector::new_2d(0.75, 0.25), 1.0);
        p.step(10, 10);
        assert!(p.position.x < 10.0);
        assert_eq!(p.direction, Vector::new_2d(-0.75, -0.25));
    }

    #[test]
    fn leaving_vertically_is_sticky() {
        let mut p = Particle::new(Vector::new_2d(5.0, 9.5), Vector::new_2d(0.0, 1.0), 1.0);
        p.step(10, 10);
        assert!(p.deleted);
        assert_eq!(p.pixel(), None);

        let frozen = p.position;
        p.step(10, 10);
        assert!(p.deleted);
        assert_eq!(p.position, frozen);
    }
}
