//! Vector module - small 2D/3D vector used for positions and directions
//!
//! Operators (`+`, `-`, `*`, `/` and their assign forms) are componentwise;
//! `*` and `/` take a scalar.
//!
//! Division is IEEE-754 permissive: dividing by zero yields infinities or NaN
//! rather than panicking. [`Vector::normalize`] and [`Vector::limit`] are the
//! only operations that guard against a zero magnitude.

use std::f64::consts::TAU;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;
use serde::Serialize;

/// A vector in up to three dimensions. 2D users leave `z` at zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn new_2d(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Unit vector in the xy plane pointing at `angle` radians.
    pub fn from_angle(angle: f64) -> Self {
        Self::new_2d(angle.cos(), angle.sin())
    }

    /// Uniformly random direction on the unit circle.
    pub fn random_2d<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_angle(rng.gen_range(0.0..TAU))
    }

    /// Uniformly random direction on the unit sphere.
    pub fn random_3d<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let z: f64 = rng.gen_range(-1.0..=1.0);
        let r = (1.0 - z * z).sqrt();
        Self::new(r * angle.cos(), r * angle.sin(), z)
    }

    pub fn mag(&self) -> f64 {
        self.mag_sq().sqrt()
    }

    pub fn mag_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean distance to `other`.
    pub fn dist(&self, other: Vector) -> f64 {
        self.diff(other).mag()
    }

    /// Clamp the magnitude to `max`, keeping the direction.
    pub fn limit(&mut self, max: f64) {
        if self.mag_sq() > max * max {
            self.normalize();
            *self *= max;
        }
    }

    /// Scale to unit length. No-op when the magnitude is 0 or already 1.
    pub fn normalize(&mut self) {
        let m = self.mag();
        if m != 0.0 && m != 1.0 {
            *self /= m;
        }
    }

    /// `self - other` without mutating either side.
    pub fn diff(&self, other: Vector) -> Vector {
        *self - other
    }

    /// Add 1 to every component.
    pub fn inc(&mut self) {
        self.x += 1.0;
        self.y += 1.0;
        self.z += 1.0;
    }

    /// Subtract 1 from every component.
    pub fn dec(&mut self) {
        self.x -= 1.0;
        self.y -= 1.0;
        self.z -= 1.0;
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, n: f64) -> Vector {
        Vector::new(self.x * n, self.y * n, self.z * n)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, n: f64) {
        *self = *self * n;
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, n: f64) -> Vector {
        Vector::new(self.x / n, self.y / n, self.z / n)
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, n: f64) {
        *self = *self / n;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self * -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn magnitude_of_3_4_5() {
        let v = Vector::new_2d(3.0, 4.0);
        assert_relative_eq!(v.mag(), 5.0);
        assert_relative_eq!(v.mag_sq(), 25.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(4.0, 6.0, 3.0);
        assert_relative_eq!(a.dist(b), 5.0);
        assert_relative_eq!(b.dist(a), 5.0);
    }

    #[test]
    fn from_angle_is_unit_length() {
        for i in 0..16 {
            let v = Vector::from_angle(i as f64 * 0.4);
            assert_relative_eq!(v.mag(), 1.0, epsilon = 1e-12);
            assert_eq!(v.z, 0.0);
        }
    }

    #[test]
    fn random_directions_are_unit_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert_relative_eq!(Vector::random_2d(&mut rng).mag(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(Vector::random_3d(&mut rng).mag(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn normalize_skips_zero_and_unit_vectors() {
        let mut zero = Vector::ZERO;
        zero.normalize();
        assert_eq!(zero, Vector::ZERO);

        let mut unit = Vector::new_2d(0.0, 1.0);
        unit.normalize();
        assert_eq!(unit, Vector::new_2d(0.0, 1.0));

        let mut v = Vector::new_2d(0.0, -8.0);
        v.normalize();
        assert_relative_eq!(v.y, -1.0);
    }

    #[test]
    fn limit_only_shrinks_long_vectors() {
        let mut short = Vector::new_2d(1.0, 1.0);
        short.limit(5.0);
        assert_eq!(short, Vector::new_2d(1.0, 1.0));

        let mut long = Vector::new_2d(30.0, 40.0);
        long.limit(5.0);
        assert_relative_eq!(long.x, 3.0);
        assert_relative_eq!(long.y, 4.0);
    }

    #[test]
    fn operators_are_componentwise() {
        let mut v = Vector::new(1.0, 2.0, 3.0);
        v += Vector::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector::new(2.0, 3.0, 4.0));
        v *= 2.0;
        assert_eq!(v, Vector::new(4.0, 6.0, 8.0));
        v /= 2.0;
        assert_eq!(v, Vector::new(2.0, 3.0, 4.0));
        v -= Vector::new(2.0, 3.0, 4.0);
        assert_eq!(v, Vector::ZERO);
        assert_eq!(-Vector::new_2d(1.0, -2.0), Vector::new_2d(-1.0, 2.0));
    }

    #[test]
    fn inc_and_dec_touch_every_component() {
        let mut v = Vector::ZERO;
        v.inc();
        assert_eq!(v, Vector::new(1.0, 1.0, 1.0));
        v.dec();
        v.dec();
        assert_eq!(v, Vector::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn diff_leaves_operands_untouched() {
        let a = Vector::new_2d(5.0, 5.0);
        let b = Vector::new_2d(2.0, 1.0);
        assert_eq!(a.diff(b), Vector::new_2d(3.0, 4.0));
        assert_eq!(a, Vector::new_2d(5.0, 5.0));
    }

    #[test]
    fn division_by_zero_propagates_non_finite_values() {
        let v = Vector::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(v.z.is_nan());
    }
}
