// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Interpolation used by animation tracks and brush previews.
//!
//! Scalars and vectors blend component-wise. Rotations never do: their
//! [`Interpolate`] impl is [`Quat::slerp`], so any track written against
//! [`linear`] animates rotations at constant angular speed.

use crate::quat::Quat;
use crate::vec3::Vec3;

/// Values that can be blended between two keyframes.
pub trait Interpolate: Sized {
    /// Blends from `self` (t = 0) to `end` (t = 1).
    fn interpolate(&self, end: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        self + (end - self) * t
    }
}

impl Interpolate for Vec3 {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        self.add(&end.sub(self).scale(t))
    }
}

impl Interpolate for Quat {
    fn interpolate(&self, end: &Self, t: f32) -> Self {
        self.slerp(end, t)
    }
}

/// Interpolates from `start` to `end` by `percentage` in `[0, 1]`.
pub fn linear<T: Interpolate>(percentage: f32, start: &T, end: &T) -> T {
    start.interpolate(end, percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_and_vectors_blend_linearly() {
        assert_eq!(linear(0.25, &0.0f32, &8.0), 2.0);
        let v = linear(0.5, &Vec3::ZERO, &Vec3::new(2.0, 4.0, -6.0));
        assert_eq!(v.to_array(), [1.0, 2.0, -3.0]);
    }

    #[test]
    fn rotations_use_slerp() {
        let a = Quat::identity();
        let b = Quat::new(0.0, 1.0, 0.0, 0.0);
        let mid = linear(0.5, &a, &b);
        assert_eq!(mid, a.slerp(&b, 0.5));
        assert!((mid.length_squared() - 1.0).abs() <= 1e-6);
    }
}
