// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::f64::consts::PI;

use crate::angle::Radians;
use crate::scalar::EPSILON;
use crate::vec3::Vec3;

/// Fraction of the squared norm past which [`Quat::to_euler_degrees`] treats
/// the rotation as gimbal-locked at a pole.
pub const POLE_THRESHOLD: f64 = 0.499;

const RAD_TO_DEG: f64 = 180.0 / PI;

/// Rotation stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All construction angles are radians; [`Quat::to_euler_degrees`] reports
///   degrees.
/// * Values are not normalised on construction. Non-unit inputs are accepted
///   everywhere and the Euler extraction corrects for the norm.
/// * Only rotation operations are exposed; there is no component-wise
///   arithmetic.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Builds a quaternion from a vector part and a scalar part.
    pub fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// Constructs a quaternion from a rotation axis and angle in radians.
    ///
    /// Returns the identity quaternion when the axis length is ≤ `EPSILON`.
    pub fn from_axis_angle(axis: Vec3, angle: Radians) -> Self {
        let len_sq = axis.length_squared();
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        let norm_axis = axis.scale(1.0 / len_sq.sqrt());
        let (sin_half, cos_half) = (angle.get() * 0.5).sin_cos();
        Self::from_vec3(norm_axis.scale(sin_half), cos_half)
    }

    /// Constructs a rotation from bank, heading and attitude.
    ///
    /// * `bank`: rotation about X.
    /// * `heading`: rotation about Y.
    /// * `attitude`: rotation about Z.
    ///
    /// The half-angle products are evaluated in `f64` and rounded once.
    ///
    /// # Examples
    /// ```
    /// use tundra_math::{Quat, Radians};
    /// let q = Quat::from_euler(Radians(0.0), Radians(0.0), Radians(0.0));
    /// assert_eq!(q, Quat::identity());
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_euler(bank: Radians, heading: Radians, attitude: Radians) -> Self {
        let (s1, c1) = (f64::from(heading.get()) * 0.5).sin_cos();
        let (s2, c2) = (f64::from(attitude.get()) * 0.5).sin_cos();
        let (s3, c3) = (f64::from(bank.get()) * 0.5).sin_cos();
        let c1c2 = c1 * c2;
        let s1s2 = s1 * s2;
        let w = c1c2 * c3 - s1s2 * s3;
        let x = c1c2 * s3 + s1s2 * c3;
        let y = s1 * c2 * c3 + c1 * s2 * s3;
        let z = c1 * s2 * c3 - s1 * c2 * s3;
        Self::new(x as f32, y as f32, z as f32, w as f32)
    }

    /// Returns the quaternion as an array.
    pub fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// X component.
    pub fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar component.
    pub fn w(&self) -> f32 {
        self.data[3]
    }

    /// Vector part `(x, y, z)`.
    pub fn xyz(&self) -> Vec3 {
        Vec3::new(self.x(), self.y(), self.z())
    }

    /// Composes `self` with `other`.
    ///
    /// Operand order matters and the component formula is fixed; stored
    /// orientations and the painting code rely on it as written.
    pub fn compose(&self, other: &Self) -> Self {
        let (ax, ay, az, aw) = (self.x(), self.y(), self.z(), self.w());
        let (bx, by, bz, bw) = (other.x(), other.y(), other.z(), other.w());

        Self::new(
            ax * bw + ay * bz - az * by + aw * bx,
            -ax * bz + ay * bw + az * bx + aw * by,
            ax * by - ay * bx + az * bw + aw * bz,
            -ax * bx - ay * by - az * bz + aw * bw,
        )
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z() + self.w() * other.w()
    }

    /// Squared norm.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Conjugate `(-x, -y, -z, w)`; the inverse rotation for unit quaternions.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Normalises the quaternion; returns identity when norm is ~0.
    pub fn normalize(&self) -> Self {
        let len = self.length_squared().sqrt();
        if len <= EPSILON {
            return Self::identity();
        }
        let inv = 1.0 / len;
        Self::new(
            self.x() * inv,
            self.y() * inv,
            self.z() * inv,
            self.w() * inv,
        )
    }

    /// Converts to Euler angles in degrees: `x` = pitch, `y` = yaw,
    /// `z` = roll.
    ///
    /// Near the poles (`|x*y + z*w| > 0.499 * |q|²`) roll is pinned to zero and
    /// pitch to exactly ±90°.
    ///
    /// Squares, the pole test and the `atan2` numerators are formed in `f32`
    /// and only then widened, so a rotation right at the threshold picks the
    /// same branch as stored editor data was written with.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_euler_degrees(&self) -> Vec3 {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        let sqx = f64::from(x * x);
        let sqy = f64::from(y * y);
        let sqz = f64::from(z * z);
        let sqw = f64::from(w * w);
        // one for unit input, otherwise the correction factor
        let unit = sqx + sqy + sqz + sqw;
        let test = f64::from(x * y + z * w);

        if test > POLE_THRESHOLD * unit {
            let yaw = -2.0 * f64::from(x.atan2(w)) * RAD_TO_DEG;
            return Vec3::new(90.0, yaw as f32, 0.0);
        }
        if test < -POLE_THRESHOLD * unit {
            let yaw = 2.0 * f64::from(x.atan2(w)) * RAD_TO_DEG;
            return Vec3::new(-90.0, yaw as f32, 0.0);
        }

        let yaw_num = f64::from(2.0 * y * w - 2.0 * x * z);
        let roll_num = f64::from(2.0 * x * w - 2.0 * y * z);
        let yaw = -yaw_num.atan2(sqx - sqy - sqz + sqw) * RAD_TO_DEG;
        let pitch = (2.0 * test / unit).asin() * RAD_TO_DEG;
        let roll = roll_num.atan2(-sqx + sqy - sqz + sqw) * RAD_TO_DEG;
        Vec3::new(pitch as f32, yaw as f32, roll as f32)
    }

    /// Spherical linear interpolation from `self` (t = 0) to `end` (t = 1).
    ///
    /// Follows the shorter arc and keeps constant angular velocity. Nearly
    /// parallel inputs fall back to a normalised linear blend, where the
    /// `sin(theta)` divisor would lose precision.
    pub fn slerp(&self, end: &Self, t: f32) -> Self {
        let mut cos_theta = self.dot(end);
        let end = if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            Self::new(-end.x(), -end.y(), -end.z(), -end.w())
        } else {
            *end
        };

        let nearly_parallel = cos_theta > 1.0 - EPSILON;
        let (a, b) = if nearly_parallel {
            (1.0 - t, t)
        } else {
            let theta = cos_theta.min(1.0).acos();
            let sin_theta = theta.sin();
            (
                ((1.0 - t) * theta).sin() / sin_theta,
                (t * theta).sin() / sin_theta,
            )
        };

        let blended = Self::new(
            self.x() * a + end.x() * b,
            self.y() * a + end.y() * b,
            self.z() * a + end.z() * b,
            self.w() * a + end.w() * b,
        );
        if nearly_parallel {
            blended.normalize()
        } else {
            blended
        }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Converts a 4‑element `[f32; 4]` array `(x, y, z, w)` into a `Quat`.
/// The components are taken verbatim.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}
