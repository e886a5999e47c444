// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Angle unit newtypes.

use crate::scalar::{deg_to_rad, rad_to_deg};

/// Angle in radians.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Radians(pub f32);

/// Angle in degrees.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Degrees(pub f32);

impl Radians {
    /// Raw value in radians.
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Degrees {
    /// Raw value in degrees.
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl From<Degrees> for Radians {
    fn from(value: Degrees) -> Self {
        Self(deg_to_rad(value.0))
    }
}

impl From<Radians> for Degrees {
    fn from(value: Radians) -> Self {
        Self(rad_to_deg(value.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_angle_converts_both_ways() {
        let r = Radians::from(Degrees(90.0));
        assert!((r.get() - std::f32::consts::FRAC_PI_2).abs() <= 1e-6);
        let d = Degrees::from(r);
        assert!((d.get() - 90.0).abs() <= 1e-4);
    }
}
