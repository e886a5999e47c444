// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar helpers: clamping, unit conversion and the editor's rounding rules.

use std::f32::consts::TAU;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// # Panics
/// Panics when `min > max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Rounds half away from zero by biasing ±0.5 and truncating.
///
/// Out-of-range values saturate at the `i32` bounds; NaN maps to 0.
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_int(value: f32) -> i32 {
    if value < 0.0 {
        (value - 0.5) as i32
    } else {
        (value + 0.5) as i32
    }
}

/// Rounds to a signed byte, saturating to `[-127, 127]`.
///
/// Zero is left untouched; everything else is biased by ±0.5 before the
/// truncating cast, matching [`round_to_int`] inside the byte range.
#[allow(clippy::cast_possible_truncation)]
pub fn round_to_i8(value: f32) -> i8 {
    let mut a = value;
    if a < 0.0 {
        a -= 0.5;
    }
    if a > 0.0 {
        a += 0.5;
    }
    a = a.clamp(-127.0, 127.0);
    a as i8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_int_goes_half_away_from_zero() {
        assert_eq!(round_to_int(1.5), 2);
        assert_eq!(round_to_int(1.49), 1);
        assert_eq!(round_to_int(-1.5), -2);
        assert_eq!(round_to_int(-1.49), -1);
        assert_eq!(round_to_int(0.0), 0);
    }

    #[test]
    fn round_to_i8_saturates() {
        assert_eq!(round_to_i8(300.0), 127);
        assert_eq!(round_to_i8(-300.0), -127);
        assert_eq!(round_to_i8(126.6), 127);
        assert_eq!(round_to_i8(-2.5), -3);
        assert_eq!(round_to_i8(0.0), 0);
    }

    #[test]
    #[should_panic(expected = "invalid clamp range")]
    fn clamp_rejects_inverted_range() {
        let _ = clamp(0.0, 1.0, -1.0);
    }
}
