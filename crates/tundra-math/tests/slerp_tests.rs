// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::FRAC_PI_2;
use tundra_math::{linear, Quat, Radians, Vec3};

fn angle_between(a: &Quat, b: &Quat) -> f32 {
    2.0 * a.dot(b).abs().min(1.0).acos()
}

#[test]
fn midpoint_splits_the_angle_evenly() {
    let a = Quat::identity();
    let b = Quat::from_axis_angle(Vec3::UNIT_Y, Radians(FRAC_PI_2));
    let mid = a.slerp(&b, 0.5);
    let first = angle_between(&a, &mid);
    let second = angle_between(&mid, &b);
    assert!((first - second).abs() <= 1e-5, "{first} vs {second}");
    assert!((first - FRAC_PI_2 / 2.0).abs() <= 1e-5);
}

#[test]
fn angular_speed_is_constant() {
    let a = Quat::from_axis_angle(Vec3::UNIT_Z, Radians(0.2));
    let b = Quat::from_axis_angle(Vec3::UNIT_Z, Radians(2.6));
    let steps: Vec<Quat> = (0..=4).map(|i| a.slerp(&b, i as f32 / 4.0)).collect();
    let deltas: Vec<f32> = steps.windows(2).map(|w| angle_between(&w[0], &w[1])).collect();
    for d in &deltas {
        assert!((d - 0.6).abs() <= 1e-4, "{deltas:?}");
    }
}

#[test]
fn takes_the_short_way_round() {
    let a = Quat::identity();
    // same rotation as a small positive turn, but on the far hemisphere
    let small = Quat::from_axis_angle(Vec3::UNIT_X, Radians(0.2));
    let far = Quat::new(-small.x(), -small.y(), -small.z(), -small.w());
    let mid = a.slerp(&far, 0.5);
    assert!((angle_between(&a, &mid) - 0.1).abs() <= 1e-5);
    assert!(mid.w() > 0.0);
}

#[test]
fn nearly_parallel_inputs_stay_finite() {
    let a = Quat::from_axis_angle(Vec3::UNIT_Y, Radians(1.0));
    let b = Quat::from_axis_angle(Vec3::UNIT_Y, Radians(1.0 + 1e-7));
    let q = a.slerp(&b, 0.3);
    assert!(q.to_array().iter().all(|v| v.is_finite()));
    assert!((q.length_squared() - 1.0).abs() <= 1e-6);
}

#[test]
fn linear_on_rotations_is_slerp_not_lerp() {
    let a = Quat::identity();
    let b = Quat::from_axis_angle(Vec3::UNIT_Z, Radians(2.0));
    let q = linear(0.25, &a, &b);
    assert_eq!(q, a.slerp(&b, 0.25));
    let naive = Quat::new(
        a.x() + (b.x() - a.x()) * 0.25,
        a.y() + (b.y() - a.y()) * 0.25,
        a.z() + (b.z() - a.z()) * 0.25,
        a.w() + (b.w() - a.w()) * 0.25,
    );
    assert!((naive.length_squared() - 1.0).abs() > 1e-3);
    assert!((q.length_squared() - 1.0).abs() <= 1e-6);
}
