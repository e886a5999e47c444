// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use std::collections::HashMap;

use tundra_app_core::water::{
    apply_transparency, LiquidStroke, LiquidTypes, LiquidWorld, TransparencyPreset,
    WaterBrush, WaterBrushSettings, DEFAULT_LIQUID_ID, MAX_RADIUS,
};
use tundra_math::{Degrees, Quat, Radians, TileIndex, Vec3};

#[derive(Default)]
struct RecordingWorld {
    strokes: Vec<LiquidStroke>,
    transparency: Vec<f32>,
    crops: Vec<Vec3>,
}

impl LiquidWorld for RecordingWorld {
    fn paint_liquid(&mut self, stroke: &LiquidStroke) {
        self.strokes.push(*stroke);
    }

    fn auto_gen_water_transparency(&mut self, factor: f32) {
        self.transparency.push(factor);
    }

    fn crop_water(&mut self, camera: Vec3) {
        self.crops.push(camera);
    }
}

struct Names(HashMap<u32, String>);

impl LiquidTypes for Names {
    fn liquid_name(&self, id: u32) -> Option<String> {
        self.0.get(&id).cloned()
    }
}

#[test]
fn fresh_brush_has_panel_defaults() {
    let brush = WaterBrush::default();
    assert_eq!(brush.liquid_id(), DEFAULT_LIQUID_ID);
    assert_eq!(brush.radius(), 10.0);
    assert_eq!(brush.angle(), Degrees(10.0));
    assert_eq!(brush.orientation(), Degrees(0.0));
    assert!(!brush.is_locked());
    assert!(!brush.is_angled());
    assert_eq!(brush.lock_position(), Vec3::ZERO);
}

#[test]
fn radius_and_angle_clamp() {
    let mut brush = WaterBrush::default();
    brush.change_radius(1000.0);
    assert_eq!(brush.radius(), MAX_RADIUS);
    assert_eq!(brush.radius_fraction(), 1.0);
    brush.change_radius(-1000.0);
    assert_eq!(brush.radius(), 0.0);

    brush.change_angle(500.0);
    assert_eq!(brush.angle(), Degrees(89.0));
    assert_eq!(brush.angle_fraction(), 1.0);
    brush.change_angle(-500.0);
    assert_eq!(brush.angle(), Degrees(0.0));
}

#[test]
fn orientation_wraps_once() {
    let mut brush = WaterBrush::default();
    brush.change_orientation(-30.0);
    assert_eq!(brush.orientation(), Degrees(330.0));
    brush.change_orientation(60.0);
    assert_eq!(brush.orientation(), Degrees(30.0));
    brush.set_orientation(Degrees(360.0));
    assert_eq!(brush.orientation(), Degrees(360.0));
    assert_eq!(brush.orientation_fraction(), 1.0);
}

#[test]
fn flat_strokes_carry_zero_angles() {
    let mut brush = WaterBrush::default();
    brush.change_orientation(90.0);
    let mut world = RecordingWorld::default();
    brush.paint_liquid(&mut world, Vec3::new(1.0, 2.0, 3.0), true);

    let stroke = world.strokes[0];
    assert_eq!(stroke.pos, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(stroke.radius, 10.0);
    assert_eq!(stroke.liquid_id, DEFAULT_LIQUID_ID);
    assert!(stroke.add);
    assert_eq!(stroke.angle, Radians(0.0));
    assert_eq!(stroke.orientation, Radians(0.0));
    assert_eq!(brush.surface_rotation(), Quat::identity());
}

#[test]
fn angled_strokes_carry_radians_and_lock() {
    let mut brush = WaterBrush::default();
    assert!(brush.toggle_angled_mode());
    assert!(brush.toggle_lock());
    brush.set_lock_position(Vec3::new(5.0, 6.0, 7.0));
    brush.set_angle(Degrees(45.0));
    brush.set_orientation(Degrees(180.0));

    let stroke = brush.stroke(Vec3::ZERO, false);
    assert!(!stroke.add);
    assert!(stroke.locked);
    assert_eq!(stroke.lock_pos, Vec3::new(5.0, 6.0, 7.0));
    assert!((stroke.angle.get() - core::f32::consts::FRAC_PI_4).abs() <= 1e-6);
    assert!((stroke.orientation.get() - core::f32::consts::PI).abs() <= 1e-6);
}

#[test]
fn angled_surface_rotation_tilts_by_angle() {
    let mut brush = WaterBrush::default();
    brush.toggle_angled_mode();
    brush.set_angle(Degrees(30.0));
    brush.set_orientation(Degrees(0.0));
    let angles = brush.surface_rotation().to_euler_degrees();
    assert!((angles.x() - 30.0).abs() <= 1e-3, "{angles:?}");
    assert!(angles.y().abs() <= 1e-3);
    assert!(angles.z().abs() <= 1e-3);
}

#[test]
fn type_label_uses_lookup() {
    let names = Names(HashMap::from([(2, String::from("Water")), (3, String::from("Ocean"))]));
    let mut brush = WaterBrush::default();
    assert_eq!(brush.type_label(&names), "2 - Water");
    brush.change_water_type(3);
    assert_eq!(brush.type_label(&names), "3 - Ocean");
    brush.change_water_type(77);
    assert_eq!(brush.type_label(&names), "77 - unknown");
}

#[test]
fn tile_updates_report_changes() {
    let mut brush = WaterBrush::default();
    assert!(!brush.update_tile(TileIndex::new(0, 0)));
    assert!(brush.update_tile(TileIndex::new(31, 12)));
    assert!(!brush.update_tile(TileIndex::new(31, 12)));
    assert_eq!(brush.tile(), TileIndex::new(31, 12));
}

#[test]
fn presets_reach_the_world() {
    let mut world = RecordingWorld::default();
    apply_transparency(&mut world, TransparencyPreset::River);
    apply_transparency(&mut world, TransparencyPreset::Ocean);
    assert_eq!(world.transparency, vec![0.0337, 0.007]);
}

#[test]
fn crop_forwards_camera_and_refreshes_caption() {
    let mut world = RecordingWorld::default();
    let mut brush = WaterBrush::default();
    brush.change_water_type(3);
    let names = Names(HashMap::from([(3, String::from("Ocean"))]));

    let caption = brush.crop_water(&mut world, &names, Vec3::new(100.0, 50.0, 200.0));
    assert_eq!(world.crops, vec![Vec3::new(100.0, 50.0, 200.0)]);
    assert_eq!(caption, "3 - Ocean");
    assert!(world.strokes.is_empty());
}

#[test]
fn settings_round_trip_and_clamp() {
    let mut brush = WaterBrush::default();
    brush.change_water_type(5);
    brush.set_radius(120.0);
    brush.toggle_angled_mode();
    let restored = WaterBrush::from_settings(&brush.settings());
    assert_eq!(restored.settings(), brush.settings());

    let wild = WaterBrushSettings {
        radius: 9000.0,
        angle: Degrees(-4.0),
        ..WaterBrushSettings::default()
    };
    let clamped = WaterBrush::from_settings(&wild);
    assert_eq!(clamped.radius(), MAX_RADIUS);
    assert_eq!(clamped.angle(), Degrees(0.0));
}
