// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Water brush: the state behind the water editing panel.
//!
//! Sliders and hotkeys mutate a [`WaterBrush`]; painting, transparency
//! generation and cropping are forwarded to a [`LiquidWorld`] implemented by
//! the terrain layer. Names for liquid ids come from a [`LiquidTypes`]
//! lookup.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tundra_math::{Degrees, Quat, Radians, TileIndex, Vec3};

/// Largest brush radius in world units.
pub const MAX_RADIUS: f32 = 250.0;
/// Steepest angled-water tilt.
pub const MAX_ANGLE: Degrees = Degrees(89.0);
/// Full turn for the orientation slider.
pub const FULL_TURN: Degrees = Degrees(360.0);
/// Liquid selected in a fresh brush.
pub const DEFAULT_LIQUID_ID: u32 = 2;

/// Depth-to-alpha presets for automatic water transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransparencyPreset {
    /// Shallow, clear water.
    River,
    /// Deep water that turns opaque quickly.
    Ocean,
}

impl TransparencyPreset {
    /// Falloff factor handed to the world.
    pub fn factor(self) -> f32 {
        match self {
            Self::River => 0.0337,
            Self::Ocean => 0.007,
        }
    }
}

/// One paint request sent to the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidStroke {
    /// Brush centre.
    pub pos: Vec3,
    /// Brush radius.
    pub radius: f32,
    /// Liquid type to paint.
    pub liquid_id: u32,
    /// `true` adds liquid, `false` removes it.
    pub add: bool,
    /// Surface tilt; zero unless angled mode is on.
    pub angle: Radians,
    /// Direction the tilt faces; zero unless angled mode is on.
    pub orientation: Radians,
    /// Keep the surface height anchored at `lock_pos`.
    pub locked: bool,
    /// Anchor used while `locked`.
    pub lock_pos: Vec3,
}

/// Terrain-side operations the water brush drives.
pub trait LiquidWorld {
    /// Paint or erase liquid.
    fn paint_liquid(&mut self, stroke: &LiquidStroke);
    /// Recompute liquid transparency from depth using `factor`.
    fn auto_gen_water_transparency(&mut self, factor: f32);
    /// Remove liquid hidden below the terrain around `camera`.
    fn crop_water(&mut self, camera: Vec3);
}

/// Liquid type lookup.
pub trait LiquidTypes {
    /// Display name for `id`, if known.
    fn liquid_name(&self, id: u32) -> Option<String>;
}

/// Persisted subset of the brush.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterBrushSettings {
    /// Liquid type id.
    pub liquid_id: u32,
    /// Brush radius.
    pub radius: f32,
    /// Tilt in degrees.
    pub angle: Degrees,
    /// Tilt direction in degrees.
    pub orientation: Degrees,
    /// Angled mode toggle.
    pub angled_mode: bool,
}

impl Default for WaterBrushSettings {
    fn default() -> Self {
        Self {
            liquid_id: DEFAULT_LIQUID_ID,
            radius: 10.0,
            angle: Degrees(10.0),
            orientation: Degrees(0.0),
            angled_mode: false,
        }
    }
}

/// Live water brush state.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterBrush {
    liquid_id: u32,
    radius: f32,
    angle: Degrees,
    orientation: Degrees,
    locked: bool,
    angled_mode: bool,
    lock_pos: Vec3,
    tile: TileIndex,
}

impl Default for WaterBrush {
    fn default() -> Self {
        Self::from_settings(&WaterBrushSettings::default())
    }
}

impl WaterBrush {
    /// Brush restored from saved settings; values are clamped into range.
    pub fn from_settings(settings: &WaterBrushSettings) -> Self {
        let mut brush = Self {
            liquid_id: settings.liquid_id,
            radius: 0.0,
            angle: Degrees(0.0),
            orientation: Degrees(0.0),
            locked: false,
            angled_mode: settings.angled_mode,
            lock_pos: Vec3::ZERO,
            tile: TileIndex::default(),
        };
        brush.set_radius(settings.radius);
        brush.set_angle(settings.angle);
        brush.set_orientation(settings.orientation);
        brush
    }

    /// Snapshot for persistence.
    pub fn settings(&self) -> WaterBrushSettings {
        WaterBrushSettings {
            liquid_id: self.liquid_id,
            radius: self.radius,
            angle: self.angle,
            orientation: self.orientation,
            angled_mode: self.angled_mode,
        }
    }

    /// Selected liquid type.
    pub fn liquid_id(&self) -> u32 {
        self.liquid_id
    }

    /// Brush radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Tilt used in angled mode.
    pub fn angle(&self) -> Degrees {
        self.angle
    }

    /// Tilt direction used in angled mode.
    pub fn orientation(&self) -> Degrees {
        self.orientation
    }

    /// Whether the surface height is anchored.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether strokes paint tilted surfaces.
    pub fn is_angled(&self) -> bool {
        self.angled_mode
    }

    /// Anchor position for locked painting.
    pub fn lock_position(&self) -> Vec3 {
        self.lock_pos
    }

    /// Tile the brush was last updated for.
    pub fn tile(&self) -> TileIndex {
        self.tile
    }

    /// Sets the radius, clamped to `[0, MAX_RADIUS]`.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.clamp(0.0, MAX_RADIUS);
    }

    /// Adjusts the radius by `delta`, clamped to `[0, MAX_RADIUS]`.
    pub fn change_radius(&mut self, delta: f32) {
        self.set_radius(self.radius + delta);
    }

    /// Sets the tilt, clamped to `[0, MAX_ANGLE]`.
    pub fn set_angle(&mut self, angle: Degrees) {
        self.angle = Degrees(angle.get().clamp(0.0, MAX_ANGLE.get()));
    }

    /// Adjusts the tilt by `delta` degrees.
    pub fn change_angle(&mut self, delta: f32) {
        self.set_angle(Degrees(self.angle.get() + delta));
    }

    /// Sets the tilt direction, wrapped once into `[0, 360]`.
    pub fn set_orientation(&mut self, orientation: Degrees) {
        let mut deg = orientation.get();
        if deg < 0.0 {
            deg += FULL_TURN.get();
        } else if deg > FULL_TURN.get() {
            deg -= FULL_TURN.get();
        }
        self.orientation = Degrees(deg);
    }

    /// Adjusts the tilt direction by `delta` degrees.
    pub fn change_orientation(&mut self, delta: f32) {
        self.set_orientation(Degrees(self.orientation.get() + delta));
    }

    /// Radius slider position in `[0, 1]`.
    pub fn radius_fraction(&self) -> f32 {
        self.radius / MAX_RADIUS
    }

    /// Angle slider position in `[0, 1]`.
    pub fn angle_fraction(&self) -> f32 {
        self.angle.get() / MAX_ANGLE.get()
    }

    /// Orientation slider position in `[0, 1]`.
    pub fn orientation_fraction(&self) -> f32 {
        self.orientation.get() / FULL_TURN.get()
    }

    /// Flips the height lock and returns the new state.
    pub fn toggle_lock(&mut self) -> bool {
        self.locked = !self.locked;
        debug!(locked = self.locked, "water brush lock");
        self.locked
    }

    /// Flips angled mode and returns the new state.
    pub fn toggle_angled_mode(&mut self) -> bool {
        self.angled_mode = !self.angled_mode;
        debug!(angled = self.angled_mode, "water brush angled mode");
        self.angled_mode
    }

    /// Sets the anchor used while locked.
    pub fn set_lock_position(&mut self, pos: Vec3) {
        self.lock_pos = pos;
    }

    /// Selects a liquid type.
    pub fn change_water_type(&mut self, liquid_id: u32) {
        self.liquid_id = liquid_id;
        debug!(liquid_id, "water brush liquid type");
    }

    /// Records the tile under the cursor. Returns `true` when it changed.
    pub fn update_tile(&mut self, tile: TileIndex) -> bool {
        if tile == self.tile {
            return false;
        }
        self.tile = tile;
        true
    }

    /// Button caption for the liquid type, e.g. `"2 - Water"`.
    pub fn type_label(&self, types: &impl LiquidTypes) -> String {
        let name = types
            .liquid_name(self.liquid_id)
            .unwrap_or_else(|| String::from("unknown"));
        format!("{} - {}", self.liquid_id, name)
    }

    /// Tilt of the painted surface; identity unless angled mode is on.
    pub fn surface_rotation(&self) -> Quat {
        if !self.angled_mode {
            return Quat::identity();
        }
        Quat::from_euler(
            Radians(0.0),
            Radians::from(self.orientation),
            Radians::from(self.angle),
        )
    }

    /// Paint request for a stroke at `pos`.
    pub fn stroke(&self, pos: Vec3, add: bool) -> LiquidStroke {
        let (angle, orientation) = if self.angled_mode {
            (Radians::from(self.angle), Radians::from(self.orientation))
        } else {
            (Radians(0.0), Radians(0.0))
        };
        LiquidStroke {
            pos,
            radius: self.radius,
            liquid_id: self.liquid_id,
            add,
            angle,
            orientation,
            locked: self.locked,
            lock_pos: self.lock_pos,
        }
    }

    /// Paints (or erases) liquid at `pos`.
    pub fn paint_liquid(&self, world: &mut impl LiquidWorld, pos: Vec3, add: bool) {
        world.paint_liquid(&self.stroke(pos, add));
    }

    /// Crops hidden water around `camera`, then returns the refreshed type
    /// caption for the panel.
    pub fn crop_water(
        &self,
        world: &mut impl LiquidWorld,
        types: &impl LiquidTypes,
        camera: Vec3,
    ) -> String {
        info!(tile = ?TileIndex::from_position(camera), "cropping water");
        world.crop_water(camera);
        self.type_label(types)
    }
}

/// Regenerates liquid transparency with a preset.
pub fn apply_transparency(world: &mut impl LiquidWorld, preset: TransparencyPreset) {
    info!(?preset, factor = preset.factor(), "auto water transparency");
    world.auto_gen_water_transparency(preset.factor());
}
