// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Terrain tile addressing.

use crate::vec3::Vec3;

/// Edge length of one terrain tile in world units.
pub const TILE_SIZE: f32 = 533.33333;

/// Tile coordinate containing `coord`, truncated toward zero.
#[allow(clippy::cast_possible_truncation)]
pub fn tile_coord(coord: f32) -> i32 {
    (coord / TILE_SIZE) as i32
}

/// Index of a terrain tile on the map grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileIndex {
    /// Column (world X).
    pub x: i32,
    /// Row (world Z).
    pub z: i32,
}

impl TileIndex {
    /// Creates a tile index.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Tile under a world position; height is ignored.
    pub fn from_position(pos: Vec3) -> Self {
        Self::new(tile_coord(pos.x()), tile_coord(pos.z()))
    }
}
