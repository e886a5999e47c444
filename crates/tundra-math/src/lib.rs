// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tundra-math: orientation math for the Tundra terrain editor.
//!
//! The crate centres on [`Quat`], a four-component rotation value that
//! converts to and from bank/heading/attitude Euler angles, composes with
//! other rotations and interpolates along the shortest arc. Around it sit the
//! small helpers the editor leans on: [`Vec3`], angle units, rounding and
//! terrain tile coordinates.
//!
//! All public math is `f32`. Building a rotation from Euler angles evaluates
//! the half-angle products in `f64` and rounds once; extracting Euler angles
//! forms its products in `f32` and widens them for the trigonometry.

mod angle;
mod interp;
mod packed;
mod quat;
mod scalar;
mod tile;
mod vec3;

pub use angle::{Degrees, Radians};
pub use interp::{linear, Interpolate};
pub use packed::{PackedQuat, PackedQuatError};
pub use quat::{Quat, POLE_THRESHOLD};
pub use scalar::{clamp, deg_to_rad, rad_to_deg, round_to_i8, round_to_int, EPSILON};
pub use tile::{tile_coord, TileIndex, TILE_SIZE};
pub use vec3::Vec3;
