// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Packed 16-bit rotation records as stored by model files.
//!
//! Layout: four little-endian `i16` in `x, y, z, w` order, 8 bytes per
//! record. No scaling is applied here; converting the integers to a [`Quat`]
//! is the consuming format's business.
//!
//! [`Quat`]: crate::Quat

use bytemuck::{Pod, Zeroable};
use thiserror::Error;

/// Size of one packed record in bytes.
const RECORD_LEN: usize = 8;

/// Rotation stored as four signed 16-bit integers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedQuat {
    /// X component.
    pub x: i16,
    /// Y component.
    pub y: i16,
    /// Z component.
    pub z: i16,
    /// W component.
    pub w: i16,
}

const _: () = assert!(std::mem::size_of::<PackedQuat>() == RECORD_LEN);

/// Errors raised while decoding packed rotation buffers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PackedQuatError {
    /// Buffer length is not a whole number of records.
    #[error("packed rotation buffer has {remainder} trailing bytes (length {len})")]
    TrailingBytes {
        /// Total buffer length.
        len: usize,
        /// Bytes left over after the last whole record.
        remainder: usize,
    },
}

impl PackedQuat {
    /// Creates a packed record from components.
    pub const fn new(x: i16, y: i16, z: i16, w: i16) -> Self {
        Self { x, y, z, w }
    }

    /// Decodes one record from little-endian bytes.
    pub fn from_le_bytes(bytes: [u8; RECORD_LEN]) -> Self {
        Self {
            x: i16::from_le_bytes([bytes[0], bytes[1]]),
            y: i16::from_le_bytes([bytes[2], bytes[3]]),
            z: i16::from_le_bytes([bytes[4], bytes[5]]),
            w: i16::from_le_bytes([bytes[6], bytes[7]]),
        }
    }

    /// Encodes the record as little-endian bytes.
    pub fn to_le_bytes(self) -> [u8; RECORD_LEN] {
        let mut out = [0u8; RECORD_LEN];
        out[0..2].copy_from_slice(&self.x.to_le_bytes());
        out[2..4].copy_from_slice(&self.y.to_le_bytes());
        out[4..6].copy_from_slice(&self.z.to_le_bytes());
        out[6..8].copy_from_slice(&self.w.to_le_bytes());
        out
    }

    /// Decodes a contiguous run of records.
    ///
    /// Fails when `bytes` does not hold a whole number of records.
    pub fn read_all(bytes: &[u8]) -> Result<Vec<Self>, PackedQuatError> {
        let remainder = bytes.len() % RECORD_LEN;
        if remainder != 0 {
            return Err(PackedQuatError::TrailingBytes {
                len: bytes.len(),
                remainder,
            });
        }
        Ok(bytes
            .chunks_exact(RECORD_LEN)
            .map(|chunk| {
                let mut record = [0u8; RECORD_LEN];
                record.copy_from_slice(chunk);
                Self::from_le_bytes(record)
            })
            .collect())
    }

    /// Components as `[x, y, z, w]`.
    pub fn to_array(self) -> [i16; 4] {
        [self.x, self.y, self.z, self.w]
    }
}
