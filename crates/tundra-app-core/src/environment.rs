// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Editor-wide settings shared by tool panels.
//!
//! One [`EditorEnvironment`] is owned by the application root and handed to
//! panels by reference.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Highest water layer index a chunk can hold.
pub const MAX_WATER_LAYER: usize = 4;

/// Editor-wide toggles and selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorEnvironment {
    #[serde(deserialize_with = "clamped_water_layer")]
    current_water_layer: usize,
    /// Render every water layer instead of only the current one.
    pub display_all_water_layers: bool,
}

fn clamped_water_layer<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let layer = usize::deserialize(deserializer)?;
    if layer > MAX_WATER_LAYER {
        debug!(layer, "saved water layer out of range; clamping");
    }
    Ok(layer.min(MAX_WATER_LAYER))
}

impl EditorEnvironment {
    /// Zero-based water layer edited by the water tool.
    pub fn current_water_layer(&self) -> usize {
        self.current_water_layer
    }

    /// Selects a layer, clamped to `MAX_WATER_LAYER`.
    pub fn set_current_water_layer(&mut self, layer: usize) {
        self.current_water_layer = layer.min(MAX_WATER_LAYER);
    }

    /// Steps one layer down, stopping at 0. Returns the new layer.
    pub fn previous_water_layer(&mut self) -> usize {
        self.current_water_layer = self.current_water_layer.saturating_sub(1);
        debug!(layer = self.current_water_layer, "water layer");
        self.current_water_layer
    }

    /// Steps one layer up, stopping at `MAX_WATER_LAYER`. Returns the new layer.
    pub fn next_water_layer(&mut self) -> usize {
        self.current_water_layer = (self.current_water_layer + 1).min(MAX_WATER_LAYER);
        debug!(layer = self.current_water_layer, "water layer");
        self.current_water_layer
    }

    /// One-based layer number as shown to users.
    pub fn water_layer_label(&self) -> String {
        (self.current_water_layer + 1).to_string()
    }

    /// Flips `display_all_water_layers` and returns the new value.
    pub fn toggle_display_all_water_layers(&mut self) -> bool {
        self.display_all_water_layers = !self.display_all_water_layers;
        self.display_all_water_layers
    }
}
