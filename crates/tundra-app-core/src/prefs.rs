// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved editor preferences (camera, environment toggles, water brush).

use serde::{Deserialize, Serialize};
use tundra_math::{Quat, Vec3};

use crate::config::ConfigDocument;
use crate::environment::EditorEnvironment;
use crate::water::WaterBrushSettings;

/// Config key the preferences are stored under.
pub const PREFS_KEY: &str = "editor_prefs";

/// Everything the editor restores on start-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditorPrefs {
    /// Camera pose.
    pub camera: CameraPrefs,
    /// Editor-wide toggles.
    pub environment: EditorEnvironment,
    /// Last water brush configuration.
    pub water: WaterBrushSettings,
}

impl ConfigDocument for EditorPrefs {
    const KEY: &'static str = PREFS_KEY;
    // 0: bare object from before the version envelope; same field layout.
    const VERSION: u32 = 1;
}

/// Camera pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPrefs {
    /// World-space camera position.
    pub pos: Vec3,
    /// Camera orientation.
    pub orientation: Quat,
}

impl Default for CameraPrefs {
    fn default() -> Self {
        Self {
            pos: Vec3::new(0.0, 300.0, 0.0),
            orientation: Quat::identity(),
        }
    }
}
