// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Prefs port shared across Tundra front-ends.

use tracing::warn;

use crate::config::{ConfigService, ConfigStore};
use crate::prefs::EditorPrefs;

/// Port for loading/saving editor preferences.
pub trait PrefsPort {
    /// Load editor preferences (returns None if missing or unreadable).
    fn load_prefs(&self) -> Option<EditorPrefs>;
    /// Persist editor preferences (best-effort; failures are logged).
    fn save_prefs(&self, prefs: &EditorPrefs);
}

impl<S> PrefsPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_prefs(&self) -> Option<EditorPrefs> {
        match self.load::<EditorPrefs>() {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(%err, "failed to load editor prefs; using defaults");
                None
            }
        }
    }

    fn save_prefs(&self, prefs: &EditorPrefs) {
        if let Err(err) = self.save(prefs) {
            warn!(%err, "failed to save editor prefs");
        }
    }
}
