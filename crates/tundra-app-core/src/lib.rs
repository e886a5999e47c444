// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared editor services for Tundra (config, prefs, environment, water brush).
//! Keeps widget and world adapters thin: state lives here, collaborators are
//! reached through port traits.

pub mod config;
pub mod environment;
pub mod prefs;
pub mod prefs_port;
pub mod text;
pub mod water;
