// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Versioned config documents and the storage port behind them.
//!
//! A document is stored as `{"version": N, "data": ...}` under its own key.
//! Blobs written before the envelope existed (a bare object) load as
//! version 0. Older versions are lifted one step at a time through
//! [`ConfigDocument::upgrade`]; versions newer than the running build are
//! refused instead of being misread.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// Key the store cannot map to a location.
    #[error("invalid config key {0:?}")]
    InvalidKey(String),
    /// No per-user config directory on this platform.
    #[error("could not resolve config dir")]
    NoConfigDir,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Blob was written by a newer build.
    #[error("{key}: version {found} is newer than supported version {supported}")]
    UnsupportedVersion {
        /// Document key.
        key: &'static str,
        /// Version found in the blob.
        found: u32,
        /// Newest version this build reads.
        supported: u32,
    },
    /// An upgrade step rejected the stored data.
    #[error("{key}: upgrade from version {from} failed: {reason}")]
    Upgrade {
        /// Document key.
        key: &'static str,
        /// Version the failing step started from.
        from: u32,
        /// What was wrong with the data.
        reason: String,
    },
}

/// A value persisted under a fixed key with a schema version.
pub trait ConfigDocument: Serialize + DeserializeOwned {
    /// Store key.
    const KEY: &'static str;
    /// Schema version written by this build.
    const VERSION: u32;

    /// Lifts raw data from version `from` to `from + 1`.
    ///
    /// The default keeps the data unchanged, for bumps that only add
    /// defaulted fields.
    fn upgrade(from: u32, data: Value) -> Result<Value, ConfigError> {
        let _ = from;
        Ok(data)
    }
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    version: u32,
    data: &'a T,
}

/// Splits a stored blob into `(version, data)`; bare blobs are version 0.
fn split_envelope(value: Value) -> (u32, Value) {
    match value {
        Value::Object(mut map) if map.len() == 2 && map.contains_key("data") => {
            let Some(version) = map.get("version").and_then(Value::as_u64) else {
                return (0, Value::Object(map));
            };
            let data = map.remove("data").unwrap_or(Value::Null);
            (u32::try_from(version).unwrap_or(u32::MAX), data)
        }
        other => (0, other),
    }
}

/// Reads and writes [`ConfigDocument`]s through a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Loads `D`, upgrading older blobs. Returns `Ok(None)` if missing or
    /// empty.
    pub fn load<D>(&self) -> Result<Option<D>, ConfigError>
    where
        D: ConfigDocument,
    {
        let bytes = match self.store.load_raw(D::KEY) {
            Ok(bytes) => bytes,
            Err(ConfigError::NotFound) => {
                debug!(key = D::KEY, "config blob missing");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        if bytes.is_empty() {
            debug!(key = D::KEY, "config blob empty");
            return Ok(None);
        }

        let (version, mut data) = split_envelope(serde_json::from_slice(&bytes)?);
        if version > D::VERSION {
            return Err(ConfigError::UnsupportedVersion {
                key: D::KEY,
                found: version,
                supported: D::VERSION,
            });
        }
        for from in version..D::VERSION {
            debug!(key = D::KEY, from, "upgrading config document");
            data = D::upgrade(from, data)?;
        }
        Ok(Some(serde_json::from_value(data)?))
    }

    /// Persists `doc` at the current version.
    pub fn save<D>(&self, doc: &D) -> Result<(), ConfigError>
    where
        D: ConfigDocument,
    {
        let envelope = Envelope {
            version: D::VERSION,
            data: doc,
        };
        let data = serde_json::to_vec_pretty(&envelope)?;
        debug!(key = D::KEY, version = D::VERSION, bytes = data.len(), "saving config document");
        self.store.save_raw(D::KEY, &data)
    }
}
