//! Save/load of the persisted subset of a session.

use log::debug;
use serde::{Deserialize, Serialize};

use super::store::KeyValueStore;
use crate::core::PersistenceError;
use crate::entity::{Enemy, Player};

/// Blob encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveFormat {
    /// Human-readable, serde_json.
    #[default]
    Json,
    /// Compact, bincode.
    Binary,
}

/// What survives a reload: the player and the current enemy.
///
/// Hand, round flags and room counter are not persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveState {
    pub player: Option<Player>,
    pub enemy: Option<Enemy>,
}

impl SaveState {
    #[must_use]
    pub fn new(player: Option<Player>, enemy: Option<Enemy>) -> Self {
        Self { player, enemy }
    }

    pub fn encode(&self, format: SaveFormat) -> Result<Vec<u8>, PersistenceError> {
        match format {
            SaveFormat::Json => serde_json::to_vec(self).map_err(|e| PersistenceError::Encode(e.to_string())),
            SaveFormat::Binary => bincode::serialize(self).map_err(|e| PersistenceError::Encode(e.to_string())),
        }
    }

    pub fn decode(bytes: &[u8], format: SaveFormat) -> Result<Self, PersistenceError> {
        match format {
            SaveFormat::Json => serde_json::from_slice(bytes).map_err(|e| PersistenceError::Decode(e.to_string())),
            SaveFormat::Binary => bincode::deserialize(bytes).map_err(|e| PersistenceError::Decode(e.to_string())),
        }
    }
}

/// Reads and writes one `SaveState` under a fixed key.
#[derive(Clone, Debug)]
pub struct SaveGateway<S> {
    store: S,
    key: String,
    format: SaveFormat,
}

impl<S: KeyValueStore> SaveGateway<S> {
    pub fn new(store: S, key: impl Into<String>, format: SaveFormat) -> Self {
        Self {
            store,
            key: key.into(),
            format,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn format(&self) -> SaveFormat {
        self.format
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Overwrite the stored blob.
    pub fn save(&mut self, state: &SaveState) -> Result<(), PersistenceError> {
        let blob = state.encode(self.format)?;
        self.store.put(&self.key, &blob)?;
        debug!("saved {} bytes under `{}`", blob.len(), self.key);
        Ok(())
    }

    /// `Ok(None)` when nothing has been saved.
    pub fn load(&self) -> Result<Option<SaveState>, PersistenceError> {
        match self.store.get(&self.key)? {
            Some(blob) => SaveState::decode(&blob, self.format).map(Some),
            None => Ok(None),
        }
    }

    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.store.remove(&self.key)
    }
}
