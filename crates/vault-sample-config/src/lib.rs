//! Settings for the sample plugin and the host-provided storage they live in.
//!
//! The plugin owns a [`Settings`] value. It is loaded once when the plugin
//! starts (persisted fields layered over [`Settings::default`]) and written
//! back only through an explicit [`Settings::save`] call.

mod store;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub use store::{DataStore, FileStore, MemoryStore};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read plugin data at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write plugin data at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse plugin data from {location}: {source}")]
    Parse {
        location: String,
        source: toml::de::Error,
    },

    #[error("Failed to serialize plugin data: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// User-facing settings of the sample plugin.
///
/// Missing fields in persisted data fall back to their defaults, so older or
/// partial data files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub my_setting: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            my_setting: "default".to_string(),
        }
    }
}

impl Settings {
    /// Merge the persisted data in `store` over the defaults.
    pub fn load(store: &dyn DataStore) -> Result<Self, StoreError> {
        let Some(content) = store.load_data()? else {
            log::debug!("No plugin data at {}, using defaults", store.location());
            return Ok(Self::default());
        };

        toml::from_str(&content).map_err(|source| StoreError::Parse {
            location: store.location(),
            source,
        })
    }

    /// Persist the whole settings value.
    pub fn save(&self, store: &mut dyn DataStore) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(self)?;
        store.save_data(&content)?;
        log::debug!("Saved plugin data to {}", store.location());
        Ok(())
    }
}
