//! Load/save of the configuration record under the fixed storage key

use tracing::{debug, warn};

use super::settings::Config;
use super::storage::{Storage, StorageError};
use crate::constants::storage::CONFIG_KEY;

pub struct ConfigStore<S: Storage> {
    storage: S,
}

impl<S: Storage> ConfigStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored record, or a fresh default when nothing usable is stored
    ///
    /// No field-level repair: a record that fails to decode in any way is
    /// replaced by the default as a whole.
    pub fn load(&self) -> Config {
        let Some(contents) = self.storage.get(CONFIG_KEY) else {
            debug!(key = CONFIG_KEY, "No stored config, using defaults");
            return Config::default();
        };

        match serde_json::from_str::<Config>(&contents) {
            Ok(config) => {
                debug!(key = CONFIG_KEY, theme = %config.theme.name(), "Loaded stored config");
                config
            }
            Err(e) => {
                warn!(key = CONFIG_KEY, error = %e, "Stored config is malformed, using defaults");
                Config::default()
            }
        }
    }

    /// Best-effort overwrite of the stored record; failures are only logged
    pub fn save(&mut self, config: &Config) {
        if let Err(e) = self.write(config) {
            warn!(key = CONFIG_KEY, error = %e, "Failed to persist config");
        }
    }

    fn write(&mut self, config: &Config) -> Result<(), StorageError> {
        let json = serde_json::to_string(config)?;
        self.storage.set(CONFIG_KEY, &json)
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
