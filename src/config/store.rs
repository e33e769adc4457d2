//! Thread-safe configuration storage.
//!
//! Provides a simple in-memory config container with interior mutability.
//! CLI overrides are applied once at startup through [`ConfigStore::update`].

use std::sync::{Arc, RwLock};

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
}

impl ConfigStore {
    /// Create a new ConfigStore from an initial config.
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Get a clone of the current config.
    pub fn get(&self) -> Config {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Apply `f` to the stored config and validate the result.
    ///
    /// On validation failure the previous config is kept.
    pub fn update<F: FnOnce(&mut Config)>(&self, f: F) -> Result<(), ConfigError> {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        let mut guard = match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = candidate;
        Ok(())
    }
}
