//! Application state for the leave engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::ConfigLoader;
use crate::store::InMemoryStore;

/// Shared application state.
///
/// Holds the loaded configuration and the employee store. Handlers take the
/// store lock only for the duration of one repository call.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<RwLock<InMemoryStore>>,
}

impl AppState {
    /// Creates a new application state with an empty store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_store(config, InMemoryStore::new())
    }

    /// Creates a new application state around an already populated store.
    pub fn with_store(config: ConfigLoader, store: InMemoryStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared employee store.
    pub fn store(&self) -> &RwLock<InMemoryStore> {
        &self.store
    }
}
