//! Settings persistence seam.
//!
//! The host platform owns real persistence; this crate only talks to it
//! through [`SettingsStore`].

use std::collections::HashMap;

use parking_lot::Mutex;
use serde_json::{Map, Value};

use crate::error::SettingsError;

/// Key-value configuration grouped by namespace.
pub trait SettingsStore: Send + Sync {
    /// Load all values stored under `namespace`. Unknown namespaces are empty.
    fn load(&self, namespace: &str) -> Result<Map<String, Value>, SettingsError>;

    /// Merge `values` into `namespace`.
    fn save(&self, namespace: &str, values: &Map<String, Value>) -> Result<(), SettingsError>;
}

/// In-process settings store.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    namespaces: Mutex<HashMap<String, Map<String, Value>>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self, namespace: &str) -> Result<Map<String, Value>, SettingsError> {
        Ok(self
            .namespaces
            .lock()
            .get(namespace)
            .cloned()
            .unwrap_or_default())
    }

    fn save(&self, namespace: &str, values: &Map<String, Value>) -> Result<(), SettingsError> {
        let mut namespaces = self.namespaces.lock();
        let stored = namespaces.entry(namespace.to_string()).or_default();
        for (key, value) in values {
            stored.insert(key.clone(), value.clone());
        }
        Ok(())
    }
}
