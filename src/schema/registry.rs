//! Named schema registry.
//!
//! Lifecycle: populated once at startup, then frozen. A frozen registry
//! rejects both `register` and `replace`. Tests build their own isolated
//! `SchemaRegistry`; the process-wide instance lives behind
//! [`global_registry`].

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use regex::Regex;

use crate::error::{RegistryError, RegistryResult};

use super::definition::{Schema, SchemaDocument};

lazy_static! {
    /// Schema names: lowercase, start with a letter, then `[a-z0-9_-]`.
    static ref SCHEMA_NAME_PATTERN: Regex = Regex::new(r"^[a-z][a-z0-9_-]*$").unwrap();
}

#[derive(Debug, Clone)]
struct RegistryEntry {
    schema: Arc<Schema>,
    fingerprint: String,
}

/// In-memory table of named schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: HashMap<String, RegistryEntry>,
    order: Vec<String>,
    frozen: bool,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Add a schema under a new name.
    pub fn register(&mut self, name: &str, schema: Schema) -> RegistryResult<()> {
        self.ensure_writable(name)?;
        if self.entries.contains_key(name) {
            log::warn!("SCHEMA_REJECTED name={} reason=duplicate", name);
            return Err(RegistryError::DuplicateSchema(name.to_string()));
        }

        let entry = Self::prepare(name, schema)?;
        log::info!(
            "SCHEMA_REGISTERED name={} fields={} fingerprint={}",
            name,
            entry.schema.len(),
            &entry.fingerprint[..12]
        );
        self.order.push(name.to_string());
        self.entries.insert(name.to_string(), entry);
        Ok(())
    }

    /// Explicitly overwrite a schema, or add it if absent.
    pub fn replace(&mut self, name: &str, schema: Schema) -> RegistryResult<()> {
        self.ensure_writable(name)?;

        let entry = Self::prepare(name, schema)?;
        match self.entries.insert(name.to_string(), entry) {
            Some(previous) => {
                log::info!(
                    "SCHEMA_REPLACED name={} old_fingerprint={} new_fingerprint={}",
                    name,
                    &previous.fingerprint[..12],
                    &self.entries[name].fingerprint[..12]
                );
            }
            None => {
                log::info!("SCHEMA_REGISTERED name={} via=replace", name);
                self.order.push(name.to_string());
            }
        }
        Ok(())
    }

    /// Parse a JSON schema definition and register it.
    pub fn register_json(&mut self, name: &str, json: &str) -> RegistryResult<()> {
        let schema = Schema::from_json(json).map_err(|e| {
            log::warn!("SCHEMA_REJECTED name={} reason=parse error={}", name, e);
            RegistryError::malformed(name, e.to_string())
        })?;
        self.register(name, schema)
    }

    /// Register every schema in a `{ "<name>": { <fields> }, ... }` document.
    ///
    /// All or nothing: on any failure (including a name repeated within the
    /// document) the registry is left unchanged.
    pub fn load_definitions(&mut self, json: &str) -> RegistryResult<usize> {
        let document = SchemaDocument::from_json(json).map_err(|e| {
            log::warn!("SCHEMA_REJECTED name=<document> reason=parse error={}", e);
            RegistryError::malformed("<document>", e.to_string())
        })?;

        let mut staged = self.clone();
        let loaded = document.entries.len();
        for (name, schema) in document.entries {
            staged.register(&name, schema)?;
        }

        *self = staged;
        Ok(loaded)
    }

    pub fn get(&self, name: &str) -> RegistryResult<Arc<Schema>> {
        self.entries
            .get(name)
            .map(|entry| Arc::clone(&entry.schema))
            .ok_or_else(|| RegistryError::UnknownSchema(name.to_string()))
    }

    pub fn fingerprint(&self, name: &str) -> RegistryResult<&str> {
        self.entries
            .get(name)
            .map(|entry| entry.fingerprint.as_str())
            .ok_or_else(|| RegistryError::UnknownSchema(name.to_string()))
    }

    /// Make the registry read-only for the rest of its life.
    pub fn freeze(&mut self) {
        if !self.frozen {
            self.frozen = true;
            log::info!("SCHEMA_REGISTRY_FROZEN schemas={:?}", self.order);
        }
    }

    fn ensure_writable(&self, name: &str) -> RegistryResult<()> {
        if self.frozen {
            log::warn!("SCHEMA_REJECTED name={} reason=frozen", name);
            return Err(RegistryError::Frozen(name.to_string()));
        }
        Ok(())
    }

    fn prepare(name: &str, schema: Schema) -> RegistryResult<RegistryEntry> {
        if !SCHEMA_NAME_PATTERN.is_match(name) {
            log::warn!("SCHEMA_REJECTED name={:?} reason=invalid_name", name);
            return Err(RegistryError::malformed(
                name,
                "name must match ^[a-z][a-z0-9_-]*$",
            ));
        }

        if let Err(reason) = schema.check_structure() {
            log::warn!("SCHEMA_REJECTED name={} reason={}", name, reason);
            return Err(RegistryError::malformed(name, reason));
        }

        let fingerprint = schema
            .fingerprint()
            .map_err(|e| RegistryError::malformed(name, e.to_string()))?;

        Ok(RegistryEntry {
            schema: Arc::new(schema),
            fingerprint,
        })
    }
}

// Process-wide registry with concurrent readers.
lazy_static! {
    static ref SCHEMA_REGISTRY: RwLock<SchemaRegistry> = RwLock::new(SchemaRegistry::new());
}

/// Read access to the process-wide registry.
pub fn global_registry() -> RwLockReadGuard<'static, SchemaRegistry> {
    SCHEMA_REGISTRY.read()
}

/// Write access to the process-wide registry.
pub fn global_registry_mut() -> RwLockWriteGuard<'static, SchemaRegistry> {
    SCHEMA_REGISTRY.write()
}

/// Register a schema in the process-wide registry.
pub fn register_schema(name: &str, schema: Schema) -> RegistryResult<()> {
    global_registry_mut().register(name, schema)
}

/// Look up a schema in the process-wide registry.
pub fn get_schema(name: &str) -> RegistryResult<Arc<Schema>> {
    global_registry().get(name)
}
