//! Startup loading of the process-wide registry.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::builtin::install_builtin_schemas;
use super::registry::{global_registry_mut, SchemaRegistry};

/// Register every schema defined in a JSON file.
///
/// The file holds `{ "<schema name>": { "<field>": <descriptor>, ... }, ... }`.
pub fn load_schema_file(registry: &mut SchemaRegistry, path: &Path) -> Result<usize> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading schema file {}", path.display()))?;

    let loaded = registry
        .load_definitions(&contents)
        .with_context(|| format!("loading schemas from {}", path.display()))?;

    log::info!(
        "SCHEMA_FILE_LOADED path={} schemas={}",
        path.display(),
        loaded
    );
    Ok(loaded)
}

/// Build a frozen registry holding the built-in schemas plus any schemas
/// from `schema_file`.
pub fn build_registry(schema_file: Option<&Path>) -> Result<SchemaRegistry> {
    populate(SchemaRegistry::new(), schema_file)
}

fn populate(mut registry: SchemaRegistry, schema_file: Option<&Path>) -> Result<SchemaRegistry> {
    install_builtin_schemas(&mut registry).context("installing built-in schemas")?;
    if let Some(path) = schema_file {
        load_schema_file(&mut registry, path)?;
    }
    registry.freeze();
    Ok(registry)
}

/// Populate and freeze the process-wide registry.
///
/// Work happens on a copy that is swapped in only when complete, so a failed
/// load leaves the global untouched and the call can be retried. Schemas
/// registered before this call are kept.
/// Calling again after the registry is frozen is a no-op.
pub fn init_global_registry(schema_file: Option<&Path>) -> Result<()> {
    let mut registry = global_registry_mut();
    if registry.is_frozen() {
        log::debug!("SCHEMA_REGISTRY_INIT_SKIPPED reason=already_frozen");
        return Ok(());
    }

    let built = populate(registry.clone(), schema_file).map_err(|e| {
        log::error!("SCHEMA_REGISTRY_INIT_FAILED error={:#}", e);
        e
    })?;
    *registry = built;
    Ok(())
}
