//! fieldcheck-core - schema-driven record validation
//!
//! Checks untyped JSON records submitted to the communities plugin against
//! declared schemas, and reports every violation in one deterministic pass.
//! The implementation prioritizes:
//!
//! 1. **Determinism** - identical (schema, record) pairs give identical results
//! 2. **Logging** - every decision point logged with request context
//! 3. **Fail-fast schemas** - malformed definitions are rejected at registration
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `schema` - constraint descriptors, schemas, the named registry
//! - `validation` - the validator and its result types
//! - `pipeline` - batch validation of raw JSON payloads
//! - `settings` - admin credential panel over a host settings store
//! - `config` - validator configuration (unknown-field policy)
//! - `logging` - structured logging with request context
//!
//! ## Example
//!
//! ```
//! use fieldcheck_core::schema::{community_schema, SchemaRegistry, install_builtin_schemas};
//! use fieldcheck_core::validation::{validate, ErrorKind};
//! use serde_json::json;
//!
//! let mut registry = SchemaRegistry::new();
//! install_builtin_schemas(&mut registry).unwrap();
//! registry.freeze();
//!
//! let schema = registry.get("community").unwrap();
//! let record = json!({"name": "Go"}).as_object().cloned().unwrap();
//! let result = validate(&schema, &record);
//!
//! assert!(!result.valid);
//! assert!(result.has_error("name", ErrorKind::MinLength));
//! assert_eq!(*schema, community_schema());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod schema;
pub mod settings;
pub mod validation;

pub use config::{UnknownFieldPolicy, ValidatorConfig};
pub use error::{RegistryError, SettingsError};
pub use logging::structured::{init_logger, LogContext};
pub use schema::{
    get_schema, global_registry, global_registry_mut, init_global_registry, register_schema,
    ConstraintDescriptor, Schema, SchemaRegistry,
};
pub use validation::{
    validate, validate_named, validate_with, ErrorKind, FieldError, Record, ValidationResult,
};
