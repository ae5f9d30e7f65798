//! Schema definitions and the named schema registry.
//!
//! - `descriptor` - per-field constraint sum type
//! - `definition` - ordered schema of field rules
//! - `registry` - named, freezable schema table (plus the process-wide one)
//! - `builtin` - plugin schemas shipped with the crate
//! - `loader` - startup population from JSON files

pub mod builtin;
pub mod definition;
pub mod descriptor;
pub mod loader;
pub mod registry;

pub use builtin::*;
pub use definition::*;
pub use descriptor::*;
pub use loader::*;
pub use registry::*;
