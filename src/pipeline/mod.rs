//! Batch validation pipeline.
//!
//! Validates many JSON payloads against one schema and reports per-record
//! outcomes plus accepted/rejected counts.

pub mod batch;
pub mod context;

pub use batch::*;
pub use context::*;
