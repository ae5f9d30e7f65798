//! Structured logging with request context.
//!
//! Every log line carries the request id (and schema name once known) so
//! validation outcomes can be correlated with the caller's request.

pub mod structured;

pub use structured::*;
