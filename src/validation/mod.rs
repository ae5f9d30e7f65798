//! Record validation module.
//!
//! Checks untyped JSON records against a [`Schema`](crate::schema::Schema):
//! - `validator` - the per-field checking algorithm
//! - `result` - structured, serializable outcomes
//! - `value` - JSON value inspection helpers

pub mod result;
pub mod validator;
pub mod value;

pub use result::*;
pub use validator::*;
pub use value::*;
