//! Admin settings glue.
//!
//! The host platform persists settings and renders alerts; this module
//! validates the credential form and talks to the host through
//! [`SettingsStore`].

pub mod alert;
pub mod panel;
pub mod store;

pub use alert::*;
pub use panel::*;
pub use store::*;
