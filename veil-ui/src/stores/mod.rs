//! Store types for UI state
//!
//! Plain state structs with their transition logic; components hold them
//! in signals and render from whatever the last transition left behind.

pub mod dialog;

pub use dialog::*;
