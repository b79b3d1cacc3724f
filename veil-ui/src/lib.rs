//! veil-ui - UI components for the veil modal demo
//!
//! Contains the dialog state store, the pure view components, and the
//! browser interop that keeps page scrolling and the Escape-key
//! subscription in lockstep with the dialog's open state.

pub mod components;
pub mod scroll_lock;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
