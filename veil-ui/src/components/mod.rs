//! Shared UI components

pub mod button;
pub mod modal;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use modal::{use_dialog, DialogHandle, ModalView};
