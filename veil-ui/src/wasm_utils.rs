//! Browser interop utilities
//!
//! Attaching a JavaScript event listener from Rust means keeping the
//! `Closure` alive for as long as the listener is registered. The naive
//! way out is `Closure::forget()`, which leaks the closure and leaves
//! the listener attached forever. Instead, the listener below owns its
//! closure and removes itself on `Drop`, so the subscription's lifetime
//! follows Rust ownership:
//!
//! ```ignore
//! // Attached on construction
//! let listener = WindowEventListener::new(window, "keydown", callback);
//!
//! // Detached when the value is dropped
//! drop(listener);
//! ```
//!
//! Parked in a `Signal<Option<WindowEventListener>>`, setting the slot
//! to `None` is all it takes to unsubscribe.

use wasm_bindgen::prelude::*;

/// A `window` event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl WindowEventListener {
    /// Attaches a listener for `event_name` on `window`.
    ///
    /// The listener stays registered until the returned value is
    /// dropped.
    pub fn new(
        window: web_sys::Window,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
