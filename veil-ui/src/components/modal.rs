//! Modal dialog component and its lifecycle hook
//!
//! Two pieces, mirroring how the dialog is wired into a page:
//! - **`use_dialog()`**: hook returning a `DialogHandle` that owns the
//!   open/closed flag. While the dialog is open it holds the body scroll
//!   lock and a window `keydown` subscription; both are released when
//!   the dialog closes or the owning view unmounts.
//! - **`ModalView`**: pure overlay + panel view. Every dismissal gesture
//!   (overlay click, close button) calls the supplied `on_close`.

use dioxus::core::Task;
use dioxus::prelude::*;
use futures::StreamExt;
use wasm_bindgen::JsCast;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::scroll_lock::{DocumentScrollArea, ScrollLockGuard};
use crate::stores::dialog::DialogState;
use crate::wasm_utils::WindowEventListener;

/// Handle for opening and closing the dialog.
///
/// Created by `use_dialog()`. `Copy`, so it can be moved into any number
/// of event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct DialogHandle {
    state: Signal<DialogState>,
}

impl DialogHandle {
    /// Whether the dialog is currently open.
    pub fn is_open(&self) -> bool {
        self.state.read().is_open
    }

    /// Open the dialog. No-op when already open.
    pub fn open(&self) {
        let mut state = self.state;
        state.write().open();
    }

    /// Close the dialog. No-op when already closed.
    pub fn close(&self) {
        let mut state = self.state;
        state.write().close();
    }
}

/// Hook that owns the dialog state and its side effects.
///
/// An effect keeps two scoped resources in lockstep with the open flag:
/// the body scroll lock and the window `keydown` subscription. Each is
/// engaged once per transition into the open state (a filled slot is
/// left alone, so the concurrent registration count never exceeds one)
/// and dropped once per transition out of it. `use_drop` clears the
/// slots again at unmount, covering a teardown while the dialog is
/// still open.
pub fn use_dialog() -> DialogHandle {
    let state = use_signal(DialogState::default);
    let mut scroll_lock = use_signal(|| None::<ScrollLockGuard<DocumentScrollArea>>);
    let mut keydown_listener = use_signal(|| None::<WindowEventListener>);
    let mut keydown_task = use_signal(|| None::<Task>);

    use_effect(move || {
        let is_open = state.read().is_open;

        if !is_open {
            keydown_listener.set(None);
            if let Some(task) = keydown_task.write().take() {
                task.cancel();
            }
            scroll_lock.set(None);
            return;
        }

        if scroll_lock.peek().is_none() {
            scroll_lock.set(Some(ScrollLockGuard::acquire(DocumentScrollArea)));
        }

        if keydown_listener.peek().is_none() {
            let Some(window) = web_sys::window() else {
                return;
            };

            // The DOM callback runs outside the Dioxus runtime, so it only
            // forwards the key identity over a channel; the task below
            // applies it to the current state.
            let (tx, mut rx) = futures::channel::mpsc::unbounded::<String>();
            let listener = WindowEventListener::new(window, "keydown", move |evt| {
                let key = evt.unchecked_into::<web_sys::KeyboardEvent>().key();
                let _ = tx.unbounded_send(key);
            });

            let mut state = state;
            let task = spawn(async move {
                while let Some(key) = rx.next().await {
                    state.write().close_on_key(&key);
                }
            });

            keydown_listener.set(Some(listener));
            keydown_task.set(Some(task));
        }
    });

    use_drop(move || {
        if let Some(task) = keydown_task.write().take() {
            task.cancel();
        }
        drop(keydown_listener.write().take());
        drop(scroll_lock.write().take());
    });

    DialogHandle { state }
}

/// Modal dialog view - overlay with a centered content panel.
///
/// Purely presentational: mounting is controlled by the caller, and the
/// panel content is rendered verbatim. Clicks inside the panel are
/// stopped from propagating to the overlay, so interacting with the
/// content never dismisses the dialog.
#[component]
pub fn ModalView(
    /// Heading shown at the top of the panel
    title: String,
    /// Called when the overlay or the close button asks to dismiss
    on_close: EventHandler<()>,
    /// Panel content, rendered below the heading
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),

            div {
                class: "bg-white rounded-lg shadow-lg p-6 max-w-lg w-full mx-4 relative",
                onclick: move |evt| evt.stop_propagation(),
                role: "dialog",
                aria_labelledby: "modal-title",
                aria_hidden: "false",

                h1 { id: "modal-title", class: "text-lg font-bold pb-2", "{title}" }
                {children}
                div { class: "mt-4",
                    Button {
                        variant: ButtonVariant::Danger,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
