//! veil-web - web shell that mounts the modal dialog demo
//!
//! Renders a single page: a trigger button and, while open, the modal
//! dialog. All dialog state and side effects live in `veil_ui`; this
//! crate only supplies the fixed trigger label and content.

use dioxus::prelude::*;
use veil_ui::{use_dialog, Button, ButtonSize, ButtonVariant, ModalView};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let dialog = use_dialog();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen flex items-center justify-center",
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                onclick: move |_| dialog.open(),
                "Open modal"
            }
            if dialog.is_open() {
                ModalView {
                    title: "Modal open",
                    on_close: move |_| dialog.close(),
                    p { "This content is supplied by the page embedding the dialog." }
                }
            }
        }
    }
}
