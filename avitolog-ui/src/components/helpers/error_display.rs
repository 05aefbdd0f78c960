//! Error display component

use dioxus::prelude::*;

/// Inline error box, announced to screen readers
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-900/60 border border-red-700 text-red-100 px-4 py-3 rounded my-2",
            role: "alert",
            p { "{message}" }
        }
    }
}
