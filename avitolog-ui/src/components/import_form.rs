//! Import form on the landing page
//!
//! Pure view over the import workflow: the page owns the controller and
//! passes its state down.

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::ErrorDisplay;
use crate::components::text_input::TextInput;
use dioxus::prelude::*;

/// URL input, submit button, cooldown notice and error
#[component]
pub fn ImportFormView(
    url: String,
    /// A creation request or poll is outstanding
    busy: bool,
    /// Seconds until submission is allowed again
    cooldown_remaining: u32,
    error: Option<String>,
    on_url_change: EventHandler<String>,
    on_submit: EventHandler<()>,
    /// Abandon the outstanding import
    on_cancel: EventHandler<()>,
) -> Element {
    let cooling_down = cooldown_remaining > 0;
    let disabled = busy || cooling_down;

    rsx! {
        div { class: "bg-gray-800/40 rounded-xl p-6",
            h1 { class: "text-3xl font-bold text-white mb-2", "Discuss Avito listings" }
            p { class: "text-gray-400 mb-4",
                "Paste a link to a listing to start a discussion."
            }
            div { class: "flex flex-col sm:flex-row gap-2",
                div { class: "flex-1",
                    TextInput {
                        value: url,
                        on_input: on_url_change,
                        placeholder: "https://www.avito.ru/…",
                        aria_label: "Link to an Avito listing",
                        disabled: busy,
                        on_enter: move |_| {
                            if !disabled {
                                on_submit.call(());
                            }
                        },
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    disabled,
                    loading: busy,
                    onclick: move |_| on_submit.call(()),
                    if busy {
                        "Importing…"
                    } else {
                        "Start discussion"
                    }
                }
                if busy {
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
            if cooling_down {
                p { class: "text-sm text-amber-400 mt-3", role: "status",
                    "Too many imports. You can try again in {cooldown_remaining} s."
                }
            }
            if let Some(message) = error {
                ErrorDisplay { message }
            }
        }
    }
}
