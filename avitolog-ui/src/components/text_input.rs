//! Text input and text area with shared styling

use dioxus::prelude::*;

const FIELD_CLASS: &str = "w-full bg-gray-800/50 rounded-lg px-3 py-2 focus:outline-none focus:ring-1 focus:ring-indigo-500/50 text-gray-200 placeholder-gray-500";

/// Single-line input. `on_enter` fires on the Enter key.
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] aria_label: Option<&'static str>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] on_enter: Option<EventHandler<()>>,
) -> Element {
    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    rsx! {
        input {
            r#type: input_type,
            class: "{FIELD_CLASS} {disabled_class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder,
            aria_label,
            disabled,
            oninput: move |e| on_input.call(e.value()),
            onkeydown: move |e| {
                if e.key() == Key::Enter {
                    if let Some(handler) = on_enter {
                        handler.call(());
                    }
                }
            },
        }
    }
}

/// Multi-line input for comments and replies
#[component]
pub fn TextArea(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = 3)] rows: u32,
    #[props(default)] placeholder: Option<&'static str>,
    #[props(default)] id: Option<String>,
    #[props(default)] disabled: bool,
) -> Element {
    rsx! {
        textarea {
            class: "{FIELD_CLASS} resize-y",
            id: id.as_deref(),
            rows: "{rows}",
            value: "{value}",
            placeholder,
            disabled,
            oninput: move |e| on_input.call(e.value()),
        }
    }
}
