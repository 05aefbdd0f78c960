//! 404 page

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

#[component]
pub fn NotFoundView(on_home_click: EventHandler<()>) -> Element {
    rsx! {
        section { class: "text-center py-16",
            h1 { class: "text-3xl font-bold text-white mb-2", "404: page not found" }
            p { class: "text-gray-400 mb-6",
                "This page does not exist or has been moved."
            }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                onclick: move |_| on_home_click.call(()),
                "Go home"
            }
        }
    }
}
