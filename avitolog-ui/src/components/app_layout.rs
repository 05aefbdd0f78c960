//! App layout view component
//!
//! Header with logo and navigation, the routed page in the middle, and a
//! footer. Navigation is reported through callbacks so the view stays free of
//! router types.

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

pub const SITE_NAME: &str = "Avitolog";

/// Navigation entry in the header
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub is_active: bool,
}

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    nav_items: Vec<NavItem>,
    /// Shows "Log out" instead of "Log in"
    is_authenticated: bool,
    /// Year shown in the footer
    year: i32,
    on_nav_click: EventHandler<&'static str>,
    on_logout: EventHandler<()>,
    /// Main content (typically the router outlet)
    children: Element,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-gray-900 text-gray-200",
            header { class: "border-b border-white/5",
                div { class: "container mx-auto px-4 h-14 flex items-center justify-between",
                    a {
                        class: "text-lg font-bold text-white cursor-pointer",
                        aria_label: "{SITE_NAME}: home",
                        onclick: move |_| on_nav_click.call("home"),
                        "{SITE_NAME}"
                    }
                    nav { class: "flex items-center gap-1",
                        for item in nav_items {
                            Button {
                                key: "{item.id}",
                                variant: if item.is_active { ButtonVariant::Secondary } else { ButtonVariant::Ghost },
                                size: ButtonSize::Small,
                                onclick: move |_| on_nav_click.call(item.id),
                                "{item.label}"
                            }
                        }
                        if is_authenticated {
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Small,
                                onclick: move |_| on_logout.call(()),
                                "Log out"
                            }
                        } else {
                            Button {
                                variant: ButtonVariant::Ghost,
                                size: ButtonSize::Small,
                                onclick: move |_| on_nav_click.call("login"),
                                "Log in"
                            }
                        }
                    }
                }
            }
            main { class: "flex-1",
                div { class: "container mx-auto px-4 py-8", {children} }
            }
            footer { class: "border-t border-white/5",
                div { class: "container mx-auto px-4 py-4 flex justify-between text-sm text-gray-500",
                    span { "© {year} {SITE_NAME}" }
                    span { "Discuss Avito listings" }
                }
            }
        }
    }
}
