//! Popular listings feed under the import form

use crate::components::ad_card::AdList;
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::stores::home::{PopularFeedState, PopularFeedStateStoreExt};
use dioxus::prelude::*;

#[component]
pub fn PopularFeedView(
    state: ReadStore<PopularFeedState>,
    on_ad_click: EventHandler<u64>,
    on_load_more: EventHandler<()>,
) -> Element {
    let items = state.items().read().clone();
    let loading = *state.loading().read();
    let loaded = *state.loaded().read();
    let has_more = state.next_offset().read().is_some();
    let error = state.error().read().clone();

    rsx! {
        section { class: "mt-8",
            h2 { class: "text-xl font-semibold text-white mb-4", "Popular" }
            if loaded {
                AdList {
                    ads: items,
                    empty_message: "No listings yet. Import the first one!",
                    on_ad_click,
                }
            }
            if let Some(message) = error {
                ErrorDisplay { message }
            }
            if loading {
                LoadingSpinner {}
            } else if has_more {
                div { class: "flex justify-center mt-4",
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Medium,
                        onclick: move |_| on_load_more.call(()),
                        "Show more"
                    }
                }
            }
        }
    }
}
