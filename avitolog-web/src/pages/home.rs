use crate::api::ApiClient;
use crate::import_controller::use_import_controller;
use crate::Route;
use avitolog_common::error_message;
use avitolog_ui::stores::{PopularFeedState, POPULAR_PAGE_SIZE};
use avitolog_ui::{ImportFormView, PopularFeedView};
use dioxus::prelude::*;
use tracing::warn;

/// Fetch the next popular page unless one is loading or the feed is exhausted.
fn load_popular_page(api: ApiClient, mut feed: Store<PopularFeedState>) {
    let offset = {
        let state = feed.read();
        match state.pending_offset() {
            Some(offset) if !state.loading => offset,
            _ => return,
        }
    };
    feed.write().loading = true;

    spawn(async move {
        match api.popular_ads(POPULAR_PAGE_SIZE, offset).await {
            Ok(page) => feed.write().append_page(page.items, page.next_offset),
            Err(failure) => {
                warn!("Failed to load popular ads: {}", failure);
                let mut state = feed.write();
                state.loading = false;
                state.error = Some(error_message(&failure));
            }
        }
    });
}

/// Landing page: import form and the popular feed
#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiClient>();
    let controller = use_import_controller();
    let mut url = use_signal(String::new);
    let feed = use_store(PopularFeedState::default);

    use_hook({
        let api = api.clone();
        move || load_popular_page(api, feed)
    });

    rsx! {
        div { class: "flex flex-col gap-8",
            ImportFormView {
                url: url(),
                busy: controller.is_busy(),
                cooldown_remaining: controller.cooldown_remaining(),
                error: controller.error_message(),
                on_url_change: move |value: String| url.set(value),
                on_submit: move |_| controller.submit(&url.read()),
                on_cancel: move |_| controller.stop(),
            }
            PopularFeedView {
                state: feed,
                on_ad_click: move |id: u64| {
                    navigator().push(Route::Ad { id });
                },
                on_load_more: move |_| load_popular_page(api.clone(), feed),
            }
        }
    }
}
