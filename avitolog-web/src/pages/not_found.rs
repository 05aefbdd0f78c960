use crate::Route;
use avitolog_ui::NotFoundView;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    debug!("No route for /{}", segments.join("/"));

    rsx! {
        NotFoundView {
            on_home_click: move |_| {
                navigator().push(Route::Home {});
            },
        }
    }
}
