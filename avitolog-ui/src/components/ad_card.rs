//! Compact listing card used in feeds and profile lists

use crate::components::utils::{format_price_rub, format_rating};
use crate::display_types::AdSummary;
use dioxus::prelude::*;

#[component]
pub fn AdCard(
    ad: AdSummary,
    /// Optional caption under the stats (e.g. when it was viewed)
    #[props(default)]
    caption: Option<String>,
    on_click: EventHandler<u64>,
) -> Element {
    let id = ad.id;
    let price = format_price_rub(ad.price);
    let rating = format_rating(ad.avg_rating);

    rsx! {
        div {
            class: "flex gap-4 p-3 rounded-lg bg-gray-800/40 hover:bg-gray-800 cursor-pointer",
            onclick: move |_| on_click.call(id),
            div { class: "w-24 h-24 flex-shrink-0 rounded bg-gray-700 overflow-hidden",
                if let Some(src) = ad.photos.first() {
                    img { class: "w-full h-full object-cover", src: "{src}", alt: "" }
                }
            }
            div { class: "flex flex-col min-w-0",
                span { class: "text-white font-medium truncate", "{ad.title}" }
                span { class: "text-indigo-300", "{price}" }
                div { class: "flex gap-3 text-sm text-gray-400 mt-1",
                    span { title: "Rating", "★ {rating}" }
                    span { title: "Views", "👁 {ad.views_count}" }
                    span { title: "Comments", "💬 {ad.comments_count}" }
                    span { title: "Likes", "❤ {ad.likes_count}" }
                }
                if let Some(caption) = caption {
                    span { class: "text-xs text-gray-500 mt-1", "{caption}" }
                }
            }
        }
    }
}

/// Vertical list of cards with an empty-state message
#[component]
pub fn AdList(
    ads: Vec<AdSummary>,
    empty_message: &'static str,
    on_ad_click: EventHandler<u64>,
) -> Element {
    rsx! {
        if ads.is_empty() {
            p { class: "text-gray-500 py-4", "{empty_message}" }
        } else {
            div { class: "flex flex-col gap-2",
                for ad in ads.iter() {
                    AdCard { key: "{ad.id}", ad: ad.clone(), on_click: on_ad_click }
                }
            }
        }
    }
}
