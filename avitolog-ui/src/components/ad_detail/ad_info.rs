//! Listing header: gallery, price, stats, rating and favorite controls

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::ErrorDisplay;
use crate::components::utils::{format_price_rub, format_rating};
use crate::display_types::AdDetail;
use dioxus::prelude::*;

/// Ratings users can give
pub const RATING_VALUES: [u8; 5] = [1, 2, 3, 4, 5];

/// Row of 1-5 rating buttons
#[component]
pub fn RatingBar(pending: bool, on_rate: EventHandler<u8>) -> Element {
    rsx! {
        div { class: "flex gap-1", aria_label: "Rating",
            for value in RATING_VALUES {
                Button {
                    key: "{value}",
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    disabled: pending,
                    aria_label: format!("Rate {value}"),
                    onclick: move |_| on_rate.call(value),
                    "{value}"
                }
            }
        }
    }
}

#[component]
pub fn AdInfoView(
    ad: AdDetail,
    /// `None` while unknown
    favorite: Option<bool>,
    favorite_pending: bool,
    favorite_error: Option<String>,
    rating_pending: bool,
    rating_error: Option<String>,
    on_rate: EventHandler<u8>,
    on_toggle_favorite: EventHandler<()>,
) -> Element {
    let price = format_price_rub(ad.price);
    let rating = format_rating(ad.avg_rating);
    let favorite_label = if favorite == Some(true) {
        "★ In favorites"
    } else {
        "☆ Add to favorites"
    };

    rsx! {
        div { class: "grid md:grid-cols-2 gap-6 bg-gray-800/40 rounded-xl p-6",
            div { class: "flex flex-col gap-2",
                if ad.photos.is_empty() {
                    div { class: "aspect-video rounded bg-gray-700" }
                } else {
                    for (i , src) in ad.photos.iter().enumerate() {
                        img {
                            key: "{i}",
                            class: "w-full rounded object-cover",
                            src: "{src}",
                            alt: "",
                        }
                    }
                }
            }
            div { class: "flex flex-col gap-3",
                h1 { class: "text-2xl font-bold text-white", "{ad.title}" }
                if let Some(url) = ad.source_url.as_ref() {
                    a {
                        class: "text-sm text-indigo-300 hover:underline",
                        href: "{url}",
                        target: "_blank",
                        rel: "noreferrer",
                        "Open on Avito ↗"
                    }
                }
                div { class: "text-2xl text-indigo-200", "{price}" }
                div { class: "flex gap-4 text-gray-400",
                    span { title: "Rating", "★ {rating}" }
                    span { title: "Views", "👁 {ad.views_count}" }
                    span { title: "Comments", "💬 {ad.comments_count}" }
                    span { title: "Likes", "❤ {ad.likes_count}" }
                }
                div { class: "flex flex-wrap items-center gap-3",
                    RatingBar { pending: rating_pending, on_rate }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        loading: favorite_pending,
                        onclick: move |_| on_toggle_favorite.call(()),
                        "{favorite_label}"
                    }
                }
                if let Some(message) = rating_error {
                    ErrorDisplay { message }
                }
                if let Some(message) = favorite_error {
                    ErrorDisplay { message }
                }
                p { class: "text-gray-300 whitespace-pre-line", "{ad.description}" }
            }
        }
    }
}
