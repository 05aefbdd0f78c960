//! Profile view component - pure rendering, no data fetching

use crate::components::ad_card::{AdCard, AdList};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::segmented_control::{Segment, SegmentedControl};
use crate::components::utils::format_timestamp;
use crate::display_types::{AdSummary, Member};
use crate::stores::profile::{LazyList, ProfileState, ProfileStateStoreExt, ProfileTab};
use dioxus::prelude::*;

/// Shown to visitors without a session
#[component]
pub fn ProfileGuestView(on_login_click: EventHandler<()>, on_register_click: EventHandler<()>) -> Element {
    rsx! {
        section { class: "bg-gray-800/40 rounded-xl p-6",
            h1 { class: "text-2xl font-bold text-white mb-2", "Profile" }
            p { class: "text-gray-400 mb-4", "Log in to see your profile." }
            div { class: "flex gap-2",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_login_click.call(()),
                    "Log in"
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    onclick: move |_| on_register_click.call(()),
                    "Create an account"
                }
            }
        }
    }
}

#[component]
pub fn ProfileView(
    state: ReadStore<ProfileState>,
    on_tab_select: EventHandler<ProfileTab>,
    on_ad_click: EventHandler<u64>,
    on_logout: EventHandler<()>,
) -> Element {
    let active_tab = *state.active_tab().read();
    let loading = *state.loading().read();
    let error = state.error().read().clone();

    let segments: Vec<Segment> = ProfileTab::ALL
        .iter()
        .map(|tab| Segment::new(tab.label(), tab.value()))
        .collect();

    rsx! {
        section { class: "bg-gray-800/40 rounded-xl p-6",
            div { class: "flex justify-between items-center mb-4",
                h1 { class: "text-2xl font-bold text-white", "Profile" }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Small,
                    onclick: move |_| on_logout.call(()),
                    "Log out"
                }
            }
            if loading {
                LoadingSpinner {}
            }
            if let Some(message) = error {
                ErrorDisplay { message }
            }
            SegmentedControl {
                segments,
                selected: active_tab.value(),
                on_select: move |value: &'static str| {
                    if let Some(tab) = ProfileTab::from_value(value) {
                        on_tab_select.call(tab);
                    }
                },
            }
            div { class: "mt-4",
                match active_tab {
                    ProfileTab::Profile => rsx! {
                        MemberPanel { me: state.me().read().clone() }
                    },
                    ProfileTab::MyAds => rsx! {
                        AdListPanel {
                            list: state.my_ads().read().clone(),
                            empty_message: "You have not imported any listings yet.",
                            on_ad_click,
                        }
                    },
                    ProfileTab::Favorites => rsx! {
                        AdListPanel {
                            list: state.favorites().read().clone(),
                            empty_message: "No favorites yet.",
                            on_ad_click,
                        }
                    },
                    ProfileTab::History => rsx! {
                        HistoryPanel { on_ad_click, state }
                    },
                }
            }
        }
    }
}

#[component]
fn MemberPanel(me: Option<Member>) -> Element {
    let Some(me) = me else {
        return rsx! {
            p { class: "text-gray-500", "No profile data." }
        };
    };
    let joined = format_timestamp(me.created_at.as_ref());

    rsx! {
        dl { class: "grid grid-cols-[auto_1fr] gap-x-4 gap-y-2",
            dt { class: "text-gray-500", "Username" }
            dd { class: "text-white", "{me.username}" }
            dt { class: "text-gray-500", "Email" }
            dd { class: "text-white", "{me.email}" }
            dt { class: "text-gray-500", "Joined" }
            dd { class: "text-white", "{joined}" }
        }
    }
}

#[component]
fn AdListPanel(
    list: LazyList<AdSummary>,
    empty_message: &'static str,
    on_ad_click: EventHandler<u64>,
) -> Element {
    match list {
        LazyList::NotLoaded | LazyList::Loading => rsx! {
            LoadingSpinner {}
        },
        LazyList::Failed(message) => rsx! {
            ErrorDisplay { message }
        },
        LazyList::Loaded(ads) => rsx! {
            AdList { ads, empty_message, on_ad_click }
        },
    }
}

#[component]
fn HistoryPanel(state: ReadStore<ProfileState>, on_ad_click: EventHandler<u64>) -> Element {
    match state.history().read().clone() {
        LazyList::NotLoaded | LazyList::Loading => rsx! {
            LoadingSpinner {}
        },
        LazyList::Failed(message) => rsx! {
            ErrorDisplay { message }
        },
        LazyList::Loaded(entries) if entries.is_empty() => rsx! {
            p { class: "text-gray-500 py-4", "You have not viewed any listings yet." }
        },
        LazyList::Loaded(entries) => rsx! {
            div { class: "flex flex-col gap-2",
                for (i , entry) in entries.iter().enumerate() {
                    AdCard {
                        key: "{i}",
                        ad: entry.ad.clone(),
                        caption: entry
                            .viewed_at
                            .as_ref()
                            .map(|at| format!("Viewed {}", format_timestamp(Some(at)))),
                        on_click: on_ad_click,
                    }
                }
            }
        },
    }
}
