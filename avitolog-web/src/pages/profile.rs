use crate::api::ApiClient;
use crate::session::use_session;
use crate::Route;
use avitolog_common::error_message;
use avitolog_ui::stores::{LazyList, ProfileState, ProfileStateStoreExt, ProfileTab};
use avitolog_ui::{ProfileGuestView, ProfileView};
use dioxus::prelude::*;
use tracing::warn;

/// Fetch the list behind `tab` the first time it opens (or after a failure).
fn load_tab(api: ApiClient, state: Store<ProfileState>, tab: ProfileTab) {
    if !state.peek().tab_needs_load(tab) {
        return;
    }

    match tab {
        ProfileTab::Profile => {}
        ProfileTab::MyAds => {
            let mut list = state.my_ads();
            list.set(LazyList::Loading);
            spawn(async move {
                list.set(match api.my_ads().await {
                    Ok(ads) => LazyList::Loaded(ads),
                    Err(failure) => LazyList::Failed(error_message(&failure)),
                });
            });
        }
        ProfileTab::Favorites => {
            let mut list = state.favorites();
            list.set(LazyList::Loading);
            spawn(async move {
                list.set(match api.my_favorites().await {
                    Ok(ads) => LazyList::Loaded(ads),
                    Err(failure) => LazyList::Failed(error_message(&failure)),
                });
            });
        }
        ProfileTab::History => {
            let mut list = state.history();
            list.set(LazyList::Loading);
            spawn(async move {
                list.set(match api.history().await {
                    Ok(entries) => LazyList::Loaded(entries),
                    Err(failure) => LazyList::Failed(error_message(&failure)),
                });
            });
        }
    }
}

#[component]
pub fn Profile() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let state = use_store(ProfileState::default);

    // Load the current user whenever a session appears
    use_effect({
        let api = api.clone();
        move || {
            if !session.is_authenticated() {
                return;
            }
            let api = api.clone();
            state.loading().set(true);
            state.error().set(None);
            spawn(async move {
                match api.me().await {
                    Ok(member) => state.me().set(Some(member)),
                    Err(failure) => {
                        warn!("Failed to load profile: {}", failure);
                        state.error().set(Some(error_message(&failure)));
                    }
                }
                state.loading().set(false);
            });
        }
    });

    if !session.is_authenticated() {
        return rsx! {
            ProfileGuestView {
                on_login_click: move |_| {
                    navigator().push(Route::Login {});
                },
                on_register_click: move |_| {
                    navigator().push(Route::Register {});
                },
            }
        };
    }

    rsx! {
        ProfileView {
            state,
            on_tab_select: move |tab: ProfileTab| {
                state.active_tab().set(tab);
                load_tab(api.clone(), state, tab);
            },
            on_ad_click: move |id: u64| {
                navigator().push(Route::Ad { id });
            },
            on_logout: move |_| {
                session.sign_out();
                navigator().push(Route::Home {});
            },
        }
    }
}
