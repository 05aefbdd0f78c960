//! Listing page: details, rating, favorite and the comment thread

use crate::api::ApiClient;
use crate::session::use_session;
use crate::Route;
use avitolog_common::error_message;
use avitolog_ui::stores::{AdDetailState, AdDetailStateStoreExt};
use avitolog_ui::{AdDetailCallbacks, AdDetailView};
use dioxus::prelude::*;
use tracing::{debug, warn};

const EMPTY_COMMENT_MESSAGE: &str = "Enter a comment.";
const EMPTY_REPLY_MESSAGE: &str = "Enter a reply.";
const DELETE_CONFIRMATION: &str = "Delete this comment?";

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Reset the page for `ad_id` and fetch everything it shows.
///
/// Responses for an ad the user has already navigated away from are dropped.
fn load_ad(
    api: ApiClient,
    mut state: Store<AdDetailState>,
    id: ReadSignal<u64>,
    ad_id: u64,
    authenticated: bool,
) {
    state.set(AdDetailState {
        loading: true,
        comments_loading: true,
        ..Default::default()
    });

    let current = move || *id.peek() == ad_id;

    spawn({
        let api = api.clone();
        async move {
            let result = api.ad(ad_id).await;
            if !current() {
                return;
            }
            match result {
                Ok(ad) => state.ad().set(Some(ad)),
                Err(failure) => {
                    warn!("Failed to load ad {}: {}", ad_id, failure);
                    state.error().set(Some(error_message(&failure)));
                }
            }
            state.loading().set(false);
        }
    });

    spawn({
        let api = api.clone();
        async move {
            if let Err(failure) = api.record_view(ad_id).await {
                debug!("View of ad {} not recorded: {}", ad_id, failure);
            }
        }
    });

    spawn({
        let api = api.clone();
        async move {
            let result = api.comments(ad_id, 1).await;
            if !current() {
                return;
            }
            match result {
                Ok(page) => state.comments().set(page.items),
                Err(failure) => {
                    warn!("Failed to load comments for ad {}: {}", ad_id, failure);
                    state.comments_error().set(Some(error_message(&failure)));
                }
            }
            state.comments_loading().set(false);
        }
    });

    if authenticated {
        spawn(async move {
            if let Ok(member) = api.me().await {
                if current() {
                    state.me_id().set(Some(member.id));
                }
            }
        });
    }
}

#[component]
pub fn Ad(id: ReadSignal<u64>) -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();
    let mut state = use_store(AdDetailState::default);

    // Reload when the id or the signed-in state changes
    use_effect({
        let api = api.clone();
        move || {
            let ad_id = id();
            let authenticated = session.is_authenticated();
            load_ad(api.clone(), state, id, ad_id, authenticated);
        }
    });

    // Guests are sent to the login page instead
    let require_auth = move || {
        if session.is_authenticated() {
            true
        } else {
            navigator().push(Route::Login {});
            false
        }
    };

    let on_rate = EventHandler::new({
        let api = api.clone();
        move |value: u8| {
            if !require_auth() || *state.rating_pending().peek() {
                return;
            }
            state.rating_pending().set(true);
            state.rating_error().set(None);
            let api = api.clone();
            spawn(async move {
                match api.rate_ad(id(), value).await {
                    Ok(ad) => state.ad().set(Some(ad)),
                    Err(failure) => state.rating_error().set(Some(error_message(&failure))),
                }
                state.rating_pending().set(false);
            });
        }
    });

    let on_toggle_favorite = EventHandler::new({
        let api = api.clone();
        move |_| {
            if !require_auth() || *state.favorite_pending().peek() {
                return;
            }
            state.favorite_pending().set(true);
            state.favorite_error().set(None);
            let api = api.clone();
            spawn(async move {
                match api.toggle_favorite(id()).await {
                    Ok(is_favorite) => state.favorite().set(Some(is_favorite)),
                    Err(failure) => state.favorite_error().set(Some(error_message(&failure))),
                }
                state.favorite_pending().set(false);
            });
        }
    });

    let on_submit_comment = EventHandler::new({
        let api = api.clone();
        move |_| {
            if !require_auth() || *state.create_pending().peek() {
                return;
            }
            let text = state.new_comment().peek().trim().to_string();
            if text.is_empty() {
                state.create_error().set(Some(EMPTY_COMMENT_MESSAGE.to_string()));
                return;
            }
            state.create_pending().set(true);
            state.create_error().set(None);
            let api = api.clone();
            spawn(async move {
                match api.create_comment(id(), &text, None).await {
                    Ok(comment) => {
                        let mut s = state.write();
                        s.prepend_comment(comment);
                        s.new_comment.clear();
                    }
                    Err(failure) => state.create_error().set(Some(error_message(&failure))),
                }
                state.create_pending().set(false);
            });
        }
    });

    let on_like = EventHandler::new({
        let api = api.clone();
        move |comment_id: u64| {
            if !require_auth() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                match api.toggle_comment_like(comment_id).await {
                    Ok(like) => state.write().apply_like(comment_id, like),
                    Err(failure) => warn!("Like on comment {} failed: {}", comment_id, failure),
                }
            });
        }
    });

    let on_reply_submit = EventHandler::new({
        let api = api.clone();
        move |parent_id: u64| {
            if !require_auth() || *state.reply_pending().peek() {
                return;
            }
            let text = state.reply_text().peek().trim().to_string();
            if text.is_empty() {
                state.reply_error().set(Some(EMPTY_REPLY_MESSAGE.to_string()));
                return;
            }
            state.reply_pending().set(true);
            state.reply_error().set(None);
            let api = api.clone();
            spawn(async move {
                match api.create_comment(id(), &text, Some(parent_id)).await {
                    Ok(_) => state.write().record_reply(parent_id),
                    Err(failure) => state.reply_error().set(Some(error_message(&failure))),
                }
                state.reply_pending().set(false);
            });
        }
    });

    let on_delete = EventHandler::new({
        let api = api.clone();
        move |comment_id: u64| {
            if !require_auth() || !confirm(DELETE_CONFIRMATION) {
                return;
            }
            let api = api.clone();
            spawn(async move {
                match api.delete_comment(comment_id).await {
                    Ok(()) => state.write().remove_comment(comment_id),
                    Err(failure) => {
                        warn!("Deleting comment {} failed: {}", comment_id, failure);
                        alert(&error_message(&failure));
                    }
                }
            });
        }
    });

    let callbacks = AdDetailCallbacks {
        on_rate,
        on_toggle_favorite,
        on_new_comment_change: EventHandler::new(move |text: String| {
            state.new_comment().set(text)
        }),
        on_submit_comment,
        on_like,
        on_reply_open: EventHandler::new(move |comment_id: u64| {
            state.write().open_reply(comment_id)
        }),
        on_reply_change: EventHandler::new(move |text: String| state.reply_text().set(text)),
        on_reply_submit,
        on_reply_cancel: EventHandler::new(move |_| state.write().close_reply()),
        on_delete,
        on_login_click: EventHandler::new(move |_| {
            navigator().push(Route::Login {});
        }),
        on_home_click: EventHandler::new(move |_| {
            navigator().push(Route::Home {});
        }),
    };

    rsx! {
        AdDetailView {
            state,
            is_authenticated: session.is_authenticated(),
            callbacks,
        }
    }
}
