//! Ad page view component - pure rendering, no data fetching

use super::ad_info::AdInfoView;
use super::comment_thread::{CommentForm, CommentThread, ReplyDraft};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::stores::ad_detail::{AdDetailState, AdDetailStateStoreExt};
use dioxus::prelude::*;

/// Everything the ad page can ask its owner to do
#[derive(Clone, Copy, PartialEq)]
pub struct AdDetailCallbacks {
    pub on_rate: EventHandler<u8>,
    pub on_toggle_favorite: EventHandler<()>,
    pub on_new_comment_change: EventHandler<String>,
    pub on_submit_comment: EventHandler<()>,
    pub on_like: EventHandler<u64>,
    pub on_reply_open: EventHandler<u64>,
    pub on_reply_change: EventHandler<String>,
    pub on_reply_submit: EventHandler<u64>,
    pub on_reply_cancel: EventHandler<()>,
    pub on_delete: EventHandler<u64>,
    pub on_login_click: EventHandler<()>,
    pub on_home_click: EventHandler<()>,
}

/// Ad page: listing, actions and comments
///
/// Accepts `ReadStore<AdDetailState>` and reads through lenses.
#[component]
pub fn AdDetailView(
    state: ReadStore<AdDetailState>,
    is_authenticated: bool,
    callbacks: AdDetailCallbacks,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let ad = state.ad().read().clone();

    if loading {
        return rsx! {
            LoadingSpinner {}
        };
    }

    if let Some(message) = error {
        return rsx! {
            section { class: "bg-gray-800/40 rounded-xl p-6",
                ErrorDisplay { message }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    onclick: move |_| callbacks.on_home_click.call(()),
                    "Go home"
                }
            }
        };
    }

    let Some(ad) = ad else {
        return rsx! {};
    };

    let snapshot = state.read();
    let liked: Vec<bool> = snapshot
        .comments
        .iter()
        .map(|c| snapshot.liked.get(&c.id).copied().unwrap_or(false))
        .collect();
    let deletable: Vec<bool> = snapshot
        .comments
        .iter()
        .map(|c| snapshot.can_delete(c))
        .collect();
    let comments = snapshot.comments.clone();
    let reply_for = snapshot.reply_for;
    let reply = ReplyDraft {
        text: snapshot.reply_text.clone(),
        pending: snapshot.reply_pending,
        error: snapshot.reply_error.clone(),
    };
    let favorite = snapshot.favorite;
    let favorite_pending = snapshot.favorite_pending;
    let favorite_error = snapshot.favorite_error.clone();
    let rating_pending = snapshot.rating_pending;
    let rating_error = snapshot.rating_error.clone();
    let new_comment = snapshot.new_comment.clone();
    let create_pending = snapshot.create_pending;
    let create_error = snapshot.create_error.clone();
    let comments_loading = snapshot.comments_loading;
    let comments_error = snapshot.comments_error.clone();
    drop(snapshot);

    let form = if is_authenticated {
        rsx! {
            CommentForm {
                value: new_comment,
                pending: create_pending,
                error: create_error,
                on_change: callbacks.on_new_comment_change,
                on_submit: callbacks.on_submit_comment,
            }
        }
    } else {
        rsx! {
            p { class: "text-gray-400 mb-6",
                "To write comments, please "
                a {
                    class: "text-indigo-300 hover:underline cursor-pointer",
                    onclick: move |_| callbacks.on_login_click.call(()),
                    "log in"
                }
                "."
            }
        }
    };

    rsx! {
        AdInfoView {
            ad,
            favorite,
            favorite_pending,
            favorite_error,
            rating_pending,
            rating_error,
            on_rate: callbacks.on_rate,
            on_toggle_favorite: callbacks.on_toggle_favorite,
        }
        CommentThread {
            form,
            comments,
            loading: comments_loading,
            error: comments_error,
            liked,
            deletable,
            reply_for,
            reply,
            on_like: callbacks.on_like,
            on_reply_open: callbacks.on_reply_open,
            on_reply_change: callbacks.on_reply_change,
            on_reply_submit: callbacks.on_reply_submit,
            on_reply_cancel: callbacks.on_reply_cancel,
            on_delete: callbacks.on_delete,
        }
    }
}
