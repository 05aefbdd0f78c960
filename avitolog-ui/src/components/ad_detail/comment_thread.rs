//! Comment list with likes, inline replies and deletion

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::text_input::TextArea;
use crate::components::utils::format_timestamp;
use crate::display_types::Comment;
use dioxus::prelude::*;

/// New top-level comment form
#[component]
pub fn CommentForm(
    value: String,
    pending: bool,
    error: Option<String>,
    on_change: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "flex flex-col gap-2 mb-6",
            label { class: "text-sm text-gray-400", r#for: "new-comment", "Add a comment" }
            TextArea {
                id: "new-comment".to_string(),
                value,
                placeholder: "Share your opinion…",
                on_input: on_change,
            }
            if let Some(message) = error {
                ErrorDisplay { message }
            }
            div {
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    loading: pending,
                    onclick: move |_| on_submit.call(()),
                    if pending {
                        "Sending…"
                    } else {
                        "Send"
                    }
                }
            }
        }
    }
}

/// Reply form state for the comment it is open under
#[derive(Clone, Debug, PartialEq)]
pub struct ReplyDraft {
    pub text: String,
    pub pending: bool,
    pub error: Option<String>,
}

#[component]
pub fn CommentItem(
    comment: Comment,
    liked: bool,
    can_delete: bool,
    /// Present when the reply form is open under this comment
    reply: Option<ReplyDraft>,
    on_like: EventHandler<u64>,
    on_reply_open: EventHandler<u64>,
    on_reply_change: EventHandler<String>,
    on_reply_submit: EventHandler<u64>,
    on_reply_cancel: EventHandler<()>,
    on_delete: EventHandler<u64>,
) -> Element {
    let id = comment.id;
    let author = comment
        .author
        .as_ref()
        .map(|a| a.username.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "User".to_string());
    let created = format_timestamp(comment.created_at.as_ref());
    let like_variant = if liked {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };

    rsx! {
        div { class: "py-4 border-b border-white/5",
            div { class: "flex justify-between items-start gap-4",
                div { class: "flex items-center gap-3",
                    div { class: "w-8 h-8 rounded-full bg-gray-700" }
                    div {
                        div { class: "text-white", "{author}" }
                        div { class: "text-xs text-gray-500", "{created}" }
                    }
                }
                div { class: "flex gap-1",
                    Button {
                        variant: like_variant,
                        size: ButtonSize::Small,
                        onclick: move |_| on_like.call(id),
                        "❤ {comment.likes_count}"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_reply_open.call(id),
                        "Reply"
                    }
                    if can_delete {
                        Button {
                            variant: ButtonVariant::Danger,
                            size: ButtonSize::Small,
                            onclick: move |_| on_delete.call(id),
                            "Delete"
                        }
                    }
                }
            }
            p { class: "text-gray-300 mt-2 whitespace-pre-line", "{comment.text}" }
            if comment.replies_count > 0 {
                div { class: "text-xs text-gray-500 mt-1", "Replies: {comment.replies_count}" }
            }
            if let Some(draft) = reply {
                div { class: "mt-3 ml-8 flex flex-col gap-2",
                    TextArea {
                        value: draft.text,
                        rows: 2,
                        placeholder: "Your reply…",
                        on_input: on_reply_change,
                    }
                    if let Some(message) = draft.error {
                        ErrorDisplay { message }
                    }
                    div { class: "flex gap-2",
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Small,
                            loading: draft.pending,
                            onclick: move |_| on_reply_submit.call(id),
                            if draft.pending {
                                "Sending…"
                            } else {
                                "Reply"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            onclick: move |_| on_reply_cancel.call(()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

/// Comments section: form (or login prompt) and the list
#[component]
pub fn CommentThread(
    /// Rendered above the list; the login prompt for guests
    form: Element,
    comments: Vec<Comment>,
    loading: bool,
    error: Option<String>,
    /// Per-comment flags computed by the caller
    liked: Vec<bool>,
    deletable: Vec<bool>,
    reply_for: Option<u64>,
    reply: ReplyDraft,
    on_like: EventHandler<u64>,
    on_reply_open: EventHandler<u64>,
    on_reply_change: EventHandler<String>,
    on_reply_submit: EventHandler<u64>,
    on_reply_cancel: EventHandler<()>,
    on_delete: EventHandler<u64>,
) -> Element {
    rsx! {
        section { class: "bg-gray-800/40 rounded-xl p-6 mt-6",
            h2 { class: "text-xl font-semibold text-white mb-4", "Comments" }
            {form}
            if loading {
                LoadingSpinner { message: "Loading comments…".to_string() }
            }
            if let Some(message) = error {
                ErrorDisplay { message }
            }
            for (i , comment) in comments.iter().enumerate() {
                CommentItem {
                    key: "{comment.id}",
                    comment: comment.clone(),
                    liked: liked.get(i).copied().unwrap_or(false),
                    can_delete: deletable.get(i).copied().unwrap_or(false),
                    reply: (reply_for == Some(comment.id)).then(|| reply.clone()),
                    on_like,
                    on_reply_open,
                    on_reply_change,
                    on_reply_submit,
                    on_reply_cancel,
                    on_delete,
                }
            }
        }
    }
}
