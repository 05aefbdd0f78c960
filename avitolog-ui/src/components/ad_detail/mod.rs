//! Ad page views: listing info, actions and the comment thread

mod ad_info;
mod comment_thread;
mod view;

pub use ad_info::{AdInfoView, RatingBar};
pub use comment_thread::{CommentForm, CommentItem, CommentThread, ReplyDraft};
pub use view::{AdDetailCallbacks, AdDetailView};
