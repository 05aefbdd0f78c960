//! Ad page state store

use crate::display_types::{AdDetail, Comment, CommentLikeState};
use dioxus::prelude::*;
use std::collections::HashMap;

/// State for the ad page: the listing, its actions and the comment thread
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AdDetailState {
    pub ad: Option<AdDetail>,
    pub loading: bool,
    /// Loading the ad itself failed
    pub error: Option<String>,
    /// Id of the signed-in user, used to offer comment deletion
    pub me_id: Option<u64>,

    /// `None` until the user toggles it; the ad endpoint does not report it
    pub favorite: Option<bool>,
    pub favorite_pending: bool,
    pub favorite_error: Option<String>,
    pub rating_pending: bool,
    pub rating_error: Option<String>,

    /// Newest first
    pub comments: Vec<Comment>,
    pub comments_loading: bool,
    pub comments_error: Option<String>,
    /// Like state per comment, known only after toggling
    pub liked: HashMap<u64, bool>,

    pub new_comment: String,
    pub create_pending: bool,
    pub create_error: Option<String>,

    /// Comment the inline reply form is open under
    pub reply_for: Option<u64>,
    pub reply_text: String,
    pub reply_pending: bool,
    pub reply_error: Option<String>,
}

impl AdDetailState {
    /// Show a freshly created top-level comment at the top.
    pub fn prepend_comment(&mut self, comment: Comment) {
        self.comments.insert(0, comment);
        if let Some(ad) = self.ad.as_mut() {
            ad.comments_count += 1;
        }
    }

    /// A reply was posted under `parent_id`.
    pub fn record_reply(&mut self, parent_id: u64) {
        if let Some(parent) = self.comments.iter_mut().find(|c| c.id == parent_id) {
            parent.replies_count += 1;
        }
        self.reply_for = None;
        self.reply_text.clear();
    }

    pub fn apply_like(&mut self, comment_id: u64, like: CommentLikeState) {
        self.liked.insert(comment_id, like.is_liked);
        if let Some(comment) = self.comments.iter_mut().find(|c| c.id == comment_id) {
            comment.likes_count = like.likes_count;
        }
    }

    pub fn remove_comment(&mut self, comment_id: u64) {
        let before = self.comments.len();
        self.comments.retain(|c| c.id != comment_id);
        if self.comments.len() < before {
            if let Some(ad) = self.ad.as_mut() {
                ad.comments_count = ad.comments_count.saturating_sub(1);
            }
        }
        if self.reply_for == Some(comment_id) {
            self.close_reply();
        }
    }

    pub fn open_reply(&mut self, comment_id: u64) {
        if self.reply_for != Some(comment_id) {
            self.reply_text.clear();
        }
        self.reply_for = Some(comment_id);
        self.reply_error = None;
    }

    pub fn close_reply(&mut self) {
        self.reply_for = None;
        self.reply_text.clear();
        self.reply_error = None;
    }

    /// Only the author may delete a comment.
    pub fn can_delete(&self, comment: &Comment) -> bool {
        match (self.me_id, comment.author.as_ref()) {
            (Some(me), Some(author)) => me == author.id,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_types::CommentAuthor;

    fn comment(id: u64, author_id: u64) -> Comment {
        Comment {
            id,
            author: Some(CommentAuthor {
                id: author_id,
                username: format!("user{author_id}"),
            }),
            text: format!("comment {id}"),
            created_at: None,
            likes_count: 0,
            replies_count: 0,
            parent: None,
        }
    }

    fn with_comments() -> AdDetailState {
        AdDetailState {
            ad: Some(AdDetail {
                id: 1,
                comments_count: 2,
                ..Default::default()
            }),
            comments: vec![comment(2, 10), comment(1, 11)],
            ..Default::default()
        }
    }

    #[test]
    fn test_prepend_comment_bumps_count() {
        let mut state = with_comments();
        state.prepend_comment(comment(3, 10));
        assert_eq!(state.comments[0].id, 3);
        assert_eq!(state.ad.as_ref().unwrap().comments_count, 3);
    }

    #[test]
    fn test_record_reply_increments_parent_and_closes_form() {
        let mut state = with_comments();
        state.open_reply(1);
        state.reply_text = "agreed".to_string();
        state.record_reply(1);
        assert_eq!(state.comments[1].replies_count, 1);
        assert_eq!(state.reply_for, None);
        assert!(state.reply_text.is_empty());
    }

    #[test]
    fn test_apply_like() {
        let mut state = with_comments();
        state.apply_like(
            2,
            CommentLikeState {
                is_liked: true,
                likes_count: 5,
            },
        );
        assert_eq!(state.comments[0].likes_count, 5);
        assert_eq!(state.liked.get(&2), Some(&true));
    }

    #[test]
    fn test_remove_comment_closes_its_reply_form() {
        let mut state = with_comments();
        state.open_reply(2);
        state.remove_comment(2);
        assert_eq!(state.comments.len(), 1);
        assert_eq!(state.reply_for, None);
        assert_eq!(state.ad.as_ref().unwrap().comments_count, 1);

        state.remove_comment(42);
        assert_eq!(state.ad.as_ref().unwrap().comments_count, 1);
    }

    #[test]
    fn test_switching_reply_target_clears_text() {
        let mut state = with_comments();
        state.open_reply(1);
        state.reply_text = "draft".to_string();
        state.open_reply(1);
        assert_eq!(state.reply_text, "draft");
        state.open_reply(2);
        assert!(state.reply_text.is_empty());
    }

    #[test]
    fn test_can_delete_only_own_comments() {
        let mut state = with_comments();
        assert!(!state.can_delete(&state.comments[0].clone()));
        state.me_id = Some(10);
        assert!(state.can_delete(&state.comments[0].clone()));
        assert!(!state.can_delete(&state.comments[1].clone()));
    }
}
