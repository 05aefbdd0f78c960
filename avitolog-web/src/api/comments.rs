//! Comment thread endpoints

use super::ApiClient;
use avitolog_common::ApiFailure;
use avitolog_ui::display_types::{Comment, CommentLikeState, CommentPage};
use serde::Serialize;
use serde_json::Value;

/// Comments per page
pub const COMMENTS_PAGE_SIZE: u32 = 20;

#[derive(Serialize)]
struct NewComment<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<u64>,
}

/// Pages are 1-based; anything below 1 means the first page.
fn comments_path(ad_id: u64, page: u32) -> String {
    let offset = (page.max(1) - 1) * COMMENTS_PAGE_SIZE;
    format!("/ads/{ad_id}/comments/?limit={COMMENTS_PAGE_SIZE}&offset={offset}")
}

impl ApiClient {
    pub async fn comments(&self, ad_id: u64, page: u32) -> Result<CommentPage, ApiFailure> {
        self.get(&comments_path(ad_id, page)).await
    }

    /// Post a comment, or a reply when `parent` is set.
    pub async fn create_comment(
        &self,
        ad_id: u64,
        text: &str,
        parent: Option<u64>,
    ) -> Result<Comment, ApiFailure> {
        let body = serde_json::to_value(NewComment { text, parent }).unwrap_or(Value::Null);
        self.post(&format!("/ads/{ad_id}/comments/"), body).await
    }

    pub async fn delete_comment(&self, comment_id: u64) -> Result<(), ApiFailure> {
        self.delete(&format!("/comments/{comment_id}/")).await
    }

    pub async fn toggle_comment_like(&self, comment_id: u64) -> Result<CommentLikeState, ApiFailure> {
        self.post_empty(&format!("/comments/{comment_id}/like/"))
            .await
    }
}
