use super::ApiClient;
use avitolog_common::ApiFailure;
use avitolog_ui::display_types::HistoryEntry;

impl ApiClient {
    /// Listings the current user has viewed, most recent first.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ApiFailure> {
        self.get_list("/me/history/").await
    }
}
