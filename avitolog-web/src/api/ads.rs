//! Listings, ratings and favorites

use super::ApiClient;
use avitolog_common::ApiFailure;
use avitolog_ui::display_types::{AdDetail, AdSummary, PopularPage};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct FavoriteState {
    is_favorite: bool,
}

impl ApiClient {
    pub async fn popular_ads(&self, limit: u32, offset: u32) -> Result<PopularPage, ApiFailure> {
        self.get(&format!("/ads/popular/?limit={limit}&offset={offset}"))
            .await
    }

    pub async fn ad(&self, ad_id: u64) -> Result<AdDetail, ApiFailure> {
        self.get(&format!("/ads/{ad_id}/")).await
    }

    /// Count a view. The response (`{views_count}`) is not needed.
    pub async fn record_view(&self, ad_id: u64) -> Result<(), ApiFailure> {
        self.post_empty::<Value>(&format!("/ads/{ad_id}/views/"))
            .await
            .map(|_| ())
    }

    /// Rate 1 to 5; returns the listing with its new average.
    pub async fn rate_ad(&self, ad_id: u64, value: u8) -> Result<AdDetail, ApiFailure> {
        self.post(&format!("/ads/{ad_id}/ratings/"), json!({ "value": value }))
            .await
    }

    /// Returns whether the listing is now a favorite.
    pub async fn toggle_favorite(&self, ad_id: u64) -> Result<bool, ApiFailure> {
        let state: FavoriteState = self.post_empty(&format!("/ads/{ad_id}/favorite/")).await?;
        Ok(state.is_favorite)
    }

    pub async fn my_favorites(&self) -> Result<Vec<AdSummary>, ApiFailure> {
        self.get_list("/me/favorites/").await
    }

    pub async fn my_ads(&self) -> Result<Vec<AdSummary>, ApiFailure> {
        self.get_list("/me/ads/").await
    }
}
