//! Display types for UI components
//!
//! These mirror the API response bodies, keeping only the fields the views
//! render. Missing fields fall back to defaults so partial bodies still render.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Listing as shown in feeds and profile lists
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AdSummary {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// Price in kopecks
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_rating: f64,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub likes_count: u64,
}

/// Full listing for the ad page
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AdDetail {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub avg_rating: f64,
    #[serde(default)]
    pub views_count: u64,
    #[serde(default)]
    pub comments_count: u64,
    #[serde(default)]
    pub likes_count: u64,
}

/// One page of the popular feed
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PopularPage {
    #[serde(default)]
    pub items: Vec<AdSummary>,
    #[serde(default)]
    pub next_offset: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CommentAuthor {
    pub id: u64,
    #[serde(default)]
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default)]
    pub author: Option<CommentAuthor>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub replies_count: u64,
    #[serde(default)]
    pub parent: Option<u64>,
}

/// One page of comments for an ad
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CommentPage {
    #[serde(default)]
    pub items: Vec<Comment>,
    #[serde(default)]
    pub next_offset: Option<u32>,
}

/// Response of the comment like toggle
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CommentLikeState {
    pub is_liked: bool,
    pub likes_count: u64,
}

/// Current user
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Member {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A viewed ad in the user's history
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub ad: AdSummary,
    pub viewed_at: Option<DateTime<Utc>>,
}

impl<'de> Deserialize<'de> for HistoryEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Entries come either wrapped with a timestamp or as bare ads
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Wrapped {
                ad: AdSummary,
                #[serde(default)]
                viewed_at: Option<DateTime<Utc>>,
            },
            Bare(AdSummary),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Wrapped { ad, viewed_at } => HistoryEntry { ad, viewed_at },
            Wire::Bare(ad) => HistoryEntry {
                ad,
                viewed_at: None,
            },
        })
    }
}

/// Decimal fields arrive as numbers or as strings ("4.50").
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64().unwrap_or_default(),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0.0,
    })
}
