use serde::{Deserialize, Serialize};

/// A photo inside an album, with full-size and thumbnail image references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: i64,
    pub album_id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

impl Photo {
    /// Returns true when the title contains `query`, ignoring case.
    ///
    /// An empty query matches every photo.
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }
}
