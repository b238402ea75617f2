use serde::{Deserialize, Serialize};

/// An album owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
}
