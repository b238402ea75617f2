use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::fetch::FetchOrdering;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Backend endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the albums backend (default: the public placeholder API).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// How the profile screen chooses its user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub selection: UserSelection,
    /// Required when `selection = "by_id"`.
    #[serde(default)]
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSelection {
    #[default]
    Random,
    First,
    ById,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default)]
    pub ordering: FetchOrdering,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
