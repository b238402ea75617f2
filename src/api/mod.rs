//! Transport client for the albums backend.
//!
//! Three GET resources, each answering with a JSON array. Controllers talk to
//! the backend only through [`AlbumsApi`], so tests can swap in a fake.

mod client;
mod error;
mod request;

pub use client::{parse_base_url, ApiClient, DEFAULT_BASE_URL};
pub use error::{BaseUrlError, ClientError, TransportError};
pub use request::ApiRequest;

use async_trait::async_trait;

use crate::models::{Album, Photo, User};

/// Request-in, decoded-entities-out access to the backend.
#[async_trait]
pub trait AlbumsApi: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<User>, TransportError>;

    async fn fetch_albums(&self, user_id: i64) -> Result<Vec<Album>, TransportError>;

    async fn fetch_photos(&self, album_id: i64) -> Result<Vec<Photo>, TransportError>;
}
