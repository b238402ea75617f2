//! Scripted in-memory `AlbumsApi` for controller tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use albumview::api::{AlbumsApi, TransportError};
use albumview::models::{Album, Photo, User};
use async_trait::async_trait;
use parking_lot::Mutex;

struct Scripted<T> {
    outcome: Result<Vec<T>, String>,
    delay_ms: u64,
}

/// Answers each call with the next scripted outcome for that resource.
///
/// The outcome is taken when the call starts, so overlapping calls get
/// responses in call order even when their delays make them finish out of order.
#[derive(Default)]
pub struct FakeApi {
    users: Mutex<VecDeque<Scripted<User>>>,
    albums: Mutex<VecDeque<Scripted<Album>>>,
    photos: Mutex<VecDeque<Scripted<Photo>>>,
    album_requests: Mutex<Vec<i64>>,
    photo_requests: Mutex<Vec<i64>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_users(&self, users: Vec<User>) -> &Self {
        self.users.lock().push_back(Scripted {
            outcome: Ok(users),
            delay_ms: 0,
        });
        self
    }

    pub fn fail_users(&self, message: &str) -> &Self {
        self.users.lock().push_back(Scripted {
            outcome: Err(message.to_string()),
            delay_ms: 0,
        });
        self
    }

    pub fn push_albums(&self, albums: Vec<Album>) -> &Self {
        self.push_albums_delayed(albums, 0)
    }

    pub fn push_albums_delayed(&self, albums: Vec<Album>, delay_ms: u64) -> &Self {
        self.albums.lock().push_back(Scripted {
            outcome: Ok(albums),
            delay_ms,
        });
        self
    }

    pub fn fail_albums(&self, message: &str) -> &Self {
        self.albums.lock().push_back(Scripted {
            outcome: Err(message.to_string()),
            delay_ms: 0,
        });
        self
    }

    pub fn push_photos(&self, photos: Vec<Photo>) -> &Self {
        self.push_photos_delayed(photos, 0)
    }

    pub fn push_photos_delayed(&self, photos: Vec<Photo>, delay_ms: u64) -> &Self {
        self.photos.lock().push_back(Scripted {
            outcome: Ok(photos),
            delay_ms,
        });
        self
    }

    pub fn fail_photos(&self, message: &str) -> &Self {
        self.photos.lock().push_back(Scripted {
            outcome: Err(message.to_string()),
            delay_ms: 0,
        });
        self
    }

    pub fn album_requests(&self) -> Vec<i64> {
        self.album_requests.lock().clone()
    }

    pub fn photo_requests(&self) -> Vec<i64> {
        self.photo_requests.lock().clone()
    }
}

async fn answer<T>(
    queue: &Mutex<VecDeque<Scripted<T>>>,
    resource: &str,
) -> Result<Vec<T>, TransportError> {
    let next = queue.lock().pop_front();
    let Some(scripted) = next else {
        return Err(TransportError::Connection {
            resource: resource.to_string(),
            message: "no scripted response".to_string(),
        });
    };

    if scripted.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(scripted.delay_ms)).await;
    }

    scripted.outcome.map_err(|message| TransportError::Connection {
        resource: resource.to_string(),
        message,
    })
}

#[async_trait]
impl AlbumsApi for FakeApi {
    async fn fetch_users(&self) -> Result<Vec<User>, TransportError> {
        answer(&self.users, "users").await
    }

    async fn fetch_albums(&self, user_id: i64) -> Result<Vec<Album>, TransportError> {
        self.album_requests.lock().push(user_id);
        answer(&self.albums, "albums").await
    }

    async fn fetch_photos(&self, album_id: i64) -> Result<Vec<Photo>, TransportError> {
        self.photo_requests.lock().push(album_id);
        answer(&self.photos, "photos").await
    }
}
