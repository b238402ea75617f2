use std::sync::Arc;

use tokio::sync::watch;

use crate::album::intent::AlbumIntent;
use crate::album::reducer::AlbumReducer;
use crate::album::state::AlbumState;
use crate::api::AlbumsApi;
use crate::fetch::{FetchOrdering, FetchSequencer};
use crate::mvi::{Store, Subscription};

/// Data controller for the album screen.
///
/// Clones share state. The search query can be changed at any time, including
/// while a fetch is in flight; the filtered view always reflects the latest
/// photos and the latest query.
#[derive(Clone)]
pub struct AlbumController {
    api: Arc<dyn AlbumsApi>,
    store: Arc<Store<AlbumReducer>>,
    sequencer: Arc<FetchSequencer>,
}

impl AlbumController {
    pub fn new(api: Arc<dyn AlbumsApi>) -> Self {
        Self {
            api,
            store: Arc::new(Store::new()),
            sequencer: Arc::new(FetchSequencer::default()),
        }
    }

    pub fn with_ordering(mut self, ordering: FetchOrdering) -> Self {
        self.sequencer = Arc::new(FetchSequencer::new(ordering));
        self
    }

    pub fn state(&self) -> AlbumState {
        self.store.state()
    }

    pub fn watch(&self) -> watch::Receiver<AlbumState> {
        self.store.watch()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&AlbumState) + Send + 'static,
    {
        self.store.subscribe(callback)
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        let query = query.into();
        tracing::debug!(query = %query, "Search query changed");
        self.store.dispatch(AlbumIntent::SearchQueryChanged { query });
    }

    /// Fetch the photos of `album_id`.
    ///
    /// Failures end up in `error_message`; prior photos stay in place.
    pub async fn fetch_photos(&self, album_id: i64) {
        let token = self.sequencer.begin();
        self.store.dispatch(AlbumIntent::FetchStarted);

        let intent = match self.api.fetch_photos(album_id).await {
            Ok(photos) => {
                tracing::info!(album_id, photos = photos.len(), "Loaded album photos");
                AlbumIntent::PhotosLoaded { album_id, photos }
            }
            Err(e) => {
                tracing::warn!(album_id, kind = e.kind(), error = %e, "Failed to fetch photos");
                AlbumIntent::Failed {
                    album_id,
                    message: e.to_string(),
                }
            }
        };

        if !self.sequencer.accepts(token) {
            tracing::debug!(album_id, "Dropping superseded photos response");
            return;
        }
        self.store.dispatch(intent);
    }

    /// Re-fetch the album that failed, or the one on screen if nothing did.
    /// Does nothing before any fetch has completed.
    pub async fn retry(&self) {
        match self.state().retry_album_id() {
            Some(album_id) => self.fetch_photos(album_id).await,
            None => tracing::debug!("Retry requested before any album fetch completed"),
        }
    }
}
