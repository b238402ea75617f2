use std::sync::Arc;

use tokio::sync::watch;

use crate::api::AlbumsApi;
use crate::fetch::{FetchOrdering, FetchSequencer};
use crate::mvi::{Store, Subscription};
use crate::profile::intent::ProfileIntent;
use crate::profile::reducer::ProfileReducer;
use crate::profile::selector::{RandomUser, UserSelector};
use crate::profile::state::ProfileState;

/// Data controller for the profile screen.
///
/// Cheap to clone; clones share the same state, so a presentation surface can
/// hand one to a spawned task and keep observing through another.
#[derive(Clone)]
pub struct ProfileController {
    api: Arc<dyn AlbumsApi>,
    selector: Arc<dyn UserSelector>,
    store: Arc<Store<ProfileReducer>>,
    sequencer: Arc<FetchSequencer>,
}

impl ProfileController {
    /// Controller with random user selection and last-completed ordering.
    pub fn new(api: Arc<dyn AlbumsApi>) -> Self {
        Self {
            api,
            selector: Arc::new(RandomUser),
            store: Arc::new(Store::new()),
            sequencer: Arc::new(FetchSequencer::default()),
        }
    }

    pub fn with_selector(mut self, selector: Arc<dyn UserSelector>) -> Self {
        self.selector = selector;
        self
    }

    pub fn with_ordering(mut self, ordering: FetchOrdering) -> Self {
        self.sequencer = Arc::new(FetchSequencer::new(ordering));
        self
    }

    pub fn state(&self) -> ProfileState {
        self.store.state()
    }

    pub fn watch(&self) -> watch::Receiver<ProfileState> {
        self.store.watch()
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&ProfileState) + Send + 'static,
    {
        self.store.subscribe(callback)
    }

    /// Fetch all users, pick one, then fetch that user's albums.
    ///
    /// Failures end up in `error_message`; nothing is returned to the caller.
    pub async fn fetch_user_and_albums(&self) {
        let token = self.sequencer.begin();
        self.store.dispatch(ProfileIntent::FetchStarted);

        let intent = self.load().await;
        if !self.sequencer.accepts(token) {
            tracing::debug!("Dropping superseded profile response");
            return;
        }
        self.store.dispatch(intent);
    }

    /// Re-run the fetch after an error.
    pub async fn retry(&self) {
        self.fetch_user_and_albums().await;
    }

    async fn load(&self) -> ProfileIntent {
        let users = match self.api.fetch_users().await {
            Ok(users) => users,
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "Failed to fetch users");
                return ProfileIntent::Failed {
                    message: e.to_string(),
                };
            }
        };

        let Some(user) = self.selector.select(&users).cloned() else {
            // Open product question: an empty user list is not reported as an error.
            tracing::warn!(count = users.len(), "No user selected, skipping album fetch");
            return ProfileIntent::NoUserSelected;
        };

        match self.api.fetch_albums(user.id).await {
            Ok(albums) => {
                tracing::info!(
                    user_id = user.id,
                    albums = albums.len(),
                    "Loaded user albums"
                );
                ProfileIntent::Loaded { user, albums }
            }
            Err(e) => {
                tracing::warn!(
                    user_id = user.id,
                    kind = e.kind(),
                    error = %e,
                    "Failed to fetch albums"
                );
                ProfileIntent::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}
