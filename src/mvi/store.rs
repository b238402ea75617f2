//! Observable state container driven by a reducer.

use tokio::sync::watch;

use super::reducer::Reducer;
use super::subscription::Subscription;

/// Holds the current state for one controller and publishes each transition.
///
/// Every `dispatch` swaps in a whole new snapshot, so an observer never reads a
/// half-applied transition. Publishing never fails, even with no observers.
pub struct Store<R: Reducer> {
    sender: watch::Sender<R::State>,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(R::State::default());
        Self { sender }
    }

    /// Run the reducer over the current state and publish the result.
    ///
    /// Returns true when the state actually changed. Unchanged states are not
    /// re-published.
    pub fn dispatch(&self, intent: R::Intent) -> bool {
        self.sender.send_if_modified(|state| {
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                false
            } else {
                *state = next;
                true
            }
        })
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.sender.borrow().clone()
    }

    /// Raw receiver for async consumers.
    pub fn watch(&self) -> watch::Receiver<R::State> {
        self.sender.subscribe()
    }

    /// Invoke `callback` with the current state and then on every change.
    ///
    /// Must be called from within a tokio runtime. The callback stops firing
    /// once the returned handle is dropped or cancelled.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        Subscription::spawn(self.sender.subscribe(), callback)
    }

    pub fn observer_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
