use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle for a live state observer.
///
/// The observer runs until this handle is dropped, [`cancel`](Self::cancel) is
/// called, or the store goes away. Teardown marks the observer closed before
/// aborting its task, and the task checks that mark before every callback. A
/// callback already running on another worker finishes; no later state change
/// reaches the callback.
#[must_use = "dropping a Subscription immediately stops the observer"]
pub struct Subscription {
    handle: JoinHandle<()>,
    closed: Arc<AtomicBool>,
}

impl Subscription {
    pub(crate) fn spawn<T, F>(mut receiver: watch::Receiver<T>, mut callback: F) -> Self
    where
        T: Clone + Send + Sync + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        let closed = Arc::new(AtomicBool::new(false));
        let task_closed = closed.clone();
        let handle = tokio::spawn(async move {
            let current = receiver.borrow_and_update().clone();
            if task_closed.load(Ordering::Acquire) {
                return;
            }
            callback(&current);

            while receiver.changed().await.is_ok() {
                let state = receiver.borrow_and_update().clone();
                if task_closed.load(Ordering::Acquire) {
                    break;
                }
                callback(&state);
            }
        });
        Self { handle, closed }
    }

    /// Stop observing. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }

    pub fn is_active(&self) -> bool {
        !self.closed.load(Ordering::Acquire) && !self.handle.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::Release);
        self.handle.abort();
    }
}
