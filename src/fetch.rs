//! Ordering policy for overlapping fetches on one controller.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Decides which response wins when fetches overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOrdering {
    /// Every response is applied as it arrives; the last to complete wins.
    #[default]
    LastCompleted,
    /// Only the most recently started fetch may publish its result.
    LatestRequest,
}

/// Token identifying one started fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Hands out monotonic tokens and answers whether a token may still publish.
#[derive(Debug, Default)]
pub struct FetchSequencer {
    ordering: FetchOrdering,
    latest: AtomicU64,
}

impl FetchSequencer {
    pub fn new(ordering: FetchOrdering) -> Self {
        Self {
            ordering,
            latest: AtomicU64::new(0),
        }
    }

    pub fn ordering(&self) -> FetchOrdering {
        self.ordering
    }

    pub fn begin(&self) -> FetchToken {
        FetchToken(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a response for `token` should be applied.
    pub fn accepts(&self, token: FetchToken) -> bool {
        match self.ordering {
            FetchOrdering::LastCompleted => true,
            FetchOrdering::LatestRequest => self.latest.load(Ordering::SeqCst) == token.0,
        }
    }
}
