use crate::models::Photo;
use crate::mvi::ViewState;

/// Everything the album screen renders.
///
/// `filtered_photos` is always `filter_photos(&photos, &search_query)`; the
/// reducer recomputes it whenever either input changes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlbumState {
    /// Album `photos` belong to. Set only when its photos are published.
    pub album_id: Option<i64>,
    /// Album `error_message` refers to; cleared on the next successful load.
    pub failed_album_id: Option<i64>,
    pub photos: Vec<Photo>,
    pub filtered_photos: Vec<Photo>,
    pub search_query: String,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl ViewState for AlbumState {}

impl AlbumState {
    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Album a retry should re-issue: the failed one if there is an error on
    /// screen, otherwise the one whose photos are shown.
    pub fn retry_album_id(&self) -> Option<i64> {
        self.failed_album_id.or(self.album_id)
    }
}
