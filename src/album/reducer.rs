use crate::album::filter::filter_photos;
use crate::album::intent::AlbumIntent;
use crate::album::state::AlbumState;
use crate::mvi::Reducer;

pub struct AlbumReducer;

impl Reducer for AlbumReducer {
    type State = AlbumState;
    type Intent = AlbumIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AlbumIntent::FetchStarted => AlbumState {
                is_loading: true,
                ..state
            },
            AlbumIntent::PhotosLoaded { album_id, photos } => AlbumState {
                album_id: Some(album_id),
                failed_album_id: None,
                filtered_photos: filter_photos(&photos, &state.search_query),
                photos,
                is_loading: false,
                error_message: None,
                ..state
            },
            AlbumIntent::SearchQueryChanged { query } => AlbumState {
                filtered_photos: filter_photos(&state.photos, &query),
                search_query: query,
                ..state
            },
            AlbumIntent::Failed { album_id, message } => AlbumState {
                failed_album_id: Some(album_id),
                is_loading: false,
                error_message: Some(message),
                ..state
            },
        }
    }
}
