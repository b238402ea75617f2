use crate::models::Photo;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum AlbumIntent {
    FetchStarted,
    PhotosLoaded { album_id: i64, photos: Vec<Photo> },
    SearchQueryChanged { query: String },
    Failed { album_id: i64, message: String },
}

impl Intent for AlbumIntent {}
