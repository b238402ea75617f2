/// One of the three resources the backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiRequest {
    GetUsers,
    GetAlbums { user_id: i64 },
    GetPhotos { album_id: i64 },
}

impl ApiRequest {
    pub fn path(&self) -> &'static str {
        match self {
            ApiRequest::GetUsers => "/users",
            ApiRequest::GetAlbums { .. } => "/albums",
            ApiRequest::GetPhotos { .. } => "/photos",
        }
    }

    /// The single integer query parameter, if the resource takes one.
    pub fn query(&self) -> Option<(&'static str, i64)> {
        match self {
            ApiRequest::GetUsers => None,
            ApiRequest::GetAlbums { user_id } => Some(("userId", *user_id)),
            ApiRequest::GetPhotos { album_id } => Some(("albumId", *album_id)),
        }
    }

    /// Resource name used in log fields and error messages.
    pub fn resource(&self) -> &'static str {
        match self {
            ApiRequest::GetUsers => "users",
            ApiRequest::GetAlbums { .. } => "albums",
            ApiRequest::GetPhotos { .. } => "photos",
        }
    }
}
