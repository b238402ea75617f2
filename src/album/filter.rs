use crate::models::Photo;

/// Photos whose title contains `query` (case-insensitive), in original order.
///
/// An empty query returns every photo.
pub fn filter_photos(photos: &[Photo], query: &str) -> Vec<Photo> {
    if query.is_empty() {
        return photos.to_vec();
    }
    photos
        .iter()
        .filter(|p| p.matches_query(query))
        .cloned()
        .collect()
}
