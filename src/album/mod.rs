//! Album screen: load an album's photos and filter them by a live query.

mod controller;
mod filter;
mod intent;
mod reducer;
mod state;

pub use controller::AlbumController;
pub use filter::filter_photos;
pub use intent::AlbumIntent;
pub use reducer::AlbumReducer;
pub use state::AlbumState;
