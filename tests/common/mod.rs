//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod fake_api;
pub mod mock_backend;

use albumview::models::{Address, Album, Photo, User};
use std::net::TcpListener;
use std::time::Duration;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Give spawned observer tasks a chance to run.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(20)).await;
}

// -- Fixtures -----------------------------------------------------------------

pub fn user(id: i64) -> User {
    User {
        id,
        name: format!("User {id}"),
        address: Address {
            street: format!("{id} Kulas Light"),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
        },
    }
}

pub fn users(ids: &[i64]) -> Vec<User> {
    ids.iter().map(|&id| user(id)).collect()
}

pub fn album(id: i64, user_id: i64) -> Album {
    Album {
        id,
        user_id,
        title: format!("Album {id}"),
    }
}

pub fn albums_for(user_id: i64, ids: &[i64]) -> Vec<Album> {
    ids.iter().map(|&id| album(id, user_id)).collect()
}

pub fn photo(id: i64, album_id: i64, title: &str) -> Photo {
    Photo {
        id,
        album_id,
        title: title.to_string(),
        url: format!("https://via.placeholder.com/600/{id}"),
        thumbnail_url: format!("https://via.placeholder.com/150/{id}"),
    }
}

/// The three-photo album used by the search scenarios.
pub fn sunny_album(album_id: i64) -> Vec<Photo> {
    vec![
        photo(1, album_id, "Sunset"),
        photo(2, album_id, "sunrise"),
        photo(3, album_id, "Beach"),
    ]
}

pub fn titles(photos: &[Photo]) -> Vec<String> {
    photos.iter().map(|p| p.title.clone()).collect()
}
