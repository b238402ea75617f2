//! Photo-album browsing core.
//!
//! Two data controllers ([`profile::ProfileController`] and
//! [`album::AlbumController`]) fetch through a shared [`api::AlbumsApi`] and
//! publish immutable state snapshots for presentation surfaces to observe.

pub mod album;
pub mod api;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod models;
pub mod mvi;
pub mod profile;
