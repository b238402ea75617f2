//! Command-line presentation surface.
//!
//! Argument parsing and plain-text rendering of controller state. The wiring
//! to a runtime lives in `main.rs`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::album::AlbumState;
use crate::profile::ProfileState;

#[derive(Debug, Parser)]
#[command(name = "albumview", version, about = "Browse a user's photo albums")]
pub struct Cli {
    /// Path to a config file (default: ~/.config/albumview/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Pick a user and list their albums
    Profile,
    /// List the photos of one album
    Photos {
        album_id: i64,
        /// Only show photos whose title contains this text (case-insensitive)
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Pick a user, then list the photos of their first album
    Browse {
        #[arg(long, short)]
        search: Option<String>,
    },
}

pub fn render_profile(state: &ProfileState) -> String {
    let Some(user) = &state.user else {
        return "No user loaded\n".to_string();
    };

    let mut out = format!(
        "{} (#{})\n{}\n\nAlbums ({}):\n",
        user.name,
        user.id,
        user.address,
        state.albums.len()
    );
    for album in &state.albums {
        out.push_str(&format!("  {:>4}  {}\n", album.id, album.title));
    }
    out
}

pub fn render_photos(state: &AlbumState) -> String {
    let header = match state.album_id {
        Some(id) => format!("Album #{id}"),
        None => "Album".to_string(),
    };
    let mut out = if state.search_query.is_empty() {
        format!("{} ({} photos):\n", header, state.photos.len())
    } else {
        format!(
            "{} ({} of {} photos matching \"{}\"):\n",
            header,
            state.filtered_photos.len(),
            state.photos.len(),
            state.search_query
        )
    };
    for photo in &state.filtered_photos {
        out.push_str(&format!("  {:>5}  {}\n         {}\n", photo.id, photo.title, photo.url));
    }
    out
}
