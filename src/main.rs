use std::process::ExitCode;
use std::sync::Arc;

use albumview::album::AlbumController;
use albumview::api::{AlbumsApi, ApiClient};
use albumview::cli::{render_photos, render_profile, Cli, Command};
use albumview::config::Config;
use albumview::logging::init_tracing;
use albumview::profile::{selector_for, ProfileController};
use anyhow::Context;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate()?;
    }

    let client =
        ApiClient::with_base_url(&config.api.base_url).context("Failed to create API client")?;
    let api: Arc<dyn AlbumsApi> = Arc::new(client);

    let profile = ProfileController::new(api.clone())
        .with_selector(selector_for(&config.profile))
        .with_ordering(config.fetch.ordering);
    let album = AlbumController::new(api).with_ordering(config.fetch.ordering);

    match cli.command {
        Command::Profile => {
            profile.fetch_user_and_albums().await;
            let state = profile.state();
            if let Some(message) = &state.error_message {
                eprintln!("error: {}", message);
                return Ok(ExitCode::FAILURE);
            }
            print!("{}", render_profile(&state));
        }
        Command::Photos { album_id, search } => {
            return Ok(show_photos(&album, album_id, search).await);
        }
        Command::Browse { search } => {
            profile.fetch_user_and_albums().await;
            let state = profile.state();
            if let Some(message) = &state.error_message {
                eprintln!("error: {}", message);
                return Ok(ExitCode::FAILURE);
            }
            print!("{}", render_profile(&state));

            let Some(first) = state.albums.first() else {
                return Ok(ExitCode::SUCCESS);
            };
            println!();
            return Ok(show_photos(&album, first.id, search).await);
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn show_photos(
    album: &AlbumController,
    album_id: i64,
    search: Option<String>,
) -> ExitCode {
    if let Some(query) = search {
        album.set_search_query(query);
    }
    album.fetch_photos(album_id).await;

    let state = album.state();
    if let Some(message) = &state.error_message {
        eprintln!("error: {}", message);
        return ExitCode::FAILURE;
    }
    print!("{}", render_photos(&state));
    ExitCode::SUCCESS
}
