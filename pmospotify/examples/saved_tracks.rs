//! Lists every track saved in the user's library
//!
//! The client is built from the pmoconfig settings, so the token can come
//! from `~/.pmospotify/config.yaml` or from the environment:
//!
//!   PMOSPOTIFY_CONFIG__SPOTIFY__ACCESS_TOKEN=BQD... cargo run --example saved_tracks
//!
//! Press Ctrl-C to stop early.

use pmoconfig::get_config;
use pmospotify::{
    CancellationToken, Error, RequestOptions, SpotifyClient, SpotifyConfigExt,
};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = get_config();

    // host.logger.min_level / host.logger.enable_console
    let registry = tracing_subscriber::registry().with(config.get_log_level_filter()?);
    if config.get_log_enable_console()? {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    } else {
        registry.init();
    }

    if config.get_spotify_access_token()?.is_none() {
        eprintln!("No access token in {}", config.path());
        eprintln!("Set PMOSPOTIFY_CONFIG__SPOTIFY__ACCESS_TOKEN or edit the file");
        std::process::exit(1);
    }

    let cancel = CancellationToken::new();
    let client = SpotifyClient::from_config()?.with_cancellation(cancel.clone());

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let mut opts = RequestOptions::new().limit(50);
    if let Some(market) = config.get_spotify_market()? {
        opts = opts.market(market);
    }

    let mut page = client.current_users_tracks(opts).await?;
    println!("{} saved tracks", page.total);

    let mut index = page.offset as usize;
    loop {
        for saved in &page.items {
            index += 1;
            let artists: Vec<&str> = saved.artists.iter().map(|a| a.name.as_str()).collect();
            println!(
                "{:>5}. {} - {} [{}]",
                index,
                artists.join(", "),
                saved.name,
                saved.added_at
            );
        }

        match client.next_page(&page).await {
            Ok(next) => page = next,
            Err(Error::NoMorePages) => break,
            Err(Error::Cancelled) => {
                println!("Interrupted");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
