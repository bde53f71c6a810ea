//! Prints the profile of the user owning an access token
//!
//! Usage:
//!   SPOTIFY_TOKEN=BQD... cargo run --example current_user
//!
//! The token needs the `user-read-private` and `user-read-email` scopes for
//! the country, product and email fields to be filled.

use pmospotify::{RequestOptions, SpotifyClient, TimeRange};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let token = match env::var("SPOTIFY_TOKEN") {
        Ok(token) => token,
        Err(_) => {
            eprintln!("Set SPOTIFY_TOKEN to an OAuth access token");
            std::process::exit(1);
        }
    };

    let client = SpotifyClient::new(token)?;

    let me = client.current_user().await?;
    println!("User:     {}", me.display_name.as_deref().unwrap_or(&me.id));
    println!("URI:      {}", me.uri);
    if let Some(country) = &me.country {
        println!("Country:  {}", country);
    }
    if let Some(product) = &me.product {
        println!("Product:  {}", product);
    }
    if let Some(followers) = &me.followers {
        println!("Followers: {}", followers.total);
    }

    let top = client
        .current_users_top_artists(RequestOptions::new().limit(5).timerange(TimeRange::Short))
        .await?;
    println!();
    println!("Top artists (last 4 weeks):");
    for (i, artist) in top.items.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, artist.name, artist.genres.join(", "));
    }

    Ok(())
}
