use clap::{Parser, Subcommand};
use std::sync::Arc;

use encore::{PlaylistDetails, PlaylistWriter, SetlistEngine, SetlistFmApi, SpotifyApi};

#[derive(Parser)]
#[command(name = "encore-cli")]
#[command(about = "Add live setlist songs to a Spotify playlist", long_about = None)]
struct Cli {
    /// Spotify access token (can also be set via SPOTIFY_TOKEN env var)
    #[arg(long, env = "SPOTIFY_TOKEN")]
    spotify_token: String,

    /// setlist.fm API key (can also be set via SETLISTFM_KEY env var)
    #[arg(long, env = "SETLISTFM_KEY")]
    setlistfm_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve an artist's latest qualifying setlist and append it to a playlist
    AddSetlist {
        /// Artist to add to the playlist
        #[arg(short, long)]
        artist: String,

        /// Spotify playlist identifier where to add songs
        #[arg(short, long)]
        playlist_id: String,

        /// Minimum number of songs a setlist must have to qualify
        #[arg(long, default_value_t = 5)]
        min_setlist_songs: usize,
    },
    /// Create a new playlist for a user
    CreatePlaylist {
        /// Spotify user identifier owning the playlist
        #[arg(short, long)]
        user_id: String,

        /// Playlist name
        #[arg(short, long)]
        name: String,

        /// Playlist description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Make the playlist publicly visible
        #[arg(long)]
        public: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let spotify = Arc::new(SpotifyApi::new(cli.spotify_token.as_str()));

    match cli.command {
        Commands::AddSetlist {
            artist,
            playlist_id,
            min_setlist_songs,
        } => {
            println!(
                "Adding latest setlist songs for {} into Spotify playlist with id {}",
                artist, playlist_id
            );

            let mut engine = SetlistEngine::new(
                Arc::new(SetlistFmApi::new(cli.setlistfm_key.as_str())),
                spotify.clone(),
                spotify,
            );
            engine.set_min_songs(min_setlist_songs);

            if let Err(e) = engine.add_setlist(&playlist_id, &artist).await {
                eprintln!("Could not add songs to playlist: {}", e);
                std::process::exit(1);
            }

            println!("Done");
        }
        Commands::CreatePlaylist {
            user_id,
            name,
            description,
            public,
        } => {
            println!("Creating playlist {} for user {}", name, user_id);

            let details = PlaylistDetails::new(name, description, public);
            if let Err(e) = spotify.create_playlist(&user_id, &details).await {
                eprintln!("Could not create playlist: {}", e);
                std::process::exit(1);
            }

            println!("Done");
        }
    }

    Ok(())
}
