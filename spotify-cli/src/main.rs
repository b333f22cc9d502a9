use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use spotify_api::types::GidMediaType;
use spotify_api::{ApiConfig, SpotifyClient, id};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotify", version, about = "Spotify web-player API CLI")]
struct Cli {
    /// Netscape-format cookies exported from a logged-in browser
    #[arg(short, long, value_name = "PATH", default_value = "./cookies.txt", global = true)]
    cookies: PathBuf,
    /// Run anonymously, without loading cookies
    #[arg(long, global = true)]
    no_cookies: bool,
    /// Log requests and token renewals to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show track metadata
    Track {
        /// Public track ID
        id: String,
    },
    /// Show album metadata with all tracks
    Album {
        /// Public album ID
        id: String,
        /// Only the first page of tracks
        #[arg(long)]
        no_extend: bool,
    },
    /// Show playlist metadata with all tracks
    Playlist {
        /// Public playlist ID
        id: String,
        /// Only the first page of tracks
        #[arg(long)]
        no_extend: bool,
    },
    /// Show episode metadata
    Episode {
        /// Public episode ID
        id: String,
    },
    /// Show podcast metadata with all episodes
    Show {
        /// Public show ID
        id: String,
        /// Only the first page of episodes
        #[arg(long)]
        no_extend: bool,
    },
    /// Get synced lyrics
    Lyrics {
        /// Public track ID
        id: String,
    },
    /// Get track credits
    Credits {
        /// Public track ID
        id: String,
    },
    /// Show extended metadata (audio files, restrictions)
    GidMetadata {
        /// Public ID; converted to a GID before the request
        id: String,
        /// Resource kind
        #[arg(short = 't', long, default_value = "track")]
        r#type: GidKind,
    },
    /// Resolve CDN URLs for an audio file
    StreamUrls {
        /// Hex file ID from `gid-metadata`
        file_id: String,
    },
    /// Convert a public ID to a hex GID
    ToGid {
        /// Public ID
        id: String,
    },
    /// Convert a hex GID to a public ID
    ToId {
        /// Hex GID
        gid: String,
    },
}

#[derive(Clone, ValueEnum)]
enum GidKind {
    Track,
    Episode,
    Album,
    Artist,
    Show,
}

impl From<GidKind> for GidMediaType {
    fn from(k: GidKind) -> Self {
        match k {
            GidKind::Track => Self::Track,
            GidKind::Episode => Self::Episode,
            GidKind::Album => Self::Album,
            GidKind::Artist => Self::Artist,
            GidKind::Show => Self::Show,
        }
    }
}

fn main() -> Result<()> {
    let Cli {
        cookies,
        no_cookies,
        verbose,
        command,
    } = Cli::parse();
    init_logging(verbose);

    let open = || connect(&cookies, no_cookies);
    let value = match command {
        // ID conversion needs no session.
        Command::ToGid { id } => {
            println!("{}", id::to_internal(&id)?);
            return Ok(());
        }
        Command::ToId { gid } => {
            println!("{}", id::to_public(&gid)?);
            return Ok(());
        }
        Command::Track { id } => open()?.get_track(&id)?,
        Command::Album { id, no_extend } => (*open()?.get_album(&id, !no_extend)?).clone(),
        Command::Playlist { id, no_extend } => open()?.get_playlist(&id, !no_extend)?,
        Command::Episode { id } => open()?.get_episode(&id)?,
        Command::Show { id, no_extend } => open()?.get_show(&id, !no_extend)?,
        Command::Lyrics { id } => cmd_lyrics(&mut open()?, &id)?,
        Command::Credits { id } => open()?.get_track_credits(&id)?,
        Command::GidMetadata { id, r#type } => {
            let gid = id::to_internal(&id)?;
            open()?.get_gid_metadata(&gid, r#type.into())?
        }
        Command::StreamUrls { file_id } => serde_json::to_value(open()?.get_stream_urls(&file_id)?)?,
    };
    print_json(&value)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "spotify_api=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn connect(cookies: &Path, no_cookies: bool) -> Result<SpotifyClient> {
    let mut config = ApiConfig::default();
    if !no_cookies {
        config = config.with_cookies_path(cookies);
    }
    SpotifyClient::with_config(config).with_context(|| {
        if no_cookies {
            "failed to open an anonymous session".to_owned()
        } else {
            format!("failed to open a session with {}", cookies.display())
        }
    })
}

// ── lyrics ──

fn cmd_lyrics(client: &mut SpotifyClient, id: &str) -> Result<Value> {
    match client.get_lyrics(id)? {
        Some(lyrics) => Ok(lyrics),
        None => {
            eprintln!("No lyrics available.");
            Ok(Value::Null)
        }
    }
}

fn print_json(value: &Value) -> Result<()> {
    if value.is_null() {
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
