use clap::Parser;
use clap::Subcommand;
use resonate_core::TrackId;
use resonate_core::recommend::DEFAULT_LOOKBACK_LIMIT;
use resonate_core::recommend::DEFAULT_RECOMMENDATION_LIMIT;
use resonate_core::recommend::RecentOptions;
use resonate_core::recommend::formatted_tracks;
use resonate_core::recommend::recommend_for_track;
use resonate_core::recommend::recommend_from_recent;
use resonate_core::waveform::track_soundwave;
use resonate_init::init;
use resonate_spotify_api::SpotifyClient;
use resonate_spotify_api::auth::pkce::get_bearer_token_via_pkce;
use resonate_spotify_api::config::SpotifyConfig;
use serde::Serialize;
use tracing::debug;

/// Reshape Spotify track data: soundwaves, feature summaries and recommendations.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 1000-point normalized loudness curve for a track
    Soundwave { track_id: String },
    /// Typed audio analysis for a track
    Analysis { track_id: String },
    /// Tracks with their audio features
    Features {
        #[arg(required = true)]
        track_ids: Vec<String>,
    },
    /// Recommendations from one track, or the one currently playing
    Recommend {
        #[arg(long)]
        track_id: Option<String>,
        #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
        limit: u32,
    },
    /// Recommendations seeded by the current track and recent history
    Recent {
        #[arg(long, default_value_t = DEFAULT_LOOKBACK_LIMIT)]
        lookback_limit: u32,
        #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
        rec_limit: u32,
        /// Constrain results to the tempo/danceability/energy range of the seeds
        #[arg(long)]
        constrain_to_range: bool,
    },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;
    let cli = Cli::parse();

    let config = SpotifyConfig::from_env()?;
    let bearer = get_bearer_token_via_pkce(&config).await?;
    let client = SpotifyClient::new(&config, bearer);
    debug!("Running {:?}", cli.command);

    match cli.command {
        Command::Soundwave { track_id } => {
            print_json(&track_soundwave(&client, &TrackId(track_id)).await?)
        }
        Command::Analysis { track_id } => {
            print_json(&client.get_audio_analysis(&TrackId(track_id)).await?)
        }
        Command::Features { track_ids } => {
            let ids: Vec<TrackId> = track_ids.into_iter().map(TrackId).collect();
            print_json(&formatted_tracks(&client, &ids).await?)
        }
        Command::Recommend { track_id, limit } => {
            let track_id = track_id.map(TrackId);
            print_json(&recommend_for_track(&client, track_id.as_ref(), limit).await?)
        }
        Command::Recent {
            lookback_limit,
            rec_limit,
            constrain_to_range,
        } => {
            let options = RecentOptions {
                lookback_limit,
                rec_limit,
                constrain_to_range,
            };
            print_json(&recommend_from_recent(&client, options).await?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
