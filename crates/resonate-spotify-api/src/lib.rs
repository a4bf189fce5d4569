pub mod audio_analysis;
pub mod bearer_token;
pub mod catalog;
pub mod config;
pub mod fetch;
pub mod get_audio_analysis;
pub mod get_currently_playing;
pub mod get_recently_played;
pub mod get_recommendations;
pub mod get_several_audio_features;
pub mod get_several_tracks;
pub mod get_track;
pub mod player;
pub mod recommendations;
pub mod track;
pub mod track_audio_features;
pub mod auth {
    pub mod pkce;
}

pub use fetch::SpotifyClient;
