//! Player module for directplay
//!
//! This module drives stream selection for an active playback session:
//! mapping server streams onto renderer track groups, deciding between a
//! live override and a full restart, and offering quality choices.

mod controller;
pub mod media_source;
pub mod quality;
pub mod restart;
pub mod track_selection;
pub mod tracks;

pub use controller::{AudioChange, PlaybackController, RestartStatus};
pub use media_source::{MediaStream, MediaStreamType, PlayMethod, ResolvedMediaSource};
pub use quality::{quality_options, selected_bitrate, QualityOption, QualityRequest};
pub use restart::{MediaSourceResolver, PlaybackRequest, RestartCoordinator, RestartOutcome};
pub use track_selection::{TrackChange, TrackSelector};
pub use tracks::{
    external_subtitle_id, external_subtitle_tracks, ExternalSubtitle, PreparedMedia, TrackFormat, TrackGroup,
    TrackRenderer, TrackType, EXTERNAL_SUBTITLE_ID_PREFIX,
};

use crate::utils::config::Config;

/// Playback settings of one controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackSettings {
    /// Device profile name
    pub device_name: String,

    /// Streaming bitrate cap in bits per second
    pub max_streaming_bitrate: u64,

    /// Server-chosen bitrate
    pub automatic_quality: bool,

    /// Offer "Auto" in the quality menu
    pub include_auto_quality: bool,

    /// Keep the server's default subtitle on start
    pub subtitles_enabled: bool,
}

impl From<&Config> for PlaybackSettings {
    fn from(config: &Config) -> Self {
        Self {
            device_name: config.profile.name.clone(),
            max_streaming_bitrate: config.profile.max_streaming_bitrate,
            automatic_quality: config.playback.automatic_quality,
            include_auto_quality: config.playback.include_auto_quality,
            subtitles_enabled: config.playback.subtitles_enabled,
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}
