//! Renderer boundary
//!
//! The decode/render pipeline is a black box that exposes its current track
//! groups and accepts selection commands. Group indices are only valid until
//! the next [`TrackRenderer::prepare`].

use crate::decoder::codec_table::subtitle_transport_format_for;
use crate::player::media_source::{MediaStreamType, ResolvedMediaSource};
use crate::profile::SubtitleDeliveryMethod;
use log::warn;
use std::time::Duration;

/// Prefix of the synthetic track id given to sidecar subtitles
pub const EXTERNAL_SUBTITLE_ID_PREFIX: &str = "external:";

/// Synthetic track id for the external subtitle with server index `index`
pub fn external_subtitle_id(index: i32) -> String {
    format!("{}{}", EXTERNAL_SUBTITLE_ID_PREFIX, index)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackType {
    Audio,
    Video,
    Text,
}

/// Format metadata of one track as reported by the renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackFormat {
    pub id: Option<String>,
    pub codec: Option<String>,
    pub language: Option<String>,
    pub label: Option<String>,
}

/// A selection unit of one or more tracks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackGroup {
    pub track_type: TrackType,
    pub tracks: Vec<TrackFormat>,
}

impl TrackGroup {
    pub fn first_id(&self) -> Option<&str> {
        self.tracks.first().and_then(|t| t.id.as_deref())
    }

    /// Whether this group was added from a sidecar subtitle
    pub fn is_external(&self) -> bool {
        self.first_id().is_some_and(|id| id.starts_with(EXTERNAL_SUBTITLE_ID_PREFIX))
    }
}

/// A sidecar subtitle handed to the renderer on prepare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalSubtitle {
    pub id: String,
    pub url: String,
    pub mime_type: &'static str,
    pub language: Option<String>,
    pub label: Option<String>,
}

/// Everything the renderer needs to (re)start playback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedMedia {
    pub source_id: String,
    pub url: Option<String>,
    pub external_subtitles: Vec<ExternalSubtitle>,
    pub start_position: Duration,
}

impl PreparedMedia {
    pub fn new(source: &ResolvedMediaSource, start_position: Duration) -> Self {
        Self {
            source_id: source.id.clone(),
            url: source.playback_url().map(str::to_string),
            external_subtitles: external_subtitle_tracks(source),
            start_position,
        }
    }
}

/// Media rendering component
pub trait TrackRenderer: Send {
    /// Current track groups, in renderer order
    fn track_groups(&self) -> Vec<TrackGroup>;

    /// Override the selection for `track_type` with the group at `group_index`
    ///
    /// # Arguments
    ///
    /// * `track_type` - Renderer type the override applies to
    /// * `group_index` - Index into [`TrackRenderer::track_groups`]
    ///
    /// # Returns
    ///
    /// Returns `false` if the renderer rejected the override
    fn select_track_group(&mut self, track_type: TrackType, group_index: usize) -> bool;

    /// Clear any override for `track_type` and disable its renderer
    fn clear_and_disable(&mut self, track_type: TrackType);

    /// Load new media; invalidates all group indices
    fn prepare(&mut self, media: &PreparedMedia);

    /// Current playback position
    fn position(&self) -> Duration;
}

/// Sidecar subtitle tracks for `source`
///
/// Streams without a delivery URL or with a format the renderer cannot
/// load are skipped.
pub fn external_subtitle_tracks(source: &ResolvedMediaSource) -> Vec<ExternalSubtitle> {
    source
        .streams_of(MediaStreamType::Subtitle)
        .filter(|s| s.subtitle_delivery() == SubtitleDeliveryMethod::External)
        .filter_map(|stream| {
            let url = stream.delivery_url.as_ref()?;
            let codec = stream.codec.as_deref().unwrap_or_default();
            let Some(mime_type) = subtitle_transport_format_for(codec) else {
                warn!("No transport format for external subtitle {} ({})", stream.index, codec);
                return None;
            };
            Some(ExternalSubtitle {
                id: external_subtitle_id(stream.index),
                url: url.clone(),
                mime_type,
                language: stream.language.clone(),
                label: stream.title.clone(),
            })
        })
        .collect()
}
