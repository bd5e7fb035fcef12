//! Resolved media sources
//!
//! The server's answer to a playback request: how the item will be played
//! and which streams it carries. Deserialized from the server's PascalCase
//! JSON.

use crate::profile::SubtitleDeliveryMethod;
use serde::{Deserialize, Serialize};

/// How the server delivers the item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMethod {
    /// Original file, decoded natively
    DirectPlay,
    /// Remuxed container, codecs unchanged
    DirectStream,
    /// Re-encoded by the server
    Transcode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaStreamType {
    Audio,
    Video,
    Subtitle,
    #[serde(other)]
    Other,
}

/// One elementary stream of a media source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MediaStream {
    /// Server-side stream index, unique within the source
    pub index: i32,

    #[serde(rename = "Type")]
    pub stream_type: MediaStreamType,

    #[serde(default)]
    pub is_external: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_method: Option<SubtitleDeliveryMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, rename = "DisplayTitle", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_url: Option<String>,
}

impl MediaStream {
    /// Carried inside the main container
    pub fn is_embedded(&self) -> bool {
        !self.is_external
    }

    /// Effective subtitle delivery; an unset method follows `is_external`
    pub fn subtitle_delivery(&self) -> SubtitleDeliveryMethod {
        self.delivery_method.unwrap_or(if self.is_external {
            SubtitleDeliveryMethod::External
        } else {
            SubtitleDeliveryMethod::Embed
        })
    }
}

/// Server-resolved playback source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResolvedMediaSource {
    pub id: String,

    #[serde(default)]
    pub item_id: String,

    pub play_method: PlayMethod,

    #[serde(default)]
    pub container: Option<String>,

    #[serde(default)]
    pub bitrate: Option<u64>,

    /// Direct URL of the file for direct play and direct stream
    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub transcoding_url: Option<String>,

    #[serde(default)]
    pub media_streams: Vec<MediaStream>,

    #[serde(default, rename = "DefaultAudioStreamIndex")]
    pub selected_audio_stream: Option<i32>,

    #[serde(default, rename = "DefaultSubtitleStreamIndex")]
    pub selected_subtitle_stream: Option<i32>,
}

impl ResolvedMediaSource {
    /// Parse a source from the server's JSON
    pub fn from_json_str(json: &str) -> crate::utils::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn stream(&self, index: i32) -> Option<&MediaStream> {
        self.media_streams.iter().find(|s| s.index == index)
    }

    pub fn streams_of(&self, stream_type: MediaStreamType) -> impl Iterator<Item = &MediaStream> {
        self.media_streams.iter().filter(move |s| s.stream_type == stream_type)
    }

    pub fn audio_streams(&self) -> impl Iterator<Item = &MediaStream> {
        self.streams_of(MediaStreamType::Audio)
    }

    pub fn subtitle_streams(&self) -> impl Iterator<Item = &MediaStream> {
        self.streams_of(MediaStreamType::Subtitle)
    }

    pub fn video_stream(&self) -> Option<&MediaStream> {
        self.streams_of(MediaStreamType::Video).next()
    }

    /// Position of `stream` among the embedded streams of its type
    ///
    /// External streams do not occupy renderer track-group slots and are
    /// not counted. Returns `None` for an external stream or one that does
    /// not belong to this source.
    pub fn embedded_index(&self, stream: &MediaStream) -> Option<usize> {
        if !stream.is_embedded() {
            return None;
        }
        self.streams_of(stream.stream_type)
            .filter(|s| s.is_embedded())
            .position(|s| s.index == stream.index)
    }

    /// URL the renderer should open
    pub fn playback_url(&self) -> Option<&str> {
        match self.play_method {
            PlayMethod::Transcode => self.transcoding_url.as_deref(),
            PlayMethod::DirectPlay | PlayMethod::DirectStream => self.path.as_deref(),
        }
    }

    pub fn select_audio_stream(&mut self, index: i32) {
        self.selected_audio_stream = Some(index);
    }

    pub fn select_subtitle_stream(&mut self, index: Option<i32>) {
        self.selected_subtitle_stream = index;
    }

    pub fn is_transcoding(&self) -> bool {
        self.play_method == PlayMethod::Transcode
    }
}
