//! Device profile module for directplay
//!
//! The [`DeviceProfile`] is the document sent to the server to negotiate
//! how an item is played. Its JSON shape is matched structurally by the
//! server, so field names and the presence/omission of optional fields are
//! part of the contract:
//!
//! - codec lists are comma-joined strings and may be empty,
//! - `VideoCodec` is omitted on audio-only entries,
//! - optional transcoding tuning fields are omitted when unset.

mod builder;
pub mod tables;

pub use builder::{DeviceProfileBuilder, DeviceProfileCache};

use crate::decoder::CodecKind;
use crate::utils::error::Result;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Negotiation document describing what this device can play
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeviceProfile {
    pub name: String,
    pub max_streaming_bitrate: u64,
    pub max_static_bitrate: u64,
    pub music_streaming_transcoding_bitrate: u64,
    pub direct_play_profiles: Vec<DirectPlayProfile>,
    pub codec_profiles: Vec<CodecProfile>,
    pub subtitle_profiles: Vec<SubtitleProfile>,
    pub transcoding_profiles: Vec<TranscodingProfile>,
}

impl DeviceProfile {
    /// Serialize to the JSON body expected by the negotiation API
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Local pre-check: would the server allow direct play of this combination?
    ///
    /// Only container and codec names are checked; codec conditions are
    /// evaluated by the server.
    pub fn supports_direct_play(&self, container: &str, video_codec: Option<&str>, audio_codec: Option<&str>) -> bool {
        let kind = if video_codec.is_some() { CodecKind::Video } else { CodecKind::Audio };
        self.direct_play_profiles
            .iter()
            .filter(|p| p.kind == kind && p.container.eq_ignore_ascii_case(container))
            .any(|p| {
                let video_ok = match (video_codec, &p.video_codec) {
                    (Some(codec), Some(list)) => list.contains(codec),
                    (Some(_), None) => false,
                    (None, _) => true,
                };
                let audio_ok = audio_codec.map_or(true, |codec| p.audio_codec.contains(codec));
                video_ok && audio_ok
            })
    }
}

/// Codec names carried on the wire as one comma-joined string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecList(Vec<String>);

impl CodecList {
    pub fn new<I, S>(codecs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(codecs.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, codec: &str) -> bool {
        self.0.iter().any(|c| c.eq_ignore_ascii_case(codec))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for CodecList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

impl Serialize for CodecList {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CodecList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let joined = String::deserialize(deserializer)?;
        Ok(CodecList::new(joined.split(',').map(str::trim).filter(|c| !c.is_empty())))
    }
}

/// Container/codec combination the device can play without server work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectPlayProfile {
    pub container: String,

    #[serde(rename = "Type")]
    pub kind: CodecKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<CodecList>,

    pub audio_codec: CodecList,
}

/// Constraints for one codec
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodecProfile {
    #[serde(rename = "Type")]
    pub kind: CodecKind,

    pub codec: String,

    pub conditions: Vec<ProfileCondition>,
}

/// A single constraint clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileCondition {
    pub condition: ConditionType,
    pub property: ProfileProperty,
    pub value: String,
}

impl ProfileCondition {
    pub fn less_than_equal(property: ProfileProperty, value: impl ToString) -> Self {
        Self {
            condition: ConditionType::LessThanEqual,
            property,
            value: value.to_string(),
        }
    }

    /// `EqualsAny` takes a `|`-joined list of accepted values
    pub fn equals_any<'a>(property: ProfileProperty, values: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            condition: ConditionType::EqualsAny,
            property,
            value: values.into_iter().collect::<Vec<_>>().join("|"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionType {
    LessThanEqual,
    EqualsAny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfileProperty {
    AudioBitrate,
    VideoBitrate,
    VideoProfile,
    VideoLevel,
}

/// How a subtitle format reaches the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubtitleDeliveryMethod {
    /// Inside the media container
    Embed,
    /// As a separate sidecar file
    External,
    /// Burned into the video by the server
    Encode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubtitleProfile {
    pub format: String,
    pub method: SubtitleDeliveryMethod,
}

/// Fallback target the server transcodes to when direct play is impossible
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TranscodingProfile {
    pub container: String,

    #[serde(rename = "Type")]
    pub kind: CodecKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,

    /// Empty when no fallback audio codec is decodable
    pub audio_codec: CodecList,

    pub context: EncodingContext,

    pub protocol: StreamProtocol,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_audio_channels: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_segments: Option<u32>,

    pub break_on_non_key_frames: bool,

    pub copy_timestamps: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodingContext {
    Streaming,
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamProtocol {
    Http,
    Hls,
}
