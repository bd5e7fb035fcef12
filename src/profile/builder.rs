//! Device profile construction
//!
//! Turns a merged decoder capability set and a bitrate cap into a
//! [`DeviceProfile`]. Building never fails and is deterministic: output
//! order follows the fixed tables and the sorted capability set.

use crate::decoder::{CodecKind, DecoderCapabilities, DecoderCapability};
use crate::profile::tables::{self, ContainerSupport, TranscodingTarget};
use crate::profile::{
    CodecList, CodecProfile, DeviceProfile, DirectPlayProfile, ProfileCondition, ProfileProperty, SubtitleProfile,
    TranscodingProfile,
};
use log::{debug, info};
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Ceiling for static (download-style) playback, in bits per second
pub const MAX_STATIC_BITRATE: u64 = 100_000_000;

/// Bitrate the server transcodes music to, in bits per second
pub const MUSIC_STREAMING_TRANSCODING_BITRATE: u64 = 384_000;

/// Builds device profiles for one client name
#[derive(Debug, Clone)]
pub struct DeviceProfileBuilder {
    name: String,
}

impl DeviceProfileBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a device profile
    ///
    /// # Arguments
    ///
    /// * `capabilities` - Merged decoder capabilities
    /// * `max_streaming_bitrate` - User-configured streaming cap in bits per second
    ///
    /// # Returns
    ///
    /// Returns the profile. With no capabilities, the direct-play and codec
    /// sections are empty and the transcoding targets carry empty audio lists.
    pub fn build(&self, capabilities: &DecoderCapabilities, max_streaming_bitrate: u64) -> DeviceProfile {
        let video_codecs = capabilities.codec_names(CodecKind::Video);
        let audio_codecs = capabilities.codec_names(CodecKind::Audio);

        let profile = DeviceProfile {
            name: self.name.clone(),
            max_streaming_bitrate,
            max_static_bitrate: MAX_STATIC_BITRATE,
            music_streaming_transcoding_bitrate: MUSIC_STREAMING_TRANSCODING_BITRATE,
            direct_play_profiles: direct_play_profiles(&video_codecs, &audio_codecs),
            codec_profiles: capabilities.iter().map(codec_profile).collect(),
            subtitle_profiles: subtitle_profiles(),
            transcoding_profiles: tables::TRANSCODING_TARGETS
                .iter()
                .map(|target| transcoding_profile(target, &audio_codecs))
                .collect(),
        };

        info!(
            "Built device profile '{}': {} direct play, {} codec profiles, max streaming bitrate {}",
            profile.name,
            profile.direct_play_profiles.len(),
            profile.codec_profiles.len(),
            max_streaming_bitrate
        );

        profile
    }
}

/// Table codecs that are also locally decodable, in table order
fn supported<'a>(table: &'a [&'static str], local: &'a BTreeSet<String>) -> impl Iterator<Item = &'static str> + 'a {
    table.iter().copied().filter(move |codec| local.contains(*codec))
}

fn direct_play_profiles(video_codecs: &BTreeSet<String>, audio_codecs: &BTreeSet<String>) -> Vec<DirectPlayProfile> {
    let mut profiles = Vec::new();

    for ContainerSupport { container, video_codecs: table_video, audio_codecs: table_audio } in tables::CONTAINERS {
        let video = CodecList::new(supported(table_video, video_codecs));
        let audio = CodecList::new(supported(table_audio, audio_codecs));

        if !video.is_empty() {
            profiles.push(DirectPlayProfile {
                container: container.to_string(),
                kind: CodecKind::Video,
                video_codec: Some(video),
                audio_codec: audio.clone(),
            });
        } else if !table_video.is_empty() {
            debug!("No decodable video codec for container {}", container);
        }

        if !audio.is_empty() && table_video.is_empty() {
            profiles.push(DirectPlayProfile {
                container: container.to_string(),
                kind: CodecKind::Audio,
                video_codec: None,
                audio_codec: audio,
            });
        }
    }

    profiles
}

/// Conditions are emitted as bitrate, profile, level
fn codec_profile(capability: &DecoderCapability) -> CodecProfile {
    let mut conditions = Vec::with_capacity(3);

    match capability.kind {
        CodecKind::Video => {
            conditions.push(ProfileCondition::less_than_equal(ProfileProperty::VideoBitrate, capability.max_bitrate));
            if !capability.profiles.is_empty() {
                conditions.push(ProfileCondition::equals_any(
                    ProfileProperty::VideoProfile,
                    capability.profiles.iter().map(String::as_str),
                ));
            }
            if let Some(level) = capability.max_level() {
                conditions.push(ProfileCondition::less_than_equal(ProfileProperty::VideoLevel, level));
            }
        }
        CodecKind::Audio => {
            conditions.push(ProfileCondition::less_than_equal(ProfileProperty::AudioBitrate, capability.max_bitrate));
        }
    }

    CodecProfile {
        kind: capability.kind,
        codec: capability.codec.clone(),
        conditions,
    }
}

fn subtitle_profiles() -> Vec<SubtitleProfile> {
    tables::SUBTITLES
        .iter()
        .map(|&(format, method)| SubtitleProfile { format: format.to_string(), method })
        .collect()
}

fn transcoding_profile(target: &TranscodingTarget, audio_codecs: &BTreeSet<String>) -> TranscodingProfile {
    TranscodingProfile {
        container: target.container.to_string(),
        kind: target.kind,
        video_codec: target.video_codec.map(str::to_string),
        audio_codec: CodecList::new(supported(target.audio_candidates, audio_codecs)),
        context: target.context,
        protocol: target.protocol,
        max_audio_channels: target.max_audio_channels.map(str::to_string),
        min_segments: target.min_segments,
        break_on_non_key_frames: target.break_on_non_key_frames,
        copy_timestamps: target.copy_timestamps,
    }
}

/// Device profile cached per bitrate cap
///
/// The profile is rebuilt on first use and whenever the requested cap
/// differs from the one the cached profile was built with.
#[derive(Debug)]
pub struct DeviceProfileCache {
    builder: DeviceProfileBuilder,
    capabilities: Arc<DecoderCapabilities>,
    current: Mutex<Option<(u64, Arc<DeviceProfile>)>>,
}

impl DeviceProfileCache {
    pub fn new(builder: DeviceProfileBuilder, capabilities: Arc<DecoderCapabilities>) -> Self {
        Self {
            builder,
            capabilities,
            current: Mutex::new(None),
        }
    }

    /// Profile for `max_streaming_bitrate`, rebuilding if the cap changed
    pub fn profile_for(&self, max_streaming_bitrate: u64) -> Arc<DeviceProfile> {
        let mut current = self.current.lock();
        if let Some((bitrate, profile)) = current.as_ref() {
            if *bitrate == max_streaming_bitrate {
                return Arc::clone(profile);
            }
            debug!("Bitrate cap changed {} -> {}, rebuilding profile", bitrate, max_streaming_bitrate);
        }

        let profile = Arc::new(self.builder.build(&self.capabilities, max_streaming_bitrate));
        *current = Some((max_streaming_bitrate, Arc::clone(&profile)));
        profile
    }

    pub fn capabilities(&self) -> &Arc<DecoderCapabilities> {
        &self.capabilities
    }
}
