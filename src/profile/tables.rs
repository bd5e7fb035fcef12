//! Fixed tables used when building a device profile
//!
//! These encode which codecs each container can carry, which subtitle
//! formats can be delivered and how, and the transcoding targets the server
//! falls back to. They are domain knowledge, independent of the local
//! decoders. Entry order is significant: it drives the output order of the
//! generated profile.

use crate::decoder::CodecKind;
use crate::profile::{EncodingContext, StreamProtocol, SubtitleDeliveryMethod};

/// Codecs a container may carry
#[derive(Debug, Clone, Copy)]
pub struct ContainerSupport {
    pub container: &'static str,
    pub video_codecs: &'static [&'static str],
    pub audio_codecs: &'static [&'static str],
}

const PCM_CODECS: &[&str] = &["pcm_s16le", "pcm_s16be", "pcm_s24le", "pcm_s24be", "pcm_f32le"];

const MKV_AUDIO: &[&str] = &[
    "aac", "ac3", "alac", "dts", "eac3", "flac", "mp2", "mp3", "opus", "pcm_s16le", "pcm_s16be", "pcm_s24le",
    "pcm_s24be", "pcm_f32le", "truehd", "vorbis",
];

/// Per-container codec support, in output order
pub const CONTAINERS: &[ContainerSupport] = &[
    ContainerSupport {
        container: "mp4",
        video_codecs: &["h263", "mpeg4", "h264", "hevc", "av1", "vp9"],
        audio_codecs: &["mp1", "mp2", "mp3", "aac", "alac", "ac3", "eac3", "dts", "opus", "flac", "vorbis"],
    },
    ContainerSupport {
        container: "fmp4",
        video_codecs: &["h264", "hevc", "av1", "vp9"],
        audio_codecs: &["mp3", "aac", "ac3", "eac3", "alac", "flac", "opus"],
    },
    ContainerSupport {
        container: "webm",
        video_codecs: &["vp8", "vp9", "av1"],
        audio_codecs: &["vorbis", "opus"],
    },
    ContainerSupport {
        container: "mkv",
        video_codecs: &["mpeg1video", "mpeg2video", "h263", "mpeg4", "h264", "hevc", "av1", "vp8", "vp9"],
        audio_codecs: MKV_AUDIO,
    },
    ContainerSupport {
        container: "mp3",
        video_codecs: &[],
        audio_codecs: &["mp3"],
    },
    ContainerSupport {
        container: "ogg",
        video_codecs: &[],
        audio_codecs: &["vorbis", "opus", "flac"],
    },
    ContainerSupport {
        container: "wav",
        video_codecs: &[],
        audio_codecs: PCM_CODECS,
    },
    ContainerSupport {
        container: "mpegts",
        video_codecs: &["mpeg1video", "mpeg2video", "mpeg4", "h264", "hevc"],
        audio_codecs: &["mp1", "mp2", "mp3", "aac", "ac3", "eac3", "dts", "mlp", "truehd"],
    },
    ContainerSupport {
        container: "flv",
        video_codecs: &["mpeg4", "h264"],
        audio_codecs: &["mp3", "aac"],
    },
    ContainerSupport {
        container: "aac",
        video_codecs: &[],
        audio_codecs: &["aac"],
    },
    ContainerSupport {
        container: "flac",
        video_codecs: &[],
        audio_codecs: &["flac"],
    },
    ContainerSupport {
        container: "3gp",
        video_codecs: &["h263", "mpeg4", "h264", "hevc"],
        audio_codecs: &["amr_nb", "amr_wb", "aac"],
    },
];

/// Subtitle formats and how each can reach the client, in output order
pub const SUBTITLES: &[(&str, SubtitleDeliveryMethod)] = &[
    ("ass", SubtitleDeliveryMethod::Embed),
    ("dvbsub", SubtitleDeliveryMethod::Embed),
    ("pgssub", SubtitleDeliveryMethod::Embed),
    ("srt", SubtitleDeliveryMethod::Embed),
    ("ssa", SubtitleDeliveryMethod::Embed),
    ("subrip", SubtitleDeliveryMethod::Embed),
    ("ttml", SubtitleDeliveryMethod::Embed),
    ("ass", SubtitleDeliveryMethod::External),
    ("srt", SubtitleDeliveryMethod::External),
    ("ssa", SubtitleDeliveryMethod::External),
    ("subrip", SubtitleDeliveryMethod::External),
    ("ttml", SubtitleDeliveryMethod::External),
    ("vtt", SubtitleDeliveryMethod::External),
    ("webvtt", SubtitleDeliveryMethod::External),
    ("dvdsub", SubtitleDeliveryMethod::Encode),
    ("pgs", SubtitleDeliveryMethod::Encode),
];

/// A transcoding fallback target
///
/// `audio_candidates` is narrowed to locally decodable codecs when the
/// profile is built. Everything else is emitted as is.
#[derive(Debug, Clone, Copy)]
pub struct TranscodingTarget {
    pub container: &'static str,
    pub kind: CodecKind,
    pub video_codec: Option<&'static str>,
    pub audio_candidates: &'static [&'static str],
    pub context: EncodingContext,
    pub protocol: StreamProtocol,
    pub max_audio_channels: Option<&'static str>,
    pub min_segments: Option<u32>,
    pub break_on_non_key_frames: bool,
    pub copy_timestamps: bool,
}

pub const TRANSCODING_TARGETS: &[TranscodingTarget] = &[
    TranscodingTarget {
        container: "ts",
        kind: CodecKind::Video,
        video_codec: Some("h264"),
        audio_candidates: &["mp1", "mp2", "mp3", "aac", "ac3", "eac3", "dts", "mlp", "truehd"],
        context: EncodingContext::Streaming,
        protocol: StreamProtocol::Hls,
        max_audio_channels: Some("6"),
        min_segments: Some(1),
        break_on_non_key_frames: true,
        copy_timestamps: false,
    },
    TranscodingTarget {
        container: "mkv",
        kind: CodecKind::Video,
        video_codec: Some("h264"),
        audio_candidates: MKV_AUDIO,
        context: EncodingContext::Static,
        protocol: StreamProtocol::Http,
        max_audio_channels: Some("6"),
        min_segments: None,
        break_on_non_key_frames: false,
        copy_timestamps: true,
    },
    TranscodingTarget {
        container: "mp3",
        kind: CodecKind::Audio,
        video_codec: None,
        audio_candidates: &["mp3"],
        context: EncodingContext::Streaming,
        protocol: StreamProtocol::Http,
        max_audio_channels: Some("2"),
        min_segments: None,
        break_on_non_key_frames: false,
        copy_timestamps: false,
    },
];

/// Containers whose table entry lists `codec`
pub fn containers_carrying(kind: CodecKind, codec: &str) -> impl Iterator<Item = &'static str> + '_ {
    CONTAINERS
        .iter()
        .filter(move |c| match kind {
            CodecKind::Video => c.video_codecs.contains(&codec),
            CodecKind::Audio => c.audio_codecs.contains(&codec),
        })
        .map(|c| c.container)
}
