//! Static codec lookup tables
//!
//! Maps platform decoder identifiers (mime types and the numeric
//! profile/level constants decoders advertise) to the portable codec,
//! profile and level names the server understands. Every function is total:
//! identifiers outside the known set map to `None`.

use crate::decoder::CodecKind;

/// Platform mime types reported by decoders
pub mod mime {
    pub const VIDEO_MPEG2: &str = "video/mpeg2";
    pub const VIDEO_H263: &str = "video/3gpp";
    pub const VIDEO_MPEG4: &str = "video/mp4v-es";
    pub const VIDEO_AVC: &str = "video/avc";
    pub const VIDEO_HEVC: &str = "video/hevc";
    pub const VIDEO_VP8: &str = "video/x-vnd.on2.vp8";
    pub const VIDEO_VP9: &str = "video/x-vnd.on2.vp9";
    pub const VIDEO_AV1: &str = "video/av01";

    pub const AUDIO_AAC: &str = "audio/mp4a-latm";
    pub const AUDIO_AC3: &str = "audio/ac3";
    pub const AUDIO_EAC3: &str = "audio/eac3";
    pub const AUDIO_AMR_NB: &str = "audio/3gpp";
    pub const AUDIO_AMR_WB: &str = "audio/amr-wb";
    pub const AUDIO_FLAC: &str = "audio/flac";
    pub const AUDIO_MPEG: &str = "audio/mpeg";
    pub const AUDIO_OPUS: &str = "audio/opus";
    pub const AUDIO_RAW: &str = "audio/raw";
    pub const AUDIO_VORBIS: &str = "audio/vorbis";
    pub const AUDIO_ALAC: &str = "audio/alac";
    pub const AUDIO_DTS: &str = "audio/vnd.dts";
    pub const AUDIO_TRUEHD: &str = "audio/true-hd";
}

/// Numeric profile identifiers advertised by decoders
pub mod profile {
    pub const AVC_BASELINE: i32 = 0x01;
    pub const AVC_MAIN: i32 = 0x02;
    pub const AVC_EXTENDED: i32 = 0x04;
    pub const AVC_HIGH: i32 = 0x08;
    pub const AVC_HIGH10: i32 = 0x10;
    pub const AVC_HIGH422: i32 = 0x20;
    pub const AVC_HIGH444: i32 = 0x40;
    pub const AVC_CONSTRAINED_BASELINE: i32 = 0x10000;
    pub const AVC_CONSTRAINED_HIGH: i32 = 0x80000;

    pub const HEVC_MAIN: i32 = 0x01;
    pub const HEVC_MAIN10: i32 = 0x02;
    pub const HEVC_MAIN_STILL: i32 = 0x04;
    pub const HEVC_MAIN10_HDR10: i32 = 0x1000;
    pub const HEVC_MAIN10_HDR10_PLUS: i32 = 0x2000;

    pub const VP8_MAIN: i32 = 0x01;

    pub const VP9_0: i32 = 0x01;
    pub const VP9_1: i32 = 0x02;
    pub const VP9_2: i32 = 0x04;
    pub const VP9_3: i32 = 0x08;
    pub const VP9_2_HDR: i32 = 0x1000;
    pub const VP9_3_HDR: i32 = 0x2000;
    pub const VP9_2_HDR10_PLUS: i32 = 0x4000;
    pub const VP9_3_HDR10_PLUS: i32 = 0x8000;

    pub const AV1_MAIN8: i32 = 0x01;
    pub const AV1_MAIN10: i32 = 0x02;
    pub const AV1_MAIN10_HDR10: i32 = 0x1000;
    pub const AV1_MAIN10_HDR10_PLUS: i32 = 0x2000;

    pub const MPEG2_SIMPLE: i32 = 0x00;
    pub const MPEG2_MAIN: i32 = 0x01;
    pub const MPEG2_422: i32 = 0x02;
    pub const MPEG2_SNR: i32 = 0x03;
    pub const MPEG2_SPATIAL: i32 = 0x04;
    pub const MPEG2_HIGH: i32 = 0x05;

    pub const H263_BASELINE: i32 = 0x01;
    pub const H263_H320_CODING: i32 = 0x02;
    pub const H263_BACKWARD_COMPATIBLE: i32 = 0x04;
    pub const H263_ISWV2: i32 = 0x08;
    pub const H263_ISWV3: i32 = 0x10;
    pub const H263_HIGH_COMPRESSION: i32 = 0x20;
    pub const H263_INTERNET: i32 = 0x40;
    pub const H263_INTERLACE: i32 = 0x80;
    pub const H263_HIGH_LATENCY: i32 = 0x100;

    pub const MPEG4_SIMPLE: i32 = 0x01;
    pub const MPEG4_SIMPLE_SCALABLE: i32 = 0x02;
    pub const MPEG4_CORE: i32 = 0x04;
    pub const MPEG4_MAIN: i32 = 0x08;
    pub const MPEG4_NBIT: i32 = 0x10;
    pub const MPEG4_SCALABLE_TEXTURE: i32 = 0x20;
    pub const MPEG4_SIMPLE_FACE: i32 = 0x40;
    pub const MPEG4_SIMPLE_FBA: i32 = 0x80;
    pub const MPEG4_BASIC_ANIMATED: i32 = 0x100;
    pub const MPEG4_HYBRID: i32 = 0x200;
    pub const MPEG4_ADVANCED_REAL_TIME: i32 = 0x400;
    pub const MPEG4_CORE_SCALABLE: i32 = 0x800;
    pub const MPEG4_ADVANCED_CODING: i32 = 0x1000;
    pub const MPEG4_ADVANCED_CORE: i32 = 0x2000;
    pub const MPEG4_ADVANCED_SCALABLE: i32 = 0x4000;
    pub const MPEG4_ADVANCED_SIMPLE: i32 = 0x8000;

    pub const AAC_MAIN: i32 = 1;
    pub const AAC_LC: i32 = 2;
    pub const AAC_SSR: i32 = 3;
    pub const AAC_LTP: i32 = 4;
    pub const AAC_HE: i32 = 5;
    pub const AAC_LD: i32 = 23;
    pub const AAC_HE_PS: i32 = 29;
    pub const AAC_ELD: i32 = 39;
}

/// Numeric level identifiers advertised by decoders
pub mod level {
    pub const AVC_1: i32 = 0x01;
    pub const AVC_1B: i32 = 0x02;
    pub const AVC_11: i32 = 0x04;
    pub const AVC_12: i32 = 0x08;
    pub const AVC_13: i32 = 0x10;
    pub const AVC_2: i32 = 0x20;
    pub const AVC_21: i32 = 0x40;
    pub const AVC_22: i32 = 0x80;
    pub const AVC_3: i32 = 0x100;
    pub const AVC_31: i32 = 0x200;
    pub const AVC_32: i32 = 0x400;
    pub const AVC_4: i32 = 0x800;
    pub const AVC_41: i32 = 0x1000;
    pub const AVC_42: i32 = 0x2000;
    pub const AVC_5: i32 = 0x4000;
    pub const AVC_51: i32 = 0x8000;
    pub const AVC_52: i32 = 0x10000;
    pub const AVC_6: i32 = 0x20000;
    pub const AVC_61: i32 = 0x40000;
    pub const AVC_62: i32 = 0x80000;

    // HEVC levels come in main/high tier pairs: main tier is the lower bit.
    pub const HEVC_MAIN_TIER_1: i32 = 0x1;
    pub const HEVC_HIGH_TIER_1: i32 = 0x2;
    pub const HEVC_MAIN_TIER_2: i32 = 0x4;
    pub const HEVC_HIGH_TIER_2: i32 = 0x8;
    pub const HEVC_MAIN_TIER_21: i32 = 0x10;
    pub const HEVC_HIGH_TIER_21: i32 = 0x20;
    pub const HEVC_MAIN_TIER_3: i32 = 0x40;
    pub const HEVC_HIGH_TIER_3: i32 = 0x80;
    pub const HEVC_MAIN_TIER_31: i32 = 0x100;
    pub const HEVC_HIGH_TIER_31: i32 = 0x200;
    pub const HEVC_MAIN_TIER_4: i32 = 0x400;
    pub const HEVC_HIGH_TIER_4: i32 = 0x800;
    pub const HEVC_MAIN_TIER_41: i32 = 0x1000;
    pub const HEVC_HIGH_TIER_41: i32 = 0x2000;
    pub const HEVC_MAIN_TIER_5: i32 = 0x4000;
    pub const HEVC_HIGH_TIER_5: i32 = 0x8000;
    pub const HEVC_MAIN_TIER_51: i32 = 0x10000;
    pub const HEVC_HIGH_TIER_51: i32 = 0x20000;
    pub const HEVC_MAIN_TIER_52: i32 = 0x40000;
    pub const HEVC_HIGH_TIER_52: i32 = 0x80000;
    pub const HEVC_MAIN_TIER_6: i32 = 0x100000;
    pub const HEVC_HIGH_TIER_6: i32 = 0x200000;
    pub const HEVC_MAIN_TIER_61: i32 = 0x400000;
    pub const HEVC_HIGH_TIER_61: i32 = 0x800000;
    pub const HEVC_MAIN_TIER_62: i32 = 0x1000000;
    pub const HEVC_HIGH_TIER_62: i32 = 0x2000000;

    pub const VP8_VERSION0: i32 = 0x01;
    pub const VP8_VERSION1: i32 = 0x02;
    pub const VP8_VERSION2: i32 = 0x04;
    pub const VP8_VERSION3: i32 = 0x08;

    pub const VP9_1: i32 = 0x1;
    pub const VP9_11: i32 = 0x2;
    pub const VP9_2: i32 = 0x4;
    pub const VP9_21: i32 = 0x8;
    pub const VP9_3: i32 = 0x10;
    pub const VP9_31: i32 = 0x20;
    pub const VP9_4: i32 = 0x40;
    pub const VP9_41: i32 = 0x80;
    pub const VP9_5: i32 = 0x100;
    pub const VP9_51: i32 = 0x200;
    pub const VP9_52: i32 = 0x400;
    pub const VP9_6: i32 = 0x800;
    pub const VP9_61: i32 = 0x1000;
    pub const VP9_62: i32 = 0x2000;

    pub const AV1_2: i32 = 0x1;
    pub const AV1_21: i32 = 0x2;
    pub const AV1_22: i32 = 0x4;
    pub const AV1_23: i32 = 0x8;
    pub const AV1_3: i32 = 0x10;
    pub const AV1_31: i32 = 0x20;
    pub const AV1_32: i32 = 0x40;
    pub const AV1_33: i32 = 0x80;
    pub const AV1_4: i32 = 0x100;
    pub const AV1_41: i32 = 0x200;
    pub const AV1_42: i32 = 0x400;
    pub const AV1_43: i32 = 0x800;
    pub const AV1_5: i32 = 0x1000;
    pub const AV1_51: i32 = 0x2000;
    pub const AV1_52: i32 = 0x4000;
    pub const AV1_53: i32 = 0x8000;
    pub const AV1_6: i32 = 0x10000;
    pub const AV1_61: i32 = 0x20000;
    pub const AV1_62: i32 = 0x40000;
    pub const AV1_63: i32 = 0x80000;

    pub const MPEG2_LL: i32 = 0x00;
    pub const MPEG2_ML: i32 = 0x01;
    pub const MPEG2_H14: i32 = 0x02;
    pub const MPEG2_HL: i32 = 0x03;
    pub const MPEG2_HP: i32 = 0x04;

    pub const H263_10: i32 = 0x01;
    pub const H263_20: i32 = 0x02;
    pub const H263_30: i32 = 0x04;
    pub const H263_40: i32 = 0x08;
    pub const H263_45: i32 = 0x10;
    pub const H263_50: i32 = 0x20;
    pub const H263_60: i32 = 0x40;
    pub const H263_70: i32 = 0x80;

    pub const MPEG4_0: i32 = 0x01;
    pub const MPEG4_0B: i32 = 0x02;
    pub const MPEG4_1: i32 = 0x04;
    pub const MPEG4_2: i32 = 0x08;
    pub const MPEG4_3: i32 = 0x10;
    pub const MPEG4_3B: i32 = 0x18;
    pub const MPEG4_4: i32 = 0x20;
    pub const MPEG4_4A: i32 = 0x40;
    pub const MPEG4_5: i32 = 0x80;
    pub const MPEG4_6: i32 = 0x100;
}

/// Classify a decoder mime type into its kind and portable codec name.
///
/// Returns `None` for mime types that are neither a known audio nor a
/// known video codec (the scanner skips those).
pub fn classify_mime(mime_type: &str) -> Option<(CodecKind, &'static str)> {
    if let Some(codec) = video_codec_for(mime_type) {
        return Some((CodecKind::Video, codec));
    }
    audio_codec_for(mime_type).map(|codec| (CodecKind::Audio, codec))
}

/// Map a video decoder mime type to a portable codec name
pub fn video_codec_for(mime_type: &str) -> Option<&'static str> {
    let codec = match mime_type.to_ascii_lowercase().as_str() {
        mime::VIDEO_MPEG2 => "mpeg2video",
        mime::VIDEO_H263 => "h263",
        mime::VIDEO_MPEG4 => "mpeg4",
        mime::VIDEO_AVC => "h264",
        mime::VIDEO_HEVC => "hevc",
        mime::VIDEO_VP8 => "vp8",
        mime::VIDEO_VP9 => "vp9",
        mime::VIDEO_AV1 => "av1",
        _ => return None,
    };
    Some(codec)
}

/// Map an audio decoder mime type to a portable codec name
pub fn audio_codec_for(mime_type: &str) -> Option<&'static str> {
    let codec = match mime_type.to_ascii_lowercase().as_str() {
        mime::AUDIO_AAC => "aac",
        mime::AUDIO_AC3 => "ac3",
        mime::AUDIO_EAC3 => "eac3",
        mime::AUDIO_AMR_NB => "amr_nb",
        mime::AUDIO_AMR_WB => "amr_wb",
        mime::AUDIO_FLAC => "flac",
        mime::AUDIO_MPEG => "mp3",
        mime::AUDIO_OPUS => "opus",
        mime::AUDIO_RAW => "pcm_s16le",
        mime::AUDIO_VORBIS => "vorbis",
        mime::AUDIO_ALAC => "alac",
        mime::AUDIO_DTS => "dts",
        mime::AUDIO_TRUEHD => "truehd",
        _ => return None,
    };
    Some(codec)
}

/// Map a numeric platform profile to a portable profile name for `codec`
pub fn video_profile_for(codec: &str, platform_profile: i32) -> Option<&'static str> {
    match codec {
        "mpeg2video" => mpeg2_profile(platform_profile),
        "h263" => h263_profile(platform_profile),
        "mpeg4" => mpeg4_profile(platform_profile),
        "h264" => avc_profile(platform_profile),
        "hevc" => hevc_profile(platform_profile),
        "vp8" => vp8_profile(platform_profile),
        "vp9" => vp9_profile(platform_profile),
        "av1" => av1_profile(platform_profile),
        _ => None,
    }
}

/// Map a numeric platform level to the server's numeric level for `codec`
pub fn video_level_for(codec: &str, platform_level: i32) -> Option<u32> {
    match codec {
        "mpeg2video" => mpeg2_level(platform_level),
        "h263" => h263_level(platform_level),
        "mpeg4" => mpeg4_level(platform_level),
        "h264" => avc_level(platform_level),
        "hevc" => hevc_level(platform_level),
        "vp8" => vp8_level(platform_level),
        "vp9" => vp9_level(platform_level),
        "av1" => av1_level(platform_level),
        _ => None,
    }
}

/// Map a numeric platform audio profile to a portable profile name
pub fn audio_profile_for(codec: &str, platform_profile: i32) -> Option<&'static str> {
    match codec {
        "aac" => aac_profile(platform_profile),
        _ => None,
    }
}

/// Map a server subtitle format to the transport mime the renderer expects
/// for a sidecar subtitle file.
pub fn subtitle_transport_format_for(server_format: &str) -> Option<&'static str> {
    let format = match server_format.to_ascii_lowercase().as_str() {
        "srt" | "subrip" => "application/x-subrip",
        "ssa" | "ass" => "text/x-ssa",
        "vtt" | "webvtt" => "text/vtt",
        "ttml" => "application/ttml+xml",
        "pgs" | "pgssub" => "application/pgs",
        "dvbsub" => "application/dvbsubs",
        "sub" | "idx" | "dvdsub" | "vobsub" => "application/vobsub",
        _ => return None,
    };
    Some(format)
}

fn avc_profile(value: i32) -> Option<&'static str> {
    use profile::*;
    let name = match value {
        AVC_BASELINE => "baseline",
        AVC_MAIN => "main",
        AVC_EXTENDED => "extended",
        AVC_HIGH => "high",
        AVC_HIGH10 => "high 10",
        AVC_HIGH422 => "high 422",
        AVC_HIGH444 => "high 444",
        AVC_CONSTRAINED_BASELINE => "constrained baseline",
        AVC_CONSTRAINED_HIGH => "constrained high",
        _ => return None,
    };
    Some(name)
}

fn hevc_profile(value: i32) -> Option<&'static str> {
    use profile::*;
    let name = match value {
        HEVC_MAIN => "main",
        HEVC_MAIN10 | HEVC_MAIN10_HDR10 | HEVC_MAIN10_HDR10_PLUS => "main 10",
        HEVC_MAIN_STILL => "main still",
        _ => return None,
    };
    Some(name)
}

fn vp8_profile(value: i32) -> Option<&'static str> {
    match value {
        profile::VP8_MAIN => Some("main"),
        _ => None,
    }
}

fn vp9_profile(value: i32) -> Option<&'static str> {
    use profile::*;
    let name = match value {
        VP9_0 => "profile 0",
        VP9_1 => "profile 1",
        VP9_2 | VP9_2_HDR | VP9_2_HDR10_PLUS => "profile 2",
        VP9_3 | VP9_3_HDR | VP9_3_HDR10_PLUS => "profile 3",
        _ => return None,
    };
    Some(name)
}

fn av1_profile(value: i32) -> Option<&'static str> {
    use profile::*;
    match value {
        AV1_MAIN8 | AV1_MAIN10 | AV1_MAIN10_HDR10 | AV1_MAIN10_HDR10_PLUS => Some("main"),
        _ => None,
    }
}

fn mpeg2_profile(value: i32) -> Option<&'static str> {
    use profile::*;
    let name = match value {
        MPEG2_SIMPLE => "simple",
        MPEG2_MAIN => "main",
        MPEG2_422 => "422",
        MPEG2_SNR => "snr",
        MPEG2_SPATIAL => "spatial",
        MPEG2_HIGH => "high",
        _ => return None,
    };
    Some(name)
}

fn h263_profile(value: i32) -> Option<&'static str> {
    use profile::*;
    let name = match value {
        H263_BASELINE => "baseline",
        H263_H320_CODING => "h320 coding",
        H263_BACKWARD_COMPATIBLE => "backward compatible",
        H263_ISWV2 => "isw v2",
        H263_ISWV3 => "isw v3",
        H263_HIGH_COMPRESSION => "high compression",
        H263_INTERNET => "internet",
        H263_INTERLACE => "interlace",
        H263_HIGH_LATENCY => "high latency",
        _ => return None,
    };
    Some(name)
}

fn mpeg4_profile(value: i32) -> Option<&'static str> {
    use profile::*;
    let name = match value {
        MPEG4_SIMPLE => "simple",
        MPEG4_SIMPLE_SCALABLE => "simple scalable",
        MPEG4_CORE => "core",
        MPEG4_MAIN => "main",
        MPEG4_NBIT => "nbit",
        MPEG4_SCALABLE_TEXTURE => "scalable texture",
        MPEG4_SIMPLE_FACE => "simple face",
        MPEG4_SIMPLE_FBA => "simple fba",
        MPEG4_BASIC_ANIMATED => "basic animated",
        MPEG4_HYBRID => "hybrid",
        MPEG4_ADVANCED_REAL_TIME => "advanced real time",
        MPEG4_CORE_SCALABLE => "core scalable",
        MPEG4_ADVANCED_CODING => "advanced coding",
        MPEG4_ADVANCED_CORE => "advanced core",
        MPEG4_ADVANCED_SCALABLE => "advanced scalable",
        MPEG4_ADVANCED_SIMPLE => "advanced simple",
        _ => return None,
    };
    Some(name)
}

fn aac_profile(value: i32) -> Option<&'static str> {
    use profile::*;
    let name = match value {
        AAC_MAIN => "Main",
        AAC_LC => "LC",
        AAC_SSR => "SSR",
        AAC_LTP => "LTP",
        AAC_HE => "HE-AAC",
        AAC_LD => "LD",
        AAC_HE_PS => "HE-AACv2",
        AAC_ELD => "ELD",
        _ => return None,
    };
    Some(name)
}

fn avc_level(value: i32) -> Option<u32> {
    use level::*;
    let level = match value {
        AVC_1 | AVC_1B => 10,
        AVC_11 => 11,
        AVC_12 => 12,
        AVC_13 => 13,
        AVC_2 => 20,
        AVC_21 => 21,
        AVC_22 => 22,
        AVC_3 => 30,
        AVC_31 => 31,
        AVC_32 => 32,
        AVC_4 => 40,
        AVC_41 => 41,
        AVC_42 => 42,
        AVC_5 => 50,
        AVC_51 => 51,
        AVC_52 => 52,
        AVC_6 => 60,
        AVC_61 => 61,
        AVC_62 => 62,
        _ => return None,
    };
    Some(level)
}

/// HEVC levels are reported as `general_level_idc` (level * 30).
fn hevc_level(value: i32) -> Option<u32> {
    use level::*;
    let level = match value {
        HEVC_MAIN_TIER_1 | HEVC_HIGH_TIER_1 => 30,
        HEVC_MAIN_TIER_2 | HEVC_HIGH_TIER_2 => 60,
        HEVC_MAIN_TIER_21 | HEVC_HIGH_TIER_21 => 63,
        HEVC_MAIN_TIER_3 | HEVC_HIGH_TIER_3 => 90,
        HEVC_MAIN_TIER_31 | HEVC_HIGH_TIER_31 => 93,
        HEVC_MAIN_TIER_4 | HEVC_HIGH_TIER_4 => 120,
        HEVC_MAIN_TIER_41 | HEVC_HIGH_TIER_41 => 123,
        HEVC_MAIN_TIER_5 | HEVC_HIGH_TIER_5 => 150,
        HEVC_MAIN_TIER_51 | HEVC_HIGH_TIER_51 => 153,
        HEVC_MAIN_TIER_52 | HEVC_HIGH_TIER_52 => 156,
        HEVC_MAIN_TIER_6 | HEVC_HIGH_TIER_6 => 180,
        HEVC_MAIN_TIER_61 | HEVC_HIGH_TIER_61 => 183,
        HEVC_MAIN_TIER_62 | HEVC_HIGH_TIER_62 => 186,
        _ => return None,
    };
    Some(level)
}

fn vp8_level(value: i32) -> Option<u32> {
    use level::*;
    let level = match value {
        VP8_VERSION0 => 0,
        VP8_VERSION1 => 1,
        VP8_VERSION2 => 2,
        VP8_VERSION3 => 3,
        _ => return None,
    };
    Some(level)
}

fn vp9_level(value: i32) -> Option<u32> {
    use level::*;
    let level = match value {
        VP9_1 => 10,
        VP9_11 => 11,
        VP9_2 => 20,
        VP9_21 => 21,
        VP9_3 => 30,
        VP9_31 => 31,
        VP9_4 => 40,
        VP9_41 => 41,
        VP9_5 => 50,
        VP9_51 => 51,
        VP9_52 => 52,
        VP9_6 => 60,
        VP9_61 => 61,
        VP9_62 => 62,
        _ => return None,
    };
    Some(level)
}

/// AV1 levels use the `seq_level_idx` numbering (2.0 -> 0, 2.1 -> 1, ...).
fn av1_level(value: i32) -> Option<u32> {
    use level::*;
    let level = match value {
        AV1_2 => 0,
        AV1_21 => 1,
        AV1_22 => 2,
        AV1_23 => 3,
        AV1_3 => 4,
        AV1_31 => 5,
        AV1_32 => 6,
        AV1_33 => 7,
        AV1_4 => 8,
        AV1_41 => 9,
        AV1_42 => 10,
        AV1_43 => 11,
        AV1_5 => 12,
        AV1_51 => 13,
        AV1_52 => 14,
        AV1_53 => 15,
        AV1_6 => 16,
        AV1_61 => 17,
        AV1_62 => 18,
        AV1_63 => 19,
        _ => return None,
    };
    Some(level)
}

fn mpeg2_level(value: i32) -> Option<u32> {
    use level::*;
    let level = match value {
        MPEG2_LL => 0,
        MPEG2_ML => 1,
        MPEG2_H14 => 2,
        MPEG2_HL => 3,
        MPEG2_HP => 4,
        _ => return None,
    };
    Some(level)
}

fn h263_level(value: i32) -> Option<u32> {
    use level::*;
    let level = match value {
        H263_10 => 10,
        H263_20 => 20,
        H263_30 => 30,
        H263_40 => 40,
        H263_45 => 45,
        H263_50 => 50,
        H263_60 => 60,
        H263_70 => 70,
        _ => return None,
    };
    Some(level)
}

fn mpeg4_level(value: i32) -> Option<u32> {
    use level::*;
    let level = match value {
        MPEG4_0 | MPEG4_0B => 0,
        MPEG4_1 => 1,
        MPEG4_2 => 2,
        MPEG4_3 | MPEG4_3B => 3,
        MPEG4_4 | MPEG4_4A => 4,
        MPEG4_5 => 5,
        MPEG4_6 => 6,
        _ => return None,
    };
    Some(level)
}
