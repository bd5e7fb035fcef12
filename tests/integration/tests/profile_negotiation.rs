//! Integration tests for capability scanning and device profile building
//!
//! These tests run the full path from a codec catalog on disk to the JSON
//! document sent to the server.

use anyhow::Result;
use directplay::decoder::{scan, CapabilityCache, CodecKind, StaticCodecCatalog};
use directplay::profile::DeviceProfileBuilder;
use directplay::utils::Config;
use directplay_integration_tests::{perf_test::PerfMeasure, TestFixture, PHONE_CAPABILITIES};
use serde_json::{json, Value};
use serial_test::serial;

#[test]
fn test_scan_catalog_file() -> Result<()> {
    let fixture = TestFixture::new()?;
    let catalog = StaticCodecCatalog::from_file(&fixture.catalog_path)?;
    let capabilities = scan(&catalog);

    // Encoder and image decoder are not listed
    assert_eq!(capabilities.len(), 6);
    assert_eq!(
        capabilities.codec_names(CodecKind::Video).into_iter().collect::<Vec<_>>(),
        vec!["h264", "hevc", "vp9"]
    );

    let avc = capabilities.get(CodecKind::Video, "video/avc").unwrap();
    assert_eq!(avc.profiles.iter().cloned().collect::<Vec<_>>(), vec!["baseline", "high", "main"]);
    assert_eq!(avc.max_level(), Some(41));
    // First scanned decoder sets the ceiling
    assert_eq!(avc.max_bitrate, 20_000_000);

    Ok(())
}

#[test]
fn test_profile_json_shape() -> Result<()> {
    let profile = DeviceProfileBuilder::new("Phone").build(&PHONE_CAPABILITIES, 8_000_000);
    let json: Value = serde_json::from_str(&profile.to_json()?)?;

    assert_eq!(json["Name"], json!("Phone"));
    assert_eq!(json["MaxStreamingBitrate"], json!(8_000_000));
    assert_eq!(json["MaxStaticBitrate"], json!(100_000_000));
    assert_eq!(json["MusicStreamingTranscodingBitrate"], json!(384_000));

    let direct_play = json["DirectPlayProfiles"].as_array().unwrap();
    let mp4 = direct_play.iter().find(|p| p["Container"] == "mp4").unwrap();
    assert_eq!(mp4["Type"], json!("Video"));
    assert_eq!(mp4["VideoCodec"], json!("h264,hevc,vp9"));
    assert_eq!(mp4["AudioCodec"], json!("aac,opus,flac"));

    let flac = direct_play.iter().find(|p| p["Container"] == "flac").unwrap();
    assert_eq!(flac["Type"], json!("Audio"));
    assert!(flac.get("VideoCodec").is_none());

    let webm = direct_play.iter().find(|p| p["Container"] == "webm").unwrap();
    assert_eq!(webm["VideoCodec"], json!("vp9"));
    assert_eq!(webm["AudioCodec"], json!("opus"));

    assert!(!direct_play.iter().any(|p| p["Container"] == "mp3" || p["Container"] == "wav"));

    let h264 = json["CodecProfiles"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["Codec"] == "h264")
        .unwrap();
    assert_eq!(
        h264["Conditions"],
        json!([
            { "Condition": "LessThanEqual", "Property": "VideoBitrate", "Value": "20000000" },
            { "Condition": "EqualsAny", "Property": "VideoProfile", "Value": "baseline|high|main" },
            { "Condition": "LessThanEqual", "Property": "VideoLevel", "Value": "41" }
        ])
    );

    let hls = &json["TranscodingProfiles"][0];
    assert_eq!(hls["Protocol"], json!("hls"));
    assert_eq!(hls["AudioCodec"], json!("aac"));
    assert_eq!(hls["MinSegments"], json!(1));

    Ok(())
}

#[test]
fn test_capability_cache_shares_one_scan() -> Result<()> {
    let fixture = TestFixture::new()?;
    let catalog = StaticCodecCatalog::from_file(&fixture.catalog_path)?;
    let cache = CapabilityCache::new();

    let first = cache.get_or_scan(&catalog);
    let second = cache.get_or_scan(&StaticCodecCatalog::default());
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(second.len(), 6);

    Ok(())
}

#[test]
#[serial]
fn test_config_drives_profile() -> Result<()> {
    let fixture = TestFixture::new()?;
    let path = fixture.write_config("[profile]\nname = \"Living Room\"\nmax_streaming_bitrate = 10000000\n")?;
    let config = Config::from_file(&path)?;

    let profile = DeviceProfileBuilder::new(config.profile.name.as_str())
        .build(&PHONE_CAPABILITIES, config.profile.max_streaming_bitrate);
    assert_eq!(profile.name, "Living Room");
    assert_eq!(profile.max_streaming_bitrate, 10_000_000);

    Ok(())
}

#[test]
fn test_profile_build_performance() {
    let builder = DeviceProfileBuilder::new("Phone");
    let mut perf = PerfMeasure::new("device profile build");

    for _ in 0..100 {
        perf.start();
        let profile = builder.build(&PHONE_CAPABILITIES, 8_000_000);
        perf.stop();
        assert!(!profile.direct_play_profiles.is_empty());
    }

    perf.report();
    assert!(perf.average() < std::time::Duration::from_millis(50));
}
