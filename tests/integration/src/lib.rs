//! Integration test utilities for directplay
//!
//! This module provides common utilities for integration testing including:
//! - A codec catalog fixture written to a temporary directory
//! - Sample resolved media sources
//! - Fake resolver and renderer implementations

use anyhow::Result;
use directplay::decoder::{scan, DecoderCapabilities, StaticCodecCatalog};
use directplay::player::{
    MediaSourceResolver, MediaStream, MediaStreamType, PlayMethod, PlaybackRequest, PreparedMedia,
    ResolvedMediaSource, TrackFormat, TrackGroup, TrackRenderer, TrackType,
};
use directplay::profile::SubtitleDeliveryMethod;
use directplay::DirectPlayError;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Catalog of a typical phone: hardware AVC/HEVC/VP9, software AAC/Opus/FLAC
/// and an AAC encoder that must be ignored.
pub const PHONE_CATALOG: &str = r#"{
    "codecs": [
        { "name": "c2.qti.avc.decoder",
          "types": [ { "mimeType": "video/avc", "maxBitrate": 20000000,
                       "profileLevels": [ { "profile": 1, "level": 512 }, { "profile": 8, "level": 4096 } ] } ] },
        { "name": "c2.android.avc.decoder",
          "types": [ { "mimeType": "video/avc", "maxBitrate": 48000000,
                       "profileLevels": [ { "profile": 2, "level": 2048 } ] } ] },
        { "name": "c2.qti.hevc.decoder",
          "types": [ { "mimeType": "video/hevc", "maxBitrate": 100000000,
                       "profileLevels": [ { "profile": 1, "level": 1024 }, { "profile": 2, "level": 1024 } ] } ] },
        { "name": "c2.qti.vp9.decoder",
          "types": [ { "mimeType": "video/x-vnd.on2.vp9", "maxBitrate": 100000000,
                       "profileLevels": [ { "profile": 1, "level": 128 } ] } ] },
        { "name": "c2.android.aac.decoder",
          "types": [ { "mimeType": "audio/mp4a-latm", "maxBitrate": 510000,
                       "profileLevels": [ { "profile": 2, "level": 0 } ] } ] },
        { "name": "c2.android.opus.decoder",
          "types": [ { "mimeType": "audio/opus", "maxBitrate": 510000 } ] },
        { "name": "c2.android.flac.decoder",
          "types": [ { "mimeType": "audio/flac", "maxBitrate": 21000000 } ] },
        { "name": "c2.android.aac.encoder", "isEncoder": true,
          "types": [ { "mimeType": "audio/mp4a-latm", "maxBitrate": 510000 } ] },
        { "name": "c2.android.heic.decoder",
          "types": [ { "mimeType": "image/vnd.android.heic", "maxBitrate": 1 } ] }
    ]
}"#;

/// Capabilities scanned from [`PHONE_CATALOG`], shared across tests
pub static PHONE_CAPABILITIES: Lazy<Arc<DecoderCapabilities>> = Lazy::new(|| {
    let catalog = StaticCodecCatalog::from_json_str(PHONE_CATALOG).unwrap_or_default();
    Arc::new(scan(&catalog))
});

/// Test fixture for integration tests
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub catalog_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with the phone catalog on disk
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let catalog_path = temp_dir.path().join("catalog.json");
        std::fs::write(&catalog_path, PHONE_CATALOG)?;

        Ok(Self { temp_dir, catalog_path })
    }

    /// Write a config file into the fixture directory
    pub fn write_config(&self, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join("config.toml");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Get the path to the temporary directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Sample sources as the server would return them
pub mod sources {
    use super::*;

    pub fn stream(index: i32, stream_type: MediaStreamType) -> MediaStream {
        MediaStream {
            index,
            stream_type,
            is_external: false,
            delivery_method: None,
            codec: None,
            language: None,
            title: None,
            width: None,
            height: None,
            delivery_url: None,
        }
    }

    pub fn external_subtitle(index: i32, codec: &str) -> MediaStream {
        MediaStream {
            is_external: true,
            delivery_method: Some(SubtitleDeliveryMethod::External),
            codec: Some(codec.to_string()),
            delivery_url: Some(format!("/subtitles/{}.{}", index, codec)),
            ..stream(index, MediaStreamType::Subtitle)
        }
    }

    /// Video#0 (1920x1080), Audio#1, Audio#2, Subtitle#3 (embedded), Subtitle#4 (external srt)
    pub fn movie(item_id: &str, play_method: PlayMethod) -> ResolvedMediaSource {
        ResolvedMediaSource {
            id: format!("{}-source", item_id),
            item_id: item_id.to_string(),
            play_method,
            container: Some("mkv".to_string()),
            bitrate: Some(12_000_000),
            path: Some(format!("/videos/{}/stream.mkv", item_id)),
            transcoding_url: Some(format!("/videos/{}/master.m3u8", item_id)),
            media_streams: vec![
                MediaStream {
                    width: Some(1920),
                    height: Some(1080),
                    ..stream(0, MediaStreamType::Video)
                },
                stream(1, MediaStreamType::Audio),
                stream(2, MediaStreamType::Audio),
                stream(3, MediaStreamType::Subtitle),
                external_subtitle(4, "srt"),
            ],
            selected_audio_stream: Some(1),
            selected_subtitle_stream: None,
        }
    }

    /// Renderer groups matching [`movie`]
    pub fn movie_groups() -> Vec<TrackGroup> {
        let group = |track_type, id: Option<&str>| TrackGroup {
            track_type,
            tracks: vec![TrackFormat {
                id: id.map(str::to_string),
                ..Default::default()
            }],
        };
        vec![
            group(TrackType::Video, None),
            group(TrackType::Audio, None),
            group(TrackType::Audio, None),
            group(TrackType::Text, None),
            group(TrackType::Text, Some("external:4")),
        ]
    }
}

/// Resolver that answers after a delay and records every request
pub struct FakeResolver {
    pub play_method: PlayMethod,
    pub delay: Duration,
    pub fail: Mutex<bool>,
    /// Subtitle default returned when the request names none
    pub default_subtitle: Mutex<Option<i32>>,
    pub requests: Mutex<Vec<PlaybackRequest>>,
}

impl FakeResolver {
    pub fn new(play_method: PlayMethod, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            play_method,
            delay,
            fail: Mutex::new(false),
            default_subtitle: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock() = fail;
    }
}

impl MediaSourceResolver for FakeResolver {
    async fn resolve(&self, request: PlaybackRequest) -> directplay::Result<ResolvedMediaSource> {
        self.requests.lock().push(request.clone());
        tokio::time::sleep(self.delay).await;

        if *self.fail.lock() {
            return Err(DirectPlayError::Resolve("server unreachable".to_string()));
        }

        let mut source = sources::movie(&request.item_id, self.play_method);
        if let Some(audio) = request.audio_stream_index {
            source.selected_audio_stream = Some(audio);
        }
        source.selected_subtitle_stream = request.subtitle_stream_index.or(*self.default_subtitle.lock());
        Ok(source)
    }
}

/// Renderer command as observed by [`FakeRenderer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererCommand {
    Prepare(Option<String>),
    Select(TrackType, usize),
    Disable(TrackType),
}

/// Renderer exposing [`sources::movie_groups`] and logging every command
#[derive(Default, Clone)]
pub struct FakeRenderer {
    pub commands: Arc<Mutex<Vec<RendererCommand>>>,
    pub position: Arc<Mutex<Duration>>,
}

impl FakeRenderer {
    pub fn commands(&self) -> Vec<RendererCommand> {
        self.commands.lock().clone()
    }
}

impl TrackRenderer for FakeRenderer {
    fn track_groups(&self) -> Vec<TrackGroup> {
        sources::movie_groups()
    }

    fn select_track_group(&mut self, track_type: TrackType, group_index: usize) -> bool {
        self.commands.lock().push(RendererCommand::Select(track_type, group_index));
        true
    }

    fn clear_and_disable(&mut self, track_type: TrackType) {
        self.commands.lock().push(RendererCommand::Disable(track_type));
    }

    fn prepare(&mut self, media: &PreparedMedia) {
        self.commands.lock().push(RendererCommand::Prepare(media.url.clone()));
    }

    fn position(&self) -> Duration {
        *self.position.lock()
    }
}

/// Performance measurement utilities
pub mod perf_test {
    use std::time::{Duration, Instant};

    pub struct PerfMeasure {
        name: String,
        start: Instant,
        measurements: Vec<Duration>,
    }

    impl PerfMeasure {
        pub fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                start: Instant::now(),
                measurements: Vec::new(),
            }
        }

        pub fn start(&mut self) {
            self.start = Instant::now();
        }

        pub fn stop(&mut self) {
            self.measurements.push(self.start.elapsed());
        }

        pub fn average(&self) -> Duration {
            if self.measurements.is_empty() {
                return Duration::ZERO;
            }

            let sum: Duration = self.measurements.iter().sum();
            sum / self.measurements.len() as u32
        }

        pub fn max(&self) -> Option<Duration> {
            self.measurements.iter().max().copied()
        }

        pub fn report(&self) {
            println!("Performance Report: {}", self.name);
            println!("  Samples: {}", self.measurements.len());
            println!("  Average: {:?}", self.average());
            println!("  Max: {:?}", self.max().unwrap_or(Duration::ZERO));
        }
    }
}
