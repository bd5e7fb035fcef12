//! Playback controller
//!
//! Owns one playback session: the renderer, the current resolved source,
//! the device profile and the restart coordinator. All selection requests
//! for the session go through it.

use crate::decoder::DecoderCapabilities;
use crate::player::media_source::ResolvedMediaSource;
use crate::player::quality::{quality_options, QualityOption, QualityRequest};
use crate::player::restart::{MediaSourceResolver, PlaybackRequest, RestartCoordinator, RestartOutcome};
use crate::player::track_selection::{TrackChange, TrackSelector};
use crate::player::tracks::{PreparedMedia, TrackRenderer};
use crate::player::PlaybackSettings;
use crate::profile::{DeviceProfile, DeviceProfileBuilder, DeviceProfileCache};
use crate::utils::error::{DirectPlayError, Result};
use crate::utils::{format_bitrate, format_duration};
use log::{debug, info};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;

/// Result of a restart driven by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartStatus {
    /// The new source was prepared and its initial tracks applied
    Applied,
    /// A later request took over; nothing was applied
    Superseded,
}

/// Result of an audio change through the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioChange {
    /// Handled by the renderer without leaving the current source
    Live(TrackChange),
    /// Playback was restarted on a re-resolved source
    Restarted,
    /// The restart was overtaken by a later request
    Superseded,
}

struct SessionState {
    renderer: Box<dyn TrackRenderer>,
    source: Option<ResolvedMediaSource>,
}

/// Controller for a single playback session
pub struct PlaybackController<R: MediaSourceResolver> {
    state: Mutex<SessionState>,
    coordinator: RestartCoordinator<R>,
    profiles: DeviceProfileCache,
    settings: RwLock<PlaybackSettings>,
}

impl<R: MediaSourceResolver> PlaybackController<R> {
    /// Create a controller
    ///
    /// # Arguments
    ///
    /// * `resolver` - Negotiates media sources with the server
    /// * `renderer` - Media rendering component
    /// * `capabilities` - Scanned decoder capabilities
    /// * `settings` - Initial playback settings
    pub fn new(
        resolver: Arc<R>,
        renderer: Box<dyn TrackRenderer>,
        capabilities: Arc<DecoderCapabilities>,
        settings: PlaybackSettings,
    ) -> Self {
        let builder = DeviceProfileBuilder::new(settings.device_name.clone());
        Self {
            state: Mutex::new(SessionState { renderer, source: None }),
            coordinator: RestartCoordinator::new(resolver),
            profiles: DeviceProfileCache::new(builder, capabilities),
            settings: RwLock::new(settings),
        }
    }

    pub fn settings(&self) -> PlaybackSettings {
        self.settings.read().clone()
    }

    /// Device profile for the current bitrate cap
    pub fn device_profile(&self) -> Arc<DeviceProfile> {
        let bitrate = self.settings.read().max_streaming_bitrate;
        self.profiles.profile_for(bitrate)
    }

    /// Snapshot of the active source
    pub fn current_source(&self) -> Option<ResolvedMediaSource> {
        self.state.lock().source.clone()
    }

    /// Resolve and prepare `item_id` with the server's default streams
    pub async fn start(&self, item_id: &str, start_position: Duration) -> Result<RestartStatus> {
        let settings = self.settings();
        let request = PlaybackRequest {
            item_id: item_id.to_string(),
            media_source_id: None,
            audio_stream_index: None,
            subtitle_stream_index: None,
            max_streaming_bitrate: settings.max_streaming_bitrate,
            start_position,
            device_profile: self.device_profile(),
        };
        self.run_restart(request).await
    }

    /// Switch audio, restarting playback when the change cannot be applied live
    pub async fn select_audio_track(&self, index: i32) -> Result<AudioChange> {
        let change = self.with_selector(|selector| selector.select_audio_track(index, false))?;

        let TrackChange::RestartRequired { audio_stream_index } = change else {
            return Ok(AudioChange::Live(change));
        };

        let request = self.restart_request(Some(audio_stream_index))?;
        match self.run_restart(request).await? {
            RestartStatus::Applied => Ok(AudioChange::Restarted),
            RestartStatus::Superseded => Ok(AudioChange::Superseded),
        }
    }

    /// Switch or disable subtitles; never restarts playback
    pub fn select_subtitle_track(&self, index: Option<i32>) -> Result<TrackChange> {
        self.with_selector(|selector| selector.select_subtitle_track(index, false))
    }

    /// Toggle subtitles, returning whether they are now enabled
    pub fn toggle_subtitles(&self) -> Result<bool> {
        self.with_selector(|selector| selector.toggle_subtitles())
    }

    /// Apply a new bitrate cap
    ///
    /// The device profile is rebuilt for the new cap. An active session is
    /// restarted at its current position with its current streams.
    ///
    /// # Returns
    ///
    /// Returns `None` if no session was active
    pub async fn change_max_bitrate(&self, max_streaming_bitrate: u64) -> Result<Option<RestartStatus>> {
        {
            let mut settings = self.settings.write();
            settings.max_streaming_bitrate = max_streaming_bitrate;
            settings.automatic_quality = false;
        }
        info!("Max streaming bitrate set to {}", format_bitrate(max_streaming_bitrate));

        if self.state.lock().source.is_none() {
            return Ok(None);
        }

        let request = self.restart_request(None)?;
        Ok(Some(self.run_restart(request).await?))
    }

    /// Quality menu for the active source
    pub fn quality_options(&self) -> Vec<QualityOption> {
        let settings = self.settings();
        let (width, height) = self
            .state
            .lock()
            .source
            .as_ref()
            .and_then(|source| source.video_stream())
            .map(|video| (video.width.unwrap_or(0), video.height.unwrap_or(0)))
            .unwrap_or((0, 0));

        quality_options(QualityRequest {
            video_width: width,
            video_height: height,
            current_max_bitrate: settings.max_streaming_bitrate,
            automatic_enabled: settings.automatic_quality,
            include_auto: settings.include_auto_quality,
        })
    }

    /// End the session and discard any restart in flight
    pub fn stop(&self) {
        self.coordinator.cancel();
        self.state.lock().source = None;
        debug!("Playback session stopped");
    }

    fn with_selector<T>(&self, f: impl FnOnce(&mut TrackSelector<'_>) -> Result<T>) -> Result<T> {
        let mut guard = self.state.lock();
        let SessionState { renderer, source } = &mut *guard;
        let source = source.as_mut().ok_or(DirectPlayError::NoMediaSource)?;
        f(&mut TrackSelector::new(source, renderer.as_mut()))
    }

    /// Request that re-resolves the active item at the current position
    fn restart_request(&self, audio_stream_index: Option<i32>) -> Result<PlaybackRequest> {
        let device_profile = self.device_profile();
        let max_streaming_bitrate = self.settings.read().max_streaming_bitrate;

        let guard = self.state.lock();
        let source = guard.source.as_ref().ok_or(DirectPlayError::NoMediaSource)?;

        Ok(PlaybackRequest {
            item_id: source.item_id.clone(),
            media_source_id: Some(source.id.clone()),
            audio_stream_index: audio_stream_index.or(source.selected_audio_stream),
            subtitle_stream_index: source.selected_subtitle_stream,
            max_streaming_bitrate,
            start_position: guard.renderer.position(),
            device_profile,
        })
    }

    async fn run_restart(&self, request: PlaybackRequest) -> Result<RestartStatus> {
        let start_position = request.start_position;
        match self.coordinator.restart(request).await? {
            RestartOutcome::Resolved { source, generation } => self.apply(source, start_position, generation),
            RestartOutcome::Superseded => Ok(RestartStatus::Superseded),
        }
    }

    /// Prepare the renderer with `source` and apply its initial tracks
    fn apply(&self, mut source: ResolvedMediaSource, start_position: Duration, generation: u64) -> Result<RestartStatus> {
        let subtitles_enabled = self.settings.read().subtitles_enabled;

        let mut guard = self.state.lock();
        if !self.coordinator.is_current(generation) {
            return Ok(RestartStatus::Superseded);
        }

        let SessionState { renderer, source: slot } = &mut *guard;
        renderer.prepare(&PreparedMedia::new(&source, start_position));

        let selected = {
            let mut selector = TrackSelector::new(&mut source, renderer.as_mut());
            selector.select_initial_tracks().and_then(|_| {
                if subtitles_enabled {
                    Ok(())
                } else {
                    selector.select_subtitle_track(None, true).map(|_| ())
                }
            })
        };

        info!(
            "Prepared source {} ({:?}) at {}",
            source.id,
            source.play_method,
            format_duration(start_position)
        );
        *slot = Some(source);

        selected.map(|_| RestartStatus::Applied)
    }
}
