//! Stream selection engine
//!
//! Applies audio and subtitle choices from the server's stream list to the
//! renderer. Server stream indices are mapped to renderer track groups from
//! the renderer's current groups on every call; the mapping is never kept.
//!
//! Outcomes:
//! - a wrong-type or unknown stream index is a caller bug and returns
//!   [`DirectPlayError::InvalidStream`]; the server's initial defaults
//!   are not caller input and give [`TrackChange::NotFound`] instead,
//! - a stream the renderer does not expose where expected is
//!   [`TrackChange::NotFound`] and leaves all selection state untouched,
//! - an audio change under transcoding, or to an external audio stream,
//!   is [`TrackChange::RestartRequired`].

use crate::player::media_source::{MediaStream, MediaStreamType, ResolvedMediaSource};
use crate::player::tracks::{external_subtitle_id, TrackRenderer, TrackType};
use crate::profile::SubtitleDeliveryMethod;
use crate::utils::error::{DirectPlayError, Result};
use log::{debug, error, info, warn};

/// Result of a selection request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackChange {
    /// The renderer applied the override
    Applied,
    /// Nothing to do, the stream is already in effect
    Unchanged,
    /// The change needs the source re-resolved with this audio stream
    RestartRequired { audio_stream_index: i32 },
    /// The renderer does not expose the stream where expected
    NotFound,
}

impl TrackChange {
    /// The requested stream is now in effect
    pub fn succeeded(&self) -> bool {
        matches!(self, TrackChange::Applied | TrackChange::Unchanged)
    }

    pub fn requires_restart(&self) -> bool {
        matches!(self, TrackChange::RestartRequired { .. })
    }
}

/// Selection over one session's source and renderer
pub struct TrackSelector<'a> {
    source: &'a mut ResolvedMediaSource,
    renderer: &'a mut dyn TrackRenderer,
}

impl<'a> TrackSelector<'a> {
    pub fn new(source: &'a mut ResolvedMediaSource, renderer: &'a mut dyn TrackRenderer) -> Self {
        Self { source, renderer }
    }

    /// Apply the source's pre-selected streams after a prepare
    ///
    /// The defaults come from the server, so a default that names no
    /// stream of the right type is [`TrackChange::NotFound`] rather than an
    /// error. Subtitles are disabled in that case.
    ///
    /// # Returns
    ///
    /// Returns the audio and subtitle outcomes
    pub fn select_initial_tracks(&mut self) -> Result<(TrackChange, TrackChange)> {
        let audio = match self.source.selected_audio_stream {
            Some(index) if self.has_stream(index, MediaStreamType::Audio) => self.select_audio_track(index, true)?,
            Some(_) => TrackChange::NotFound,
            None => TrackChange::Unchanged,
        };
        let subtitle = match self.source.selected_subtitle_stream {
            Some(index) if !self.has_stream(index, MediaStreamType::Subtitle) => {
                self.select_subtitle_track(None, true)?;
                TrackChange::NotFound
            }
            index => self.select_subtitle_track(index, true)?,
        };

        debug!("Initial track selection: audio {:?}, subtitle {:?}", audio, subtitle);
        Ok((audio, subtitle))
    }

    /// Switch to the audio stream with server index `index`
    ///
    /// # Arguments
    ///
    /// * `index` - Server-side index of an audio stream
    /// * `initial` - First application after a prepare; skips the
    ///   already-selected short-circuit
    ///
    /// # Returns
    ///
    /// Returns the outcome, or [`DirectPlayError::InvalidStream`] if `index`
    /// is not an audio stream of this source
    pub fn select_audio_track(&mut self, index: i32, initial: bool) -> Result<TrackChange> {
        let stream = lookup(self.source, index, MediaStreamType::Audio)?.clone();

        if self.source.is_transcoding() || stream.is_external {
            if initial {
                // The re-resolved source already carries this stream
                return Ok(TrackChange::Unchanged);
            }
            info!("Audio stream {} needs a playback restart", index);
            return Ok(TrackChange::RestartRequired { audio_stream_index: index });
        }

        let only_stream = self.source.audio_streams().count() == 1;
        if only_stream || (!initial && self.source.selected_audio_stream == Some(index)) {
            self.source.select_audio_stream(index);
            return Ok(TrackChange::Unchanged);
        }

        let Some(embedded) = self.source.embedded_index(&stream) else {
            return Ok(TrackChange::NotFound);
        };
        let Some(group) = self.embedded_group(TrackType::Audio, embedded) else {
            warn!("No audio track group at embedded index {} for stream {}", embedded, index);
            return Ok(TrackChange::NotFound);
        };

        Ok(self.apply_override(TrackType::Audio, group, |source| source.select_audio_stream(index)))
    }

    /// Switch subtitles to the stream with server index `index`, or disable them
    ///
    /// # Arguments
    ///
    /// * `index` - Server-side index of a subtitle stream, `None` to disable
    /// * `initial` - First application after a prepare
    pub fn select_subtitle_track(&mut self, index: Option<i32>, initial: bool) -> Result<TrackChange> {
        let Some(index) = index else {
            self.renderer.clear_and_disable(TrackType::Text);
            self.source.select_subtitle_stream(None);
            return Ok(TrackChange::Applied);
        };

        let stream = lookup(self.source, index, MediaStreamType::Subtitle)?.clone();
        if !initial && self.source.selected_subtitle_stream == Some(index) {
            return Ok(TrackChange::Unchanged);
        }

        let group = match stream.subtitle_delivery() {
            SubtitleDeliveryMethod::Embed => match self.source.embedded_index(&stream) {
                Some(embedded) => self.embedded_group(TrackType::Text, embedded),
                None => None,
            },
            SubtitleDeliveryMethod::External => self.external_group(index),
            SubtitleDeliveryMethod::Encode => {
                warn!("Subtitle stream {} is burned in by the server", index);
                None
            }
        };

        let Some(group) = group else {
            warn!("No text track group found for subtitle stream {}", index);
            return Ok(TrackChange::NotFound);
        };

        Ok(self.apply_override(TrackType::Text, group, |source| source.select_subtitle_stream(Some(index))))
    }

    /// Enable the first subtitle stream, or disable subtitles if one is active
    ///
    /// # Returns
    ///
    /// Returns whether subtitles are enabled afterwards
    pub fn toggle_subtitles(&mut self) -> Result<bool> {
        if self.source.selected_subtitle_stream.is_some() {
            self.select_subtitle_track(None, false)?;
            return Ok(false);
        }

        let Some(first) = self.source.subtitle_streams().map(|s| s.index).min() else {
            debug!("No subtitle streams to enable");
            return Ok(false);
        };

        let change = self.select_subtitle_track(Some(first), false)?;
        Ok(change.succeeded())
    }

    /// Whether the server default `index` names a stream of `expected` type
    fn has_stream(&self, index: i32, expected: MediaStreamType) -> bool {
        let found = self
            .source
            .stream(index)
            .is_some_and(|stream| stream.stream_type == expected);
        if !found {
            warn!("Default {:?} stream {} not found in source {}", expected, index, self.source.id);
        }
        found
    }

    /// Global index of the `embedded`-th non-sidecar group of `track_type`
    fn embedded_group(&self, track_type: TrackType, embedded: usize) -> Option<usize> {
        self.renderer
            .track_groups()
            .iter()
            .enumerate()
            .filter(|(_, group)| group.track_type == track_type && !group.is_external())
            .nth(embedded)
            .map(|(i, _)| i)
    }

    fn external_group(&self, index: i32) -> Option<usize> {
        let id = external_subtitle_id(index);
        self.renderer
            .track_groups()
            .iter()
            .position(|group| group.track_type == TrackType::Text && group.first_id() == Some(id.as_str()))
    }

    /// Source state is only updated after the renderer accepted the override
    fn apply_override<F>(&mut self, track_type: TrackType, group: usize, commit: F) -> TrackChange
    where
        F: FnOnce(&mut ResolvedMediaSource),
    {
        if self.renderer.select_track_group(track_type, group) {
            commit(self.source);
            debug!("Selected {:?} track group {}", track_type, group);
            TrackChange::Applied
        } else {
            warn!("Renderer rejected {:?} track group {}", track_type, group);
            TrackChange::NotFound
        }
    }
}

fn lookup(source: &ResolvedMediaSource, index: i32, expected: MediaStreamType) -> Result<&MediaStream> {
    match source.stream(index) {
        Some(stream) if stream.stream_type == expected => Ok(stream),
        Some(stream) => {
            error!("Stream {} is {:?}, expected {:?}", index, stream.stream_type, expected);
            Err(DirectPlayError::invalid_stream(format!(
                "stream {} is {:?}, expected {:?}",
                index, stream.stream_type, expected
            )))
        }
        None => {
            error!("Stream {} does not exist in source {}", index, source.id);
            Err(DirectPlayError::invalid_stream(format!("no stream with index {}", index)))
        }
    }
}
