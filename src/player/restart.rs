//! Playback restart coordination
//!
//! A restart re-resolves the media source through the external resolver.
//! Requests are last-request-wins: starting a new restart, or calling
//! [`RestartCoordinator::cancel`], supersedes any restart still in flight,
//! and a superseded result is never returned for application.

use crate::player::media_source::ResolvedMediaSource;
use crate::profile::DeviceProfile;
use crate::utils::error::{DirectPlayError, Result};
use log::{debug, info, warn};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Parameters of a playback negotiation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackRequest {
    pub item_id: String,
    pub media_source_id: Option<String>,
    pub audio_stream_index: Option<i32>,
    pub subtitle_stream_index: Option<i32>,
    pub max_streaming_bitrate: u64,
    pub start_position: Duration,
    pub device_profile: Arc<DeviceProfile>,
}

/// External collaborator that negotiates playback with the server
pub trait MediaSourceResolver: Send + Sync + 'static {
    /// Resolve a media source for `request`
    ///
    /// # Arguments
    ///
    /// * `request` - Item, stream choices and the device profile to send
    ///
    /// # Returns
    ///
    /// Returns the resolved source, or an error if negotiation failed
    fn resolve(&self, request: PlaybackRequest) -> impl Future<Output = Result<ResolvedMediaSource>> + Send;
}

/// Outcome of a restart request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartOutcome {
    /// Resolution finished while this request was still the latest
    Resolved {
        source: ResolvedMediaSource,
        generation: u64,
    },
    /// A newer request or a cancel arrived first
    Superseded,
}

/// Runs restarts with last-request-wins semantics
pub struct RestartCoordinator<R> {
    resolver: Arc<R>,
    generation: watch::Sender<u64>,
}

impl<R: MediaSourceResolver> RestartCoordinator<R> {
    pub fn new(resolver: Arc<R>) -> Self {
        let (generation, _) = watch::channel(0);
        Self { resolver, generation }
    }

    /// Re-resolve the media source for `request`
    ///
    /// # Returns
    ///
    /// Returns [`RestartOutcome::Superseded`] if another restart or a cancel
    /// happened before resolution finished, and [`DirectPlayError::Resolve`]
    /// if the resolver failed.
    pub async fn restart(&self, request: PlaybackRequest) -> Result<RestartOutcome> {
        let generation = self.bump();
        // A new receiver has already seen the current generation
        let mut changes = self.generation.subscribe();

        info!(
            "Restart {} for item {} (audio {:?}, subtitle {:?}, at {:?})",
            generation, request.item_id, request.audio_stream_index, request.subtitle_stream_index, request.start_position
        );

        let resolve = self.resolver.resolve(request);
        tokio::pin!(resolve);

        tokio::select! {
            biased;

            _ = changes.changed() => {
                debug!("Restart {} superseded while resolving", generation);
                Ok(RestartOutcome::Superseded)
            }
            result = &mut resolve => {
                if !self.is_current(generation) {
                    debug!("Restart {} superseded after resolving", generation);
                    return Ok(RestartOutcome::Superseded);
                }
                match result {
                    Ok(source) => Ok(RestartOutcome::Resolved { source, generation }),
                    Err(e) => {
                        warn!("Restart {} failed: {}", generation, e);
                        Err(match e {
                            DirectPlayError::Resolve(_) => e,
                            other => DirectPlayError::Resolve(other.to_string()),
                        })
                    }
                }
            }
        }
    }

    /// Supersede any in-flight restart without starting a new one
    pub fn cancel(&self) {
        let generation = self.bump();
        debug!("Cancelled restarts up to {}", generation);
    }

    /// Whether `generation` is still the latest request
    pub fn is_current(&self, generation: u64) -> bool {
        *self.generation.borrow() == generation
    }

    pub fn resolver(&self) -> &Arc<R> {
        &self.resolver
    }

    fn bump(&self) -> u64 {
        let mut current = 0;
        self.generation.send_modify(|generation| {
            *generation += 1;
            current = *generation;
        });
        current
    }
}
