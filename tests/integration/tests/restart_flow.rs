//! Integration tests for restart-driven stream changes
//!
//! These tests run the playback controller with a delayed fake resolver on
//! a paused tokio clock to check last-request-wins behavior.

use anyhow::Result;
use directplay::player::{
    AudioChange, PlayMethod, PlaybackController, PlaybackSettings, RestartStatus, TrackChange, TrackType,
};
use directplay::DirectPlayError;
use directplay_integration_tests::{FakeRenderer, FakeResolver, RendererCommand, PHONE_CAPABILITIES};
use std::sync::Arc;
use std::time::Duration;

fn controller(play_method: PlayMethod) -> (PlaybackController<FakeResolver>, Arc<FakeResolver>, FakeRenderer) {
    let resolver = FakeResolver::new(play_method, Duration::from_millis(200));
    let renderer = FakeRenderer::default();
    let controller = PlaybackController::new(
        Arc::clone(&resolver),
        Box::new(renderer.clone()),
        Arc::clone(&PHONE_CAPABILITIES),
        PlaybackSettings::default(),
    );
    (controller, resolver, renderer)
}

#[tokio::test(start_paused = true)]
async fn test_start_prepares_and_selects_defaults() -> Result<()> {
    let (controller, resolver, renderer) = controller(PlayMethod::DirectPlay);

    assert_eq!(controller.start("movie", Duration::from_secs(5)).await?, RestartStatus::Applied);
    assert_eq!(
        renderer.commands(),
        vec![
            RendererCommand::Prepare(Some("/videos/movie/stream.mkv".to_string())),
            RendererCommand::Select(TrackType::Audio, 1),
            RendererCommand::Disable(TrackType::Text),
        ]
    );

    let requests = resolver.requests.lock();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].start_position, Duration::from_secs(5));
    assert!(!requests[0].device_profile.direct_play_profiles.is_empty());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_unknown_server_default_subtitle_still_starts() -> Result<()> {
    let (controller, resolver, renderer) = controller(PlayMethod::DirectPlay);
    *resolver.default_subtitle.lock() = Some(-1);

    assert_eq!(controller.start("movie", Duration::ZERO).await?, RestartStatus::Applied);
    assert_eq!(
        renderer.commands(),
        vec![
            RendererCommand::Prepare(Some("/videos/movie/stream.mkv".to_string())),
            RendererCommand::Select(TrackType::Audio, 1),
            RendererCommand::Disable(TrackType::Text),
        ]
    );

    let source = controller.current_source().unwrap();
    assert_eq!(source.selected_audio_stream, Some(1));
    assert_eq!(source.selected_subtitle_stream, None);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_last_audio_request_wins() -> Result<()> {
    let (controller, resolver, renderer) = controller(PlayMethod::Transcode);
    controller.start("movie", Duration::ZERO).await?;
    *renderer.position.lock() = Duration::from_secs(90);

    let (first, second) = tokio::join!(controller.select_audio_track(2), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        controller.select_audio_track(1).await
    });

    assert_eq!(first?, AudioChange::Superseded);
    assert_eq!(second?, AudioChange::Restarted);

    let source = controller.current_source().unwrap();
    assert_eq!(source.selected_audio_stream, Some(1));

    let requests = resolver.requests.lock();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[1].audio_stream_index, Some(2));
    assert_eq!(requests[2].audio_stream_index, Some(1));
    assert_eq!(requests[2].start_position, Duration::from_secs(90));
    assert_eq!(requests[2].media_source_id.as_deref(), Some("movie-source"));

    // One prepare for start, one for the winning restart
    let prepares = renderer
        .commands()
        .iter()
        .filter(|c| matches!(c, RendererCommand::Prepare(_)))
        .count();
    assert_eq!(prepares, 2);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_discards_restart_in_flight() -> Result<()> {
    let (controller, _, _) = controller(PlayMethod::Transcode);
    controller.start("movie", Duration::ZERO).await?;

    let (change, _) = tokio::join!(controller.select_audio_track(2), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        controller.stop();
    });

    assert_eq!(change?, AudioChange::Superseded);
    assert!(controller.current_source().is_none());

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_restart_failure_keeps_previous_session() -> Result<()> {
    let (controller, resolver, _) = controller(PlayMethod::Transcode);
    controller.start("movie", Duration::ZERO).await?;
    resolver.set_failing(true);

    let err = controller.select_audio_track(2).await.unwrap_err();
    assert!(matches!(err, DirectPlayError::Resolve(_)));
    assert!(err.interrupts_playback());

    // Still on the original source and audio stream
    assert_eq!(controller.current_source().unwrap().selected_audio_stream, Some(1));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_live_changes_do_not_resolve() -> Result<()> {
    let (controller, resolver, _) = controller(PlayMethod::DirectPlay);
    controller.start("movie", Duration::ZERO).await?;

    assert_eq!(controller.select_audio_track(2).await?, AudioChange::Live(TrackChange::Applied));
    assert_eq!(controller.select_subtitle_track(Some(4))?, TrackChange::Applied);
    assert!(!controller.toggle_subtitles()?);

    assert_eq!(resolver.requests.lock().len(), 1);

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_bitrate_change_restarts_with_new_profile() -> Result<()> {
    let (controller, resolver, _) = controller(PlayMethod::DirectPlay);
    controller.start("movie", Duration::ZERO).await?;

    assert_eq!(controller.change_max_bitrate(3_000_000).await?, Some(RestartStatus::Applied));

    let requests = resolver.requests.lock();
    assert_eq!(requests[1].max_streaming_bitrate, 3_000_000);
    assert_eq!(requests[1].device_profile.max_streaming_bitrate, 3_000_000);

    Ok(())
}
