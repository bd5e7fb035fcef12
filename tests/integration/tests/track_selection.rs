//! Integration tests for stream selection against a mocked renderer
//!
//! The mock verifies exactly which renderer commands a selection issues,
//! including that no command is issued when none should be.

use directplay::player::{
    MediaStreamType, PlayMethod, PreparedMedia, TrackChange, TrackGroup, TrackRenderer, TrackSelector, TrackType,
};
use directplay::DirectPlayError;
use directplay_integration_tests::sources;
use mockall::mock;
use mockall::predicate::eq;
use std::time::Duration;

mock! {
    pub Renderer {}

    impl TrackRenderer for Renderer {
        fn track_groups(&self) -> Vec<TrackGroup>;
        fn select_track_group(&mut self, track_type: TrackType, group_index: usize) -> bool;
        fn clear_and_disable(&mut self, track_type: TrackType);
        fn prepare(&mut self, media: &PreparedMedia);
        fn position(&self) -> Duration;
    }
}

fn movie_renderer() -> MockRenderer {
    let mut renderer = MockRenderer::new();
    renderer.expect_track_groups().returning(sources::movie_groups);
    renderer
}

#[test]
fn test_same_audio_twice_touches_renderer_once() {
    let mut source = sources::movie("item", PlayMethod::DirectPlay);
    let mut renderer = movie_renderer();
    renderer
        .expect_select_track_group()
        .with(eq(TrackType::Audio), eq(2))
        .times(1)
        .return_const(true);

    let mut selector = TrackSelector::new(&mut source, &mut renderer);
    assert_eq!(selector.select_audio_track(2, false).unwrap(), TrackChange::Applied);
    assert_eq!(selector.select_audio_track(2, false).unwrap(), TrackChange::Unchanged);
    assert_eq!(selector.select_audio_track(2, false).unwrap(), TrackChange::Unchanged);
}

#[test]
fn test_already_selected_audio_is_noop() {
    let mut source = sources::movie("item", PlayMethod::DirectPlay);
    let mut renderer = movie_renderer();
    renderer.expect_select_track_group().never();

    let change = TrackSelector::new(&mut source, &mut renderer).select_audio_track(1, false).unwrap();
    assert_eq!(change, TrackChange::Unchanged);
}

#[test]
fn test_embedded_index_ignores_external_subtitle() {
    // Audio#0 embedded, Subtitle#1 external, Audio#2 embedded
    let mut source = sources::movie("item", PlayMethod::DirectPlay);
    source.media_streams = vec![
        sources::stream(0, MediaStreamType::Audio),
        sources::external_subtitle(1, "srt"),
        sources::stream(2, MediaStreamType::Audio),
    ];
    source.selected_audio_stream = Some(0);

    let mut renderer = MockRenderer::new();
    renderer.expect_track_groups().returning(|| {
        let mut groups = sources::movie_groups();
        groups.retain(|g| g.track_type == TrackType::Audio);
        groups
    });
    renderer
        .expect_select_track_group()
        .with(eq(TrackType::Audio), eq(1))
        .times(1)
        .return_const(true);

    let change = TrackSelector::new(&mut source, &mut renderer).select_audio_track(2, false).unwrap();
    assert_eq!(change, TrackChange::Applied);
    assert_eq!(source.selected_audio_stream, Some(2));
}

#[test]
fn test_transcode_audio_never_overrides() {
    let mut source = sources::movie("item", PlayMethod::Transcode);
    let mut renderer = MockRenderer::new();
    renderer.expect_track_groups().never();
    renderer.expect_select_track_group().never();

    let change = TrackSelector::new(&mut source, &mut renderer).select_audio_track(2, false).unwrap();
    assert_eq!(change, TrackChange::RestartRequired { audio_stream_index: 2 });
    assert_eq!(source.selected_audio_stream, Some(1));
}

#[test]
fn test_direct_play_audio_overrides_without_restart() {
    let mut source = sources::movie("item", PlayMethod::DirectPlay);
    let mut renderer = movie_renderer();
    renderer.expect_select_track_group().times(1).return_const(true);

    let change = TrackSelector::new(&mut source, &mut renderer).select_audio_track(2, false).unwrap();
    assert!(!change.requires_restart());
    assert!(change.succeeded());
}

#[test]
fn test_subtitles_never_restart_under_transcode() {
    let mut source = sources::movie("item", PlayMethod::Transcode);
    let mut renderer = movie_renderer();
    renderer
        .expect_select_track_group()
        .with(eq(TrackType::Text), eq(4))
        .times(1)
        .return_const(true);
    renderer
        .expect_select_track_group()
        .with(eq(TrackType::Text), eq(3))
        .times(1)
        .return_const(true);

    let mut selector = TrackSelector::new(&mut source, &mut renderer);
    assert_eq!(selector.select_subtitle_track(Some(4), false).unwrap(), TrackChange::Applied);
    assert_eq!(selector.select_subtitle_track(Some(3), false).unwrap(), TrackChange::Applied);
    assert_eq!(source.selected_subtitle_stream, Some(3));
}

#[test]
fn test_disable_subtitles_always_succeeds() {
    let mut source = sources::movie("item", PlayMethod::DirectPlay);
    source.selected_subtitle_stream = Some(3);
    let mut renderer = MockRenderer::new();
    renderer
        .expect_clear_and_disable()
        .with(eq(TrackType::Text))
        .times(1)
        .return_const(());

    let change = TrackSelector::new(&mut source, &mut renderer).select_subtitle_track(None, false).unwrap();
    assert_eq!(change, TrackChange::Applied);
    assert_eq!(source.selected_subtitle_stream, None);
}

#[test]
fn test_structural_mismatch_keeps_state() {
    let mut source = sources::movie("item", PlayMethod::DirectPlay);
    let mut renderer = MockRenderer::new();
    renderer.expect_track_groups().returning(Vec::new);
    renderer.expect_select_track_group().never();

    let mut selector = TrackSelector::new(&mut source, &mut renderer);
    assert_eq!(selector.select_audio_track(2, false).unwrap(), TrackChange::NotFound);
    assert_eq!(selector.select_subtitle_track(Some(4), false).unwrap(), TrackChange::NotFound);

    assert_eq!(source.selected_audio_stream, Some(1));
    assert_eq!(source.selected_subtitle_stream, None);
}

#[test]
fn test_contract_violations() {
    let mut source = sources::movie("item", PlayMethod::DirectPlay);
    let mut renderer = MockRenderer::new();
    renderer.expect_select_track_group().never();

    let mut selector = TrackSelector::new(&mut source, &mut renderer);
    assert!(matches!(selector.select_audio_track(0, false), Err(DirectPlayError::InvalidStream(_))));
    assert!(matches!(selector.select_subtitle_track(Some(2), false), Err(DirectPlayError::InvalidStream(_))));
    assert!(matches!(selector.select_audio_track(42, true), Err(DirectPlayError::InvalidStream(_))));
}

#[test]
fn test_toggle_picks_lowest_index_subtitle() {
    let mut source = sources::movie("item", PlayMethod::DirectPlay);
    let mut renderer = movie_renderer();
    renderer
        .expect_select_track_group()
        .with(eq(TrackType::Text), eq(3))
        .times(1)
        .return_const(true);
    renderer.expect_clear_and_disable().times(1).return_const(());

    let mut selector = TrackSelector::new(&mut source, &mut renderer);
    assert!(selector.toggle_subtitles().unwrap());
    assert!(!selector.toggle_subtitles().unwrap());
}
