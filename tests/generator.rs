//! ManifestGenerator configuration, filter lifecycle, and generation tests.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::{avc_video, mp4a_audio, sample_media_info};
use mpdgen::{ManifestConfig, ManifestError, ManifestGenerator, MediaInfo, StreamFilter};

/// A filter whose release routine bumps `released`.
fn counted_filter(released: &Arc<AtomicUsize>, accept: bool) -> StreamFilter {
    let released = Arc::clone(released);
    StreamFilter::with_state(
        released,
        move |_, _| accept,
        |released| {
            released.fetch_add(1, Ordering::SeqCst);
        },
    )
}

// ── Defaults and configuration ────────────────────────────────────

#[test]
fn generator_defaults() {
    let generator = ManifestGenerator::new();
    assert!(!generator.config().pretty());
    assert_eq!(generator.config().indent(), 2);
    assert!(generator.media_info().is_none());
    assert!(!generator.has_filter());

    let debug = format!("{generator:?}");
    assert!(debug.contains("ManifestGenerator"));
    assert!(debug.contains("has_media_info: false"));
}

#[test]
fn setters_update_config() {
    let mut generator = ManifestGenerator::new();
    generator.set_pretty(true);
    generator.set_indent(4);
    assert_eq!(*generator.config(), ManifestConfig::new().with_pretty(true).with_indent(4));

    generator.set_config(ManifestConfig::default());
    assert!(!generator.config().pretty());
}

// ── Errors ─────────────────────────────────────────────────────────

#[test]
fn generating_without_media_info_fails() {
    let generator = ManifestGenerator::new();

    let result = generator.to_data();
    assert!(matches!(result, Err(ManifestError::InvalidState(_))));

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("manifest.mpd");
    let result = generator.to_file(&target);
    assert!(matches!(result, Err(ManifestError::InvalidState(_))));
    assert!(!target.exists());
}

// ── Generation ─────────────────────────────────────────────────────

#[test]
fn to_data_renders_media_info() {
    let mut generator = ManifestGenerator::new();
    generator.set_media_info(Arc::new(sample_media_info()));

    let manifest = generator.to_data().unwrap();
    assert!(manifest.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(manifest.ends_with("</MPD>"));
    assert_eq!(manifest.matches("<Representation").count(), 3);
}

#[test]
fn replacing_media_info_uses_latest() {
    let mut generator = ManifestGenerator::new();
    let first = Arc::new(sample_media_info());
    generator.set_media_info(Arc::clone(&first));
    assert_eq!(Arc::strong_count(&first), 2);

    generator.set_media_info(Arc::new(MediaInfo::new(7).with_stream(mp4a_audio(140))));
    assert_eq!(Arc::strong_count(&first), 1);

    let manifest = generator.to_data().unwrap();
    assert!(manifest.contains("PT7S"));
    assert_eq!(manifest.matches("<Representation").count(), 1);
}

#[test]
fn empty_media_info_gives_empty_output() {
    let mut generator = ManifestGenerator::new();
    generator.set_media_info(Arc::new(MediaInfo::new(30)));
    let manifest = generator.to_data().unwrap();
    assert!(manifest.is_empty());
    assert_eq!(manifest.len(), 0);
}

#[test]
fn filter_limits_output() {
    let mut generator = ManifestGenerator::new();
    generator.set_media_info(Arc::new(sample_media_info()));
    generator.set_filter(StreamFilter::new(|stream| stream.height <= 360));

    let manifest = generator.to_data().unwrap();
    assert_eq!(manifest.matches("<Representation").count(), 2);
    assert!(manifest.contains(r#"maxWidth="640" maxHeight="360""#));
    assert!(!manifest.contains(r#"id="136""#));

    generator.clear_filter();
    let manifest = generator.to_data().unwrap();
    assert_eq!(manifest.matches("<Representation").count(), 3);
}

#[test]
fn all_rejecting_filter_gives_empty_output() {
    let mut generator = ManifestGenerator::new();
    generator.set_media_info(Arc::new(sample_media_info()));
    generator.set_filter(StreamFilter::new(|_| false));
    assert_eq!(generator.to_data().unwrap(), "");
}

// ── Filter lifecycle ───────────────────────────────────────────────

#[test]
fn replacing_filter_releases_previous_once() {
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));

    let mut generator = ManifestGenerator::new();
    generator.set_filter(counted_filter(&first, true));
    assert_eq!(first.load(Ordering::SeqCst), 0);

    generator.set_filter(counted_filter(&second, true));
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);

    drop(generator);
    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn clearing_filter_releases_it() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut generator = ManifestGenerator::new();
    generator.set_filter(counted_filter(&released, true));

    generator.clear_filter();
    assert_eq!(released.load(Ordering::SeqCst), 1);
    assert!(!generator.has_filter());

    generator.clear_filter();
    drop(generator);
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

#[test]
fn generation_does_not_release_filter() {
    let released = Arc::new(AtomicUsize::new(0));
    let mut generator = ManifestGenerator::new();
    generator.set_media_info(Arc::new(MediaInfo::new(5).with_stream(avc_video(1, 1280, 720, 30))));
    generator.set_filter(counted_filter(&released, true));

    for _ in 0..3 {
        generator.to_data().unwrap();
    }
    assert_eq!(released.load(Ordering::SeqCst), 0);
}

#[test]
fn filter_state_is_visible_to_predicate() {
    let mut generator = ManifestGenerator::new();
    generator.set_media_info(Arc::new(sample_media_info()));
    generator.set_filter(StreamFilter::with_state(
        vec![134_u32, 140],
        |stream, allowed| allowed.contains(&stream.itag),
        drop,
    ));

    let manifest = generator.to_data().unwrap();
    assert!(manifest.contains(r#"id="134""#));
    assert!(manifest.contains(r#"id="140""#));
    assert!(!manifest.contains(r#"id="136""#));
}

#[test]
fn generator_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<ManifestGenerator>();
}
