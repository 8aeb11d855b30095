//! Core [`ManifestGenerator`] implementation.
//!
//! `ManifestGenerator` is the main entry point for the crate. It holds the
//! media description to render, the output formatting settings, and an
//! optional [`StreamFilter`], and produces the manifest as a string or as an
//! atomically written file.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::path::Path;
use std::sync::Arc;

use crate::{
    adaptation::group_streams,
    config::ManifestConfig,
    error::ManifestError,
    filter::StreamFilter,
    manifest::emit_manifest,
    metadata::MediaInfo,
    persist::write_atomic,
};

/// Generates DASH manifests from a [`MediaInfo`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use mpdgen::{AdaptiveStream, ManifestGenerator, MediaInfo, StreamMimeType};
///
/// let info = MediaInfo::new(60).with_stream(
///     AdaptiveStream::new(140, StreamMimeType::AudioMp4, "https://cdn.example/a.m4a")
///         .with_audio_codec("mp4a.40.2")
///         .with_bitrate(128_000),
/// );
///
/// let mut generator = ManifestGenerator::new();
/// generator.set_pretty(true);
/// generator.set_media_info(Arc::new(info));
///
/// let manifest = generator.to_data()?;
/// assert!(manifest.starts_with("<?xml"));
/// # Ok::<(), mpdgen::ManifestError>(())
/// ```
#[derive(Default)]
pub struct ManifestGenerator {
    config: ManifestConfig,
    media_info: Option<Arc<MediaInfo>>,
    filter: Option<StreamFilter>,
}

impl Debug for ManifestGenerator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ManifestGenerator")
            .field("config", &self.config)
            .field("has_media_info", &self.media_info.is_some())
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}

impl ManifestGenerator {
    /// Create a generator with default settings: pretty printing off,
    /// indent width 2, no media info, no filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with the given formatting settings.
    pub fn with_config(config: ManifestConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current formatting settings.
    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    /// Replace the formatting settings.
    pub fn set_config(&mut self, config: ManifestConfig) {
        self.config = config;
    }

    /// Enable or disable pretty printing.
    pub fn set_pretty(&mut self, pretty: bool) {
        self.config = self.config.with_pretty(pretty);
    }

    /// Set the number of spaces per nesting level used in pretty mode.
    pub fn set_indent(&mut self, indent: u32) {
        self.config = self.config.with_indent(indent);
    }

    /// Set the media description to render, releasing the previous one.
    pub fn set_media_info(&mut self, media_info: Arc<MediaInfo>) {
        self.media_info = Some(media_info);
    }

    /// The media description currently set, if any.
    pub fn media_info(&self) -> Option<&Arc<MediaInfo>> {
        self.media_info.as_ref()
    }

    /// Install a stream filter.
    ///
    /// A previously installed filter is released before the new one is
    /// stored.
    pub fn set_filter(&mut self, filter: StreamFilter) {
        drop(self.filter.take());
        self.filter = Some(filter);
    }

    /// Remove and release the current stream filter, if any.
    pub fn clear_filter(&mut self) {
        drop(self.filter.take());
    }

    /// Returns `true` if a stream filter is installed.
    pub fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Generate the manifest as a string.
    ///
    /// The string is empty if no stream qualifies for the manifest.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidState`] if no media info has been set.
    pub fn to_data(&self) -> Result<String, ManifestError> {
        let media_info = self.media_info.as_deref().ok_or_else(|| {
            ManifestError::InvalidState("media info must be set before generating".to_string())
        })?;

        log::debug!("Generating manifest data...");

        let groups = group_streams(&media_info.adaptive_streams, self.filter.as_ref());
        let manifest = emit_manifest(media_info, &groups, &self.config);

        log::debug!(
            "Manifest data generated ({} adaptations, {} bytes)",
            groups.len(),
            manifest.len()
        );

        Ok(manifest)
    }

    /// Generate the manifest and write it to `path`, replacing any existing
    /// file atomically.
    ///
    /// An empty manifest produces an empty file.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidState`] if no media info has been set,
    /// or [`ManifestError::IoError`] if writing or renaming fails. The target
    /// file is left untouched on error.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ManifestError> {
        let path = path.as_ref();
        let manifest = self.to_data()?;

        write_atomic(path, manifest.as_bytes())?;

        log::info!("Wrote manifest ({} bytes) to {}", manifest.len(), path.display());

        Ok(())
    }
}
