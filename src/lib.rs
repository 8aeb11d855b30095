//! # mpdgen
//!
//! Generate DASH manifests (MPD documents) for media assets whose streams are
//! fetched in byte ranges from single files.
//!
//! A [`MediaInfo`] lists the adaptive streams a scraper found for an asset.
//! [`ManifestGenerator`] groups them into adaptation sets by mime type and
//! codec family, computes per-set maxima, and emits an on-demand, static MPD,
//! either as a string or as an atomically written file.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use mpdgen::{AdaptiveStream, ByteRange, ManifestGenerator, MediaInfo, StreamMimeType};
//!
//! let info = MediaInfo::new(125)
//!     .with_stream(
//!         AdaptiveStream::new(136, StreamMimeType::VideoMp4, "https://cdn.example/720.mp4")
//!             .with_video_codec("avc1.4d401f")
//!             .with_resolution(1280, 720)
//!             .with_fps(30)
//!             .with_bitrate(1_500_000)
//!             .with_init_range(ByteRange::new(0, 740))
//!             .with_index_range(ByteRange::new(741, 1204)),
//!     )
//!     .with_stream(
//!         AdaptiveStream::new(140, StreamMimeType::AudioMp4, "https://cdn.example/a.m4a")
//!             .with_audio_codec("mp4a.40.2")
//!             .with_bitrate(128_000),
//!     );
//!
//! let mut generator = ManifestGenerator::new();
//! generator.set_media_info(Arc::new(info));
//!
//! let manifest = generator.to_data()?;
//! assert!(manifest.contains(r#"mediaPresentationDuration="PT125S""#));
//! # Ok::<(), mpdgen::ManifestError>(())
//! ```
//!
//! ## Filtering
//!
//! ```
//! use mpdgen::{ManifestGenerator, StreamFilter};
//!
//! let mut generator = ManifestGenerator::new();
//! generator.set_filter(StreamFilter::new(|stream| stream.height <= 720));
//! ```
//!
//! Streams whose kind or codec is not recognized, and streams rejected by the
//! filter, are left out of the manifest. They are reported through the `log`
//! crate at debug level, never as errors.

pub mod adaptation;
pub mod codec;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod manifest;
pub mod metadata;
pub mod persist;
pub mod stream;
pub mod utilities;
mod writer;

pub use adaptation::{AdaptationGroup, group_streams};
pub use codec::CodecClass;
pub use config::{DEFAULT_INDENT, ManifestConfig};
pub use error::ManifestError;
pub use filter::StreamFilter;
pub use generator::ManifestGenerator;
pub use manifest::emit_manifest;
pub use metadata::MediaInfo;
pub use persist::write_atomic;
pub use stream::{AdaptiveStream, ByteRange, Stream, StreamMimeType};
pub use utilities::{gcd, iso_duration, pixel_aspect_ratio};
