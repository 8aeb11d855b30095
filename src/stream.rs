//! Stream descriptions consumed by the generator.
//!
//! A [`Stream`] carries the properties shared by every kind of media stream
//! (identifier, container, codecs, dimensions, bit rate, URI). An
//! [`AdaptiveStream`] extends it with the byte ranges locating the
//! initialization segment and the segment index inside the media file.
//!
//! Values are plain data: the scraping layer fills them in, the generator only
//! reads them.
//!
//! # Example
//!
//! ```
//! use mpdgen::{AdaptiveStream, ByteRange, StreamMimeType};
//!
//! let stream = AdaptiveStream::new(137, StreamMimeType::VideoMp4, "https://cdn.example/v.mp4")
//!     .with_video_codec("avc1.640028")
//!     .with_resolution(1920, 1080)
//!     .with_fps(30)
//!     .with_bitrate(4_000_000)
//!     .with_init_range(ByteRange::new(0, 740))
//!     .with_index_range(ByteRange::new(741, 1204));
//!
//! assert_eq!(stream.codecs().as_deref(), Some("avc1.640028"));
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// Container and content kind of a stream.
///
/// Parsed from and displayed as a mime type string such as `"video/mp4"`.
/// Strings that do not name one of the four supported combinations map to
/// [`Unknown`](StreamMimeType::Unknown) when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StreamMimeType {
    /// Unrecognized or missing mime type. Never emitted.
    #[default]
    Unknown,
    /// `video/mp4`
    VideoMp4,
    /// `video/webm`
    VideoWebm,
    /// `audio/mp4`
    AudioMp4,
    /// `audio/webm`
    AudioWebm,
}

impl StreamMimeType {
    /// Parse a mime type, mapping anything unsupported to
    /// [`Unknown`](StreamMimeType::Unknown).
    pub fn from_mime_lossy(value: &str) -> Self {
        value.parse().unwrap_or(StreamMimeType::Unknown)
    }

    /// Returns `true` for the video kinds.
    pub fn is_video(self) -> bool {
        matches!(self, StreamMimeType::VideoMp4 | StreamMimeType::VideoWebm)
    }

    /// Returns `true` for the audio kinds.
    pub fn is_audio(self) -> bool {
        matches!(self, StreamMimeType::AudioMp4 | StreamMimeType::AudioWebm)
    }

    /// The `contentType` attribute value, `"video"` or `"audio"`.
    pub fn content_type(self) -> Option<&'static str> {
        match self {
            StreamMimeType::VideoMp4 | StreamMimeType::VideoWebm => Some("video"),
            StreamMimeType::AudioMp4 | StreamMimeType::AudioWebm => Some("audio"),
            StreamMimeType::Unknown => None,
        }
    }

    /// The container part of the mime type, `"mp4"` or `"webm"`.
    pub fn container(self) -> Option<&'static str> {
        match self {
            StreamMimeType::VideoMp4 | StreamMimeType::AudioMp4 => Some("mp4"),
            StreamMimeType::VideoWebm | StreamMimeType::AudioWebm => Some("webm"),
            StreamMimeType::Unknown => None,
        }
    }

    /// The full `mimeType` attribute value, or `None` for
    /// [`Unknown`](StreamMimeType::Unknown).
    pub fn as_mime_str(self) -> Option<&'static str> {
        match self {
            StreamMimeType::VideoMp4 => Some("video/mp4"),
            StreamMimeType::VideoWebm => Some("video/webm"),
            StreamMimeType::AudioMp4 => Some("audio/mp4"),
            StreamMimeType::AudioWebm => Some("audio/webm"),
            StreamMimeType::Unknown => None,
        }
    }
}

impl Display for StreamMimeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_mime_str().unwrap_or("unknown"))
    }
}

impl FromStr for StreamMimeType {
    type Err = ManifestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "video/mp4" => Ok(StreamMimeType::VideoMp4),
            "video/webm" => Ok(StreamMimeType::VideoWebm),
            "audio/mp4" => Ok(StreamMimeType::AudioMp4),
            "audio/webm" => Ok(StreamMimeType::AudioWebm),
            _ => Err(ManifestError::InvalidMimeType(value.to_string())),
        }
    }
}

impl From<String> for StreamMimeType {
    fn from(value: String) -> Self {
        StreamMimeType::from_mime_lossy(&value)
    }
}

impl From<StreamMimeType> for String {
    fn from(value: StreamMimeType) -> Self {
        value.to_string()
    }
}

/// An inclusive byte range inside a media file, written as `start-end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ByteRange {
    /// First byte offset.
    pub start: u64,
    /// Last byte offset.
    pub end: u64,
}

impl ByteRange {
    /// Create a byte range from its two offsets.
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}

impl Display for ByteRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for ByteRange {
    type Err = ManifestError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ManifestError::InvalidByteRange(value.to_string());

        let mut parts = value.trim().split('-');
        let (Some(start), Some(end), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        Ok(Self {
            start: start.trim().parse().map_err(|_| invalid())?,
            end: end.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for ByteRange {
    type Error = ManifestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ByteRange> for String {
    fn from(value: ByteRange) -> Self {
        value.to_string()
    }
}

/// Properties common to every media stream.
///
/// Numeric fields use `0` for "unknown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    /// Numeric stream identifier, used as the Representation id.
    pub itag: u32,
    /// Container and content kind.
    #[serde(default)]
    pub mime_type: StreamMimeType,
    /// Video codec identifier (e.g. `"avc1.640028"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
    /// Audio codec identifier (e.g. `"mp4a.40.2"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_codec: Option<String>,
    /// Frame width in pixels.
    #[serde(default)]
    pub width: u32,
    /// Frame height in pixels.
    #[serde(default)]
    pub height: u32,
    /// Frames per second.
    #[serde(default)]
    pub fps: u32,
    /// Bit rate in bits per second.
    #[serde(default)]
    pub bitrate: u64,
    /// Location of the media file.
    #[serde(default)]
    pub uri: String,
}

impl Stream {
    /// Value of the `codecs` attribute for this stream.
    ///
    /// The video codec, the audio codec, or both joined as
    /// `"{video}, {audio}"`. `None` when neither is set.
    pub fn codecs(&self) -> Option<String> {
        match (self.video_codec.as_deref(), self.audio_codec.as_deref()) {
            (Some(video), Some(audio)) => Some(format!("{video}, {audio}")),
            (Some(video), None) => Some(video.to_string()),
            (None, Some(audio)) => Some(audio.to_string()),
            (None, None) => None,
        }
    }
}

/// A stream that can be fetched in byte ranges, as listed in a manifest.
///
/// Dereferences to its [`Stream`] properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptiveStream {
    /// Common stream properties.
    #[serde(flatten)]
    pub stream: Stream,
    /// Byte range of the initialization segment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init_range: Option<ByteRange>,
    /// Byte range of the segment index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_range: Option<ByteRange>,
}

impl Deref for AdaptiveStream {
    type Target = Stream;

    fn deref(&self) -> &Stream {
        &self.stream
    }
}

impl AdaptiveStream {
    /// Create a stream with the given identifier, kind, and URI.
    ///
    /// All other properties start unset.
    pub fn new(itag: u32, mime_type: StreamMimeType, uri: impl Into<String>) -> Self {
        Self {
            stream: Stream {
                itag,
                mime_type,
                uri: uri.into(),
                ..Stream::default()
            },
            init_range: None,
            index_range: None,
        }
    }

    /// Set the video codec identifier.
    #[must_use]
    pub fn with_video_codec(mut self, codec: impl Into<String>) -> Self {
        self.stream.video_codec = Some(codec.into());
        self
    }

    /// Set the audio codec identifier.
    #[must_use]
    pub fn with_audio_codec(mut self, codec: impl Into<String>) -> Self {
        self.stream.audio_codec = Some(codec.into());
        self
    }

    /// Set frame width and height in pixels.
    #[must_use]
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.stream.width = width;
        self.stream.height = height;
        self
    }

    /// Set frames per second.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.stream.fps = fps;
        self
    }

    /// Set bit rate in bits per second.
    #[must_use]
    pub fn with_bitrate(mut self, bitrate: u64) -> Self {
        self.stream.bitrate = bitrate;
        self
    }

    /// Set the initialization segment byte range.
    #[must_use]
    pub fn with_init_range(mut self, range: ByteRange) -> Self {
        self.init_range = Some(range);
        self
    }

    /// Set the segment index byte range.
    #[must_use]
    pub fn with_index_range(mut self, range: ByteRange) -> Self {
        self.index_range = Some(range);
        self
    }
}
