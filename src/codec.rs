//! Codec family classification.
//!
//! Streams are grouped into adaptation sets by codec family rather than by the
//! full codec string: `avc1.640028` and `avc1.4d401f` both belong to
//! [`CodecClass::Avc`]. Matching is a case-sensitive prefix test.

use crate::stream::Stream;

/// Codec families recognized in manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecClass {
    /// Not a supported codec. Streams of this class are never emitted.
    Unknown,
    /// H.264 / AVC (`avc*`).
    Avc,
    /// H.265 / HEVC (`hev*`).
    Hevc,
    /// VP9 (`vp9*`).
    Vp9,
    /// AV1 (`av01*`).
    Av1,
    /// MPEG-4 audio (`mp4a*`).
    Mp4a,
    /// Opus (`opus*`).
    Opus,
}

const VIDEO_PREFIXES: [(&str, CodecClass); 4] = [
    ("avc", CodecClass::Avc),
    ("vp9", CodecClass::Vp9),
    ("hev", CodecClass::Hevc),
    ("av01", CodecClass::Av1),
];

const AUDIO_PREFIXES: [(&str, CodecClass); 2] =
    [("mp4a", CodecClass::Mp4a), ("opus", CodecClass::Opus)];

fn match_prefix(codec: Option<&str>, table: &[(&str, CodecClass)]) -> CodecClass {
    codec
        .and_then(|codec| {
            table
                .iter()
                .find(|(prefix, _)| codec.starts_with(prefix))
                .map(|&(_, class)| class)
        })
        .unwrap_or(CodecClass::Unknown)
}

impl CodecClass {
    /// Classify a video codec identifier.
    ///
    /// ```
    /// use mpdgen::CodecClass;
    ///
    /// assert_eq!(CodecClass::from_video_codec(Some("vp09.00.40.08")), CodecClass::Unknown);
    /// assert_eq!(CodecClass::from_video_codec(Some("vp9")), CodecClass::Vp9);
    /// assert_eq!(CodecClass::from_video_codec(None), CodecClass::Unknown);
    /// ```
    pub fn from_video_codec(codec: Option<&str>) -> Self {
        match_prefix(codec, &VIDEO_PREFIXES)
    }

    /// Classify an audio codec identifier.
    pub fn from_audio_codec(codec: Option<&str>) -> Self {
        match_prefix(codec, &AUDIO_PREFIXES)
    }

    /// Classify a stream by the codec relevant to its kind: the video codec
    /// for video streams, the audio codec for audio streams.
    ///
    /// Streams of unknown kind are always [`Unknown`](CodecClass::Unknown).
    pub fn of_stream(stream: &Stream) -> Self {
        if stream.mime_type.is_video() {
            Self::from_video_codec(stream.video_codec.as_deref())
        } else if stream.mime_type.is_audio() {
            Self::from_audio_codec(stream.audio_codec.as_deref())
        } else {
            CodecClass::Unknown
        }
    }

    /// Returns `true` unless this is [`Unknown`](CodecClass::Unknown).
    pub fn is_known(self) -> bool {
        self != CodecClass::Unknown
    }
}
