//! Partitioning streams into adaptation sets.
//!
//! [`group_streams`] walks the streams of a [`MediaInfo`](crate::MediaInfo)
//! once, in order, and collects every stream that passes the filter and has a
//! recognized kind and codec into the [`AdaptationGroup`] keyed by
//! `(mime type, codec class)`. Groups are returned in the order their first
//! member was seen; members keep input order.

use crate::codec::CodecClass;
use crate::filter::StreamFilter;
use crate::stream::{AdaptiveStream, StreamMimeType};
use crate::utilities::pixel_aspect_ratio;

/// Streams sharing a mime type and codec family, plus their running maxima.
#[derive(Debug, Clone)]
pub struct AdaptationGroup<'a> {
    mime_type: StreamMimeType,
    codec: CodecClass,
    max_width: u32,
    max_height: u32,
    max_fps: u32,
    streams: Vec<&'a AdaptiveStream>,
}

impl<'a> AdaptationGroup<'a> {
    fn new(mime_type: StreamMimeType, codec: CodecClass) -> Self {
        Self {
            mime_type,
            codec,
            max_width: 0,
            max_height: 0,
            max_fps: 0,
            streams: Vec::new(),
        }
    }

    fn push(&mut self, stream: &'a AdaptiveStream) {
        self.max_width = self.max_width.max(stream.width);
        self.max_height = self.max_height.max(stream.height);
        self.max_fps = self.max_fps.max(stream.fps);
        self.streams.push(stream);
    }

    /// Mime type shared by all members.
    pub fn mime_type(&self) -> StreamMimeType {
        self.mime_type
    }

    /// Codec family shared by all members.
    pub fn codec(&self) -> CodecClass {
        self.codec
    }

    /// Largest member width, `0` if no member reported one.
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Largest member height, `0` if no member reported one.
    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Largest member frame rate, `0` if no member reported one.
    pub fn max_fps(&self) -> u32 {
        self.max_fps
    }

    /// Members in input order.
    pub fn streams(&self) -> &[&'a AdaptiveStream] {
        &self.streams
    }

    /// `"video"` or `"audio"`.
    pub fn content_type(&self) -> Option<&'static str> {
        self.mime_type.content_type()
    }

    /// Full mime type string, e.g. `"video/webm"`.
    pub fn mime_str(&self) -> Option<&'static str> {
        self.mime_type.as_mime_str()
    }

    /// Pixel aspect ratio of the largest member dimensions.
    pub fn par(&self) -> String {
        pixel_aspect_ratio(self.max_width, self.max_height)
    }

    fn matches(&self, mime_type: StreamMimeType, codec: CodecClass) -> bool {
        self.mime_type == mime_type && self.codec == codec
    }
}

/// Group `streams` into adaptation sets.
///
/// Streams rejected by `filter`, of unknown kind, or whose relevant codec is
/// not recognized are left out and logged at debug level.
///
/// # Example
///
/// ```
/// use mpdgen::{group_streams, AdaptiveStream, CodecClass, StreamMimeType};
///
/// let streams = vec![
///     AdaptiveStream::new(1, StreamMimeType::VideoMp4, "v1").with_video_codec("avc1.4d401f"),
///     AdaptiveStream::new(2, StreamMimeType::AudioMp4, "a1").with_audio_codec("mp4a.40.2"),
///     AdaptiveStream::new(3, StreamMimeType::VideoMp4, "v2").with_video_codec("avc1.640028"),
/// ];
///
/// let groups = group_streams(&streams, None);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].codec(), CodecClass::Avc);
/// assert_eq!(groups[0].streams().len(), 2);
/// ```
pub fn group_streams<'a>(
    streams: &'a [AdaptiveStream],
    filter: Option<&StreamFilter>,
) -> Vec<AdaptationGroup<'a>> {
    let mut groups: Vec<AdaptationGroup<'a>> = Vec::new();

    for stream in streams {
        if filter.is_some_and(|filter| !filter.accept(stream)) {
            log::debug!("Stream {} rejected by filter", stream.itag);
            continue;
        }

        let codec = CodecClass::of_stream(stream);
        if !codec.is_known() {
            log::debug!(
                "Cannot create adaptation for stream {} (mime type: {}, codecs: {:?})",
                stream.itag,
                stream.mime_type,
                stream.codecs(),
            );
            continue;
        }

        let index = match groups
            .iter()
            .position(|group| group.matches(stream.mime_type, codec))
        {
            Some(index) => index,
            None => {
                groups.push(AdaptationGroup::new(stream.mime_type, codec));
                groups.len() - 1
            }
        };
        groups[index].push(stream);
    }

    log::debug!(
        "Grouped {} streams into {} adaptations",
        streams.len(),
        groups.len()
    );

    groups
}
