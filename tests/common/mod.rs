//! Shared stream fixtures for integration tests.

#![allow(dead_code)]

use mpdgen::{AdaptiveStream, ByteRange, MediaInfo, StreamMimeType};

pub fn avc_video(itag: u32, width: u32, height: u32, fps: u32) -> AdaptiveStream {
    AdaptiveStream::new(
        itag,
        StreamMimeType::VideoMp4,
        format!("https://cdn.example/video/{itag}.mp4"),
    )
    .with_video_codec("avc1.4d401f")
    .with_resolution(width, height)
    .with_fps(fps)
    .with_bitrate(u64::from(width) * 1_000)
    .with_init_range(ByteRange::new(0, 740))
    .with_index_range(ByteRange::new(741, 1204))
}

pub fn vp9_video(itag: u32, width: u32, height: u32, fps: u32) -> AdaptiveStream {
    AdaptiveStream::new(
        itag,
        StreamMimeType::VideoWebm,
        format!("https://cdn.example/video/{itag}.webm"),
    )
    .with_video_codec("vp9")
    .with_resolution(width, height)
    .with_fps(fps)
    .with_bitrate(u64::from(width) * 800)
}

pub fn mp4a_audio(itag: u32) -> AdaptiveStream {
    AdaptiveStream::new(
        itag,
        StreamMimeType::AudioMp4,
        format!("https://cdn.example/audio/{itag}.m4a"),
    )
    .with_audio_codec("mp4a.40.2")
    .with_bitrate(128_000)
    .with_init_range(ByteRange::new(0, 631))
    .with_index_range(ByteRange::new(632, 1099))
}

pub fn opus_audio(itag: u32) -> AdaptiveStream {
    AdaptiveStream::new(
        itag,
        StreamMimeType::AudioWebm,
        format!("https://cdn.example/audio/{itag}.webm"),
    )
    .with_audio_codec("opus")
    .with_bitrate(160_000)
}

/// Two AVC video streams (720p and 360p at 30 fps) and one MP4A audio stream.
pub fn sample_media_info() -> MediaInfo {
    MediaInfo::new(125)
        .with_stream(avc_video(136, 1280, 720, 30))
        .with_stream(avc_video(134, 640, 360, 30))
        .with_stream(mp4a_audio(140))
}
