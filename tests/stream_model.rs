//! Stream, byte range, mime type, and media info tests.

use mpdgen::{AdaptiveStream, ByteRange, ManifestError, MediaInfo, StreamMimeType};

// ── StreamMimeType ────────────────────────────────────────────────

#[test]
fn mime_type_parsing() {
    assert_eq!("video/mp4".parse::<StreamMimeType>().unwrap(), StreamMimeType::VideoMp4);
    assert_eq!("video/webm".parse::<StreamMimeType>().unwrap(), StreamMimeType::VideoWebm);
    assert_eq!(" Audio/MP4 ".parse::<StreamMimeType>().unwrap(), StreamMimeType::AudioMp4);
    assert_eq!("audio/webm".parse::<StreamMimeType>().unwrap(), StreamMimeType::AudioWebm);
}

#[test]
fn mime_type_rejects_unsupported() {
    let error = "video/x-matroska".parse::<StreamMimeType>().unwrap_err();
    assert!(matches!(error, ManifestError::InvalidMimeType(_)));
    assert!(error.to_string().contains("video/x-matroska"));

    assert_eq!(StreamMimeType::from_mime_lossy("text/plain"), StreamMimeType::Unknown);
}

#[test]
fn mime_type_parts() {
    assert_eq!(StreamMimeType::VideoWebm.content_type(), Some("video"));
    assert_eq!(StreamMimeType::VideoWebm.container(), Some("webm"));
    assert_eq!(StreamMimeType::AudioMp4.content_type(), Some("audio"));
    assert_eq!(StreamMimeType::AudioMp4.container(), Some("mp4"));
    assert_eq!(StreamMimeType::Unknown.content_type(), None);
    assert_eq!(StreamMimeType::Unknown.as_mime_str(), None);
    assert_eq!(StreamMimeType::Unknown.to_string(), "unknown");
    assert!(StreamMimeType::VideoMp4.is_video());
    assert!(!StreamMimeType::VideoMp4.is_audio());
}

// ── ByteRange ──────────────────────────────────────────────────────

#[test]
fn byte_range_parsing() {
    assert_eq!("0-740".parse::<ByteRange>().unwrap(), ByteRange::new(0, 740));
    assert_eq!(ByteRange::new(741, 1204).to_string(), "741-1204");
}

#[test]
fn byte_range_rejects_malformed() {
    for input in ["", "12", "1-2-3", "a-5", "5-", "-5"] {
        let result = input.parse::<ByteRange>();
        assert!(
            matches!(result, Err(ManifestError::InvalidByteRange(_))),
            "expected error for {input:?}, got {result:?}",
        );
    }
}

// ── Stream::codecs ─────────────────────────────────────────────────

#[test]
fn codecs_attribute_value() {
    let video = AdaptiveStream::new(1, StreamMimeType::VideoMp4, "v").with_video_codec("avc1");
    assert_eq!(video.codecs().as_deref(), Some("avc1"));

    let audio = AdaptiveStream::new(2, StreamMimeType::AudioMp4, "a").with_audio_codec("mp4a.40.2");
    assert_eq!(audio.codecs().as_deref(), Some("mp4a.40.2"));

    let muxed = video.clone().with_audio_codec("mp4a.40.2");
    assert_eq!(muxed.codecs().as_deref(), Some("avc1, mp4a.40.2"));

    let bare = AdaptiveStream::new(3, StreamMimeType::VideoMp4, "x");
    assert_eq!(bare.codecs(), None);
}

// ── MediaInfo JSON ─────────────────────────────────────────────────

#[test]
fn media_info_from_json() {
    let info = MediaInfo::from_json(
        r#"{
            "duration": 212,
            "adaptive_streams": [
                {
                    "itag": 30080,
                    "mime_type": "video/mp4",
                    "video_codec": "avc1.640032",
                    "width": 1920,
                    "height": 1080,
                    "fps": 30,
                    "bitrate": 2500000,
                    "uri": "https://cdn.example/v.m4s",
                    "init_range": "0-997",
                    "index_range": "998-1561"
                },
                { "itag": 1, "mime_type": "application/octet-stream" }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(info.duration, 212);
    assert_eq!(info.adaptive_streams.len(), 2);

    let video = &info.adaptive_streams[0];
    assert_eq!(video.mime_type, StreamMimeType::VideoMp4);
    assert_eq!(video.height, 1080);
    assert_eq!(video.init_range, Some(ByteRange::new(0, 997)));
    assert_eq!(video.index_range, Some(ByteRange::new(998, 1561)));

    let other = &info.adaptive_streams[1];
    assert_eq!(other.mime_type, StreamMimeType::Unknown);
    assert_eq!(other.width, 0);
    assert!(other.uri.is_empty());
}

#[test]
fn media_info_json_rejects_bad_range() {
    let result = MediaInfo::from_json(
        r#"{ "duration": 1, "adaptive_streams": [ { "itag": 1, "init_range": "oops" } ] }"#,
    );
    assert!(matches!(result, Err(ManifestError::JsonError(_))));
}

#[test]
fn media_info_json_survives_serialization() {
    let info = MediaInfo::new(30).with_stream(
        AdaptiveStream::new(251, StreamMimeType::AudioWebm, "https://cdn.example/a.webm")
            .with_audio_codec("opus")
            .with_bitrate(160_000)
            .with_index_range(ByteRange::new(259, 1023)),
    );

    let json = info.to_json().unwrap();
    assert!(json.contains("\"audio/webm\""));
    assert!(json.contains("\"259-1023\""));
    assert!(!json.contains("video_codec"));

    assert_eq!(MediaInfo::from_json(&json).unwrap(), info);
}

#[test]
fn media_info_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = MediaInfo::from_json_file(dir.path().join("missing.json"));
    assert!(matches!(result, Err(ManifestError::IoError(_))));
}
