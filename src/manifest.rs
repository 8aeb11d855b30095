//! MPD document emission.
//!
//! [`emit_manifest`] renders adaptation groups as an on-demand, static DASH
//! manifest. Element nesting depths are fixed: `MPD` 0, `Period` 1,
//! `AdaptationSet` 2, `Representation` 3, `BaseURL`/`SegmentBase` 4,
//! `Initialization` 5.

use crate::adaptation::AdaptationGroup;
use crate::config::ManifestConfig;
use crate::metadata::MediaInfo;
use crate::stream::AdaptiveStream;
use crate::utilities::iso_duration;
use crate::writer::ManifestWriter;

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const MPD_NAMESPACE: &str = "urn:mpeg:dash:schema:mpd:2011";
const MPD_SCHEMA_LOCATION: &str = "urn:mpeg:dash:schema:mpd:2011 DASH-MPD.xsd";
const ON_DEMAND_PROFILE: &str = "urn:mpeg:dash:profile:isoff-on-demand:2011";

/// Upper bound for `minBufferTime`, in seconds.
const MAX_MIN_BUFFER_TIME: u64 = 2;

/// Render `groups` as an MPD document.
///
/// Returns an empty string when `groups` is empty.
pub fn emit_manifest(
    media_info: &MediaInfo,
    groups: &[AdaptationGroup<'_>],
    config: &ManifestConfig,
) -> String {
    if groups.is_empty() {
        log::debug!("No adaptations to emit");
        return String::new();
    }

    let mut writer = ManifestWriter::new(config);

    writer.begin(0, "<?xml");
    writer.attr_str("version", "1.0");
    writer.attr_str("encoding", "UTF-8");
    writer.finish("?>");

    let duration = media_info.duration;
    writer.begin(0, "<MPD");
    writer.attr_str("xmlns:xsi", XSI_NAMESPACE);
    writer.attr_str("xmlns", MPD_NAMESPACE);
    writer.attr_str("xsi:schemaLocation", MPD_SCHEMA_LOCATION);
    writer.attr_str("type", "static");
    writer.attr_str("mediaPresentationDuration", &iso_duration(duration));
    writer.attr_str(
        "minBufferTime",
        &iso_duration(duration.min(MAX_MIN_BUFFER_TIME)),
    );
    writer.attr_str("profiles", ON_DEMAND_PROFILE);
    writer.finish(">");

    writer.line(1, "<Period>");
    for group in groups {
        write_adaptation_set(&mut writer, group);
    }
    writer.line(1, "</Period>");
    writer.begin(0, "</MPD>");

    writer.into_string()
}

fn write_adaptation_set(writer: &mut ManifestWriter, group: &AdaptationGroup<'_>) {
    let (Some(content_type), Some(mime_type)) = (group.content_type(), group.mime_str()) else {
        log::debug!("Adaptation is missing contentType or mimeType, ignoring it");
        return;
    };

    writer.begin(2, "<AdaptationSet");
    writer.attr_str("contentType", content_type);
    writer.attr_str("mimeType", mime_type);
    writer.attr_bool("subsegmentAlignment", true);
    writer.attr_int("subsegmentStartsWithSAP", 1);
    if group.mime_type().is_video() {
        writer.attr_int("maxWidth", group.max_width().into());
        writer.attr_int("maxHeight", group.max_height().into());
        writer.attr_str("par", &group.par());
        writer.attr_int("maxFrameRate", group.max_fps().into());
    }
    writer.finish(">");

    for stream in group.streams() {
        write_representation(writer, stream);
    }

    writer.line(2, "</AdaptationSet>");
}

fn write_representation(writer: &mut ManifestWriter, stream: &AdaptiveStream) {
    writer.begin(3, "<Representation");
    writer.attr_int("id", stream.itag.into());
    if let Some(codecs) = stream.codecs() {
        writer.attr_str("codecs", &codecs);
    }
    writer.attr_int("bandwidth", stream.bitrate);
    if stream.width > 0 {
        writer.attr_int("width", stream.width.into());
    }
    if stream.height > 0 {
        writer.attr_int("height", stream.height.into());
    }
    if stream.width > 0 && stream.height > 0 {
        writer.attr_str("sar", "1:1");
    }
    if stream.fps > 0 {
        writer.attr_int("frameRate", stream.fps.into());
    }
    writer.finish(">");

    writer.begin(4, "<BaseURL>");
    writer.text(&stream.uri);
    writer.finish("</BaseURL>");

    writer.begin(4, "<SegmentBase");
    if let Some(range) = &stream.index_range {
        writer.attr_range("indexRange", range);
    }
    writer.attr_bool("indexRangeExact", true);
    writer.finish(">");

    writer.begin(5, "<Initialization");
    if let Some(range) = &stream.init_range {
        writer.attr_range("range", range);
    }
    writer.finish("/>");

    writer.line(4, "</SegmentBase>");
    writer.line(3, "</Representation>");
}
