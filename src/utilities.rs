//! Small formatting helpers shared by the emitter.
//!
//! Aspect ratio reduction, ISO-8601 durations, and XML escaping.

use std::borrow::Cow;

/// Aspect ratio reported when a dimension is unknown.
pub const DEFAULT_PAR: &str = "1:1";

/// Greatest common divisor (Euclid). `gcd(a, 0) == a`.
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Reduce `width:height` to lowest terms.
///
/// Returns [`DEFAULT_PAR`] if either dimension is zero.
///
/// ```
/// use mpdgen::pixel_aspect_ratio;
///
/// assert_eq!(pixel_aspect_ratio(1920, 1080), "16:9");
/// assert_eq!(pixel_aspect_ratio(0, 1080), "1:1");
/// ```
pub fn pixel_aspect_ratio(width: u32, height: u32) -> String {
    if width == 0 || height == 0 {
        return DEFAULT_PAR.to_string();
    }

    let divisor = gcd(width, height);
    format!("{}:{}", width / divisor, height / divisor)
}

/// Format whole seconds as an ISO-8601 duration, e.g. `PT125S`.
pub fn iso_duration(seconds: u64) -> String {
    format!("PT{seconds}S")
}

/// Escape the XML special characters in `value`.
///
/// Borrows when nothing needs escaping.
pub(crate) fn escape_xml(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
