//! Media asset description.
//!
//! [`MediaInfo`] is the generator's input: the asset duration and the ordered
//! list of adaptive streams a scraper discovered for it. It can be built in
//! code or loaded from a JSON document.
//!
//! # Example
//!
//! ```
//! use mpdgen::MediaInfo;
//!
//! let info = MediaInfo::from_json(r#"{
//!     "duration": 125,
//!     "adaptive_streams": [
//!         { "itag": 140, "mime_type": "audio/mp4", "audio_codec": "mp4a.40.2",
//!           "bitrate": 128000, "uri": "https://cdn.example/a.m4a",
//!           "init_range": "0-631", "index_range": "632-1099" }
//!     ]
//! }"#)?;
//!
//! assert_eq!(info.duration, 125);
//! assert_eq!(info.adaptive_streams.len(), 1);
//! # Ok::<(), mpdgen::ManifestError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;
use crate::stream::AdaptiveStream;

/// Description of a media asset and its adaptive streams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct MediaInfo {
    /// Total duration in whole seconds.
    #[serde(default)]
    pub duration: u64,
    /// Streams in the order the producer discovered them.
    #[serde(default)]
    pub adaptive_streams: Vec<AdaptiveStream>,
}

impl MediaInfo {
    /// Create an empty description with the given duration.
    pub fn new(duration: u64) -> Self {
        Self {
            duration,
            adaptive_streams: Vec::new(),
        }
    }

    /// Append a stream.
    pub fn with_stream(mut self, stream: AdaptiveStream) -> Self {
        self.adaptive_streams.push(stream);
        self
    }

    /// Append a stream in place.
    pub fn add_adaptive_stream(&mut self, stream: AdaptiveStream) {
        self.adaptive_streams.push(stream);
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::JsonError`] if the document is malformed or
    /// contains an unparsable byte range.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::IoError`] if the file cannot be read, or
    /// [`ManifestError::JsonError`] if it cannot be parsed.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        log::debug!("Loading media info from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize to a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::JsonError`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
