//! Error types for the `mpdgen` crate.
//!
//! This module defines [`ManifestError`], the unified error type returned by
//! all fallible operations in the crate. Streams that cannot be placed in the
//! manifest are never reported here: they are dropped and logged at debug
//! level.

use std::io::Error as IoError;

use serde_json::Error as JsonError;
use thiserror::Error;

/// The unified error type for all `mpdgen` operations.
///
/// Every public method that can fail returns `Result<T, ManifestError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ManifestError {
    /// The generator was asked to produce output before it was ready,
    /// e.g. no [`MediaInfo`](crate::MediaInfo) has been set.
    #[error("Invalid generator state: {0}")]
    InvalidState(String),

    /// Writing the temporary file or renaming it over the target failed.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// A mime type string did not name one of the supported containers.
    #[error("Unsupported mime type: {0:?}")]
    InvalidMimeType(String),

    /// A byte range string was not of the form `start-end`.
    #[error("Invalid byte range: {0:?}")]
    InvalidByteRange(String),

    /// A media info document could not be (de)serialized.
    #[error("JSON error: {0}")]
    JsonError(#[from] JsonError),
}
