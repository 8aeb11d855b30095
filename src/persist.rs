//! Crash-safe whole-file writes.
//!
//! [`write_atomic`] writes to a uniquely-named temporary file next to the
//! target (same filesystem, so the rename is atomic) and then renames it over
//! the target. Readers of the target path see either the old content or the
//! new content, never a partial write. On failure the temporary file is
//! removed and the target is left as it was.

use std::io::{Error as IoError, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ManifestError;

/// Atomically replace the contents of `path` with `data`.
///
/// # Errors
///
/// Returns [`ManifestError::IoError`] if the temporary file cannot be created
/// or written, or if the final rename fails.
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), ManifestError> {
    write_atomic_with(path.as_ref(), data, |temporary, target| {
        temporary.persist(target).map(drop).map_err(|error| error.error)
    })
}

/// [`write_atomic`] with the rename step supplied by the caller.
///
/// `rename` owns the temporary file; dropping it without persisting deletes it.
fn write_atomic_with<F>(path: &Path, data: &[u8], rename: F) -> Result<(), ManifestError>
where
    F: FnOnce(NamedTempFile, &Path) -> Result<(), IoError>,
{
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    log::debug!("Writing {} bytes atomically to {}", data.len(), path.display());

    let mut temporary = NamedTempFile::new_in(parent)?;
    temporary.write_all(data)?;
    temporary.as_file().sync_all()?;

    rename(temporary, path)?;

    Ok(())
}
