//! Transient conversion files
//!
//! A [`TransientFile`] claims a path before anything is written to it and
//! removes the file when dropped, so every exit path of a conversion
//! (success, `?` propagation, panic unwinding) cleans up after itself.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File removed on drop if it exists
#[derive(Debug)]
pub struct TransientFile {
    path: PathBuf,
}

impl TransientFile {
    /// Claims `path`; nothing is created on disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TransientFile {
    fn drop(&mut self) {
        remove_if_exists(&self.path);
    }
}

/// Removes `path`, ignoring a file that was never created
///
/// Other failures are logged and swallowed: cleanup must not replace the
/// error that ended the conversion.
pub fn remove_if_exists(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::trace!(path = %path.display(), "Removed transient file"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            path = %path.display(),
            error = %e,
            "Failed to remove transient file"
        ),
    }
}
