//! Read and create-only write operations with file locking

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use fs2::FileExt;

use crate::{Error, Result};

/// What [`write_new`] did with the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was written.
    Created,
    /// A file was already present and was left untouched.
    Existing,
}

/// Read the raw bytes of a file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Create a directory and all of its parents.
///
/// A directory that already exists is not an error. A regular file in the
/// way is reported as [`Error::NotADirectory`].
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    if path.exists() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Write content to a file only if no file exists at `path`.
///
/// The file is opened with create-new semantics, so a file that appears
/// between the caller's check and the write is also left alone. An exclusive
/// advisory lock is held while the content is written. If writing fails
/// after the file was created, the partial file is removed so a retry starts
/// from a clean slate.
pub fn write_new(path: &Path, content: &[u8]) -> Result<WriteOutcome> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "file exists, leaving untouched");
            return Ok(WriteOutcome::Existing);
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let written = (|| {
        file.lock_exclusive().map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;
        file.write_all(content).map_err(|e| Error::io(path, e))?;
        file.sync_all().map_err(|e| Error::io(path, e))?;
        file.unlock().map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })
    })();

    if let Err(err) = written {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            tracing::warn!(
                path = %path.display(),
                error = %cleanup,
                "failed to remove partial file"
            );
        }
        return Err(err);
    }

    Ok(WriteOutcome::Created)
}

/// Write text content to a file only if no file exists at `path`.
pub fn write_text_new(path: &Path, content: &str) -> Result<WriteOutcome> {
    write_new(path, content.as_bytes())
}
