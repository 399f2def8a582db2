//! Whole-file read/write wrappers and existence checks.
//!
//! Read and write failures are the OS error, unchanged. The existence
//! predicates never fail: anything other than a successful `stat` counts as
//! "does not exist". Use [`path_kind`] to tell a missing path apart from one
//! that could not be inspected.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, trace};

/// Permission bits for files created by [`write_file`] (`rw-r--r--`).
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// What a path refers to, as far as `stat` can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    File,
    Directory,
    Missing,
    /// `stat` failed for a reason other than not-found.
    Unknown(io::ErrorKind),
}

impl PathKind {
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Read the whole file at `path`.
pub fn read_file(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    trace!(path = %path.display(), len = bytes.len(), "read file");
    Ok(bytes)
}

/// Write `bytes` to `path`, creating or truncating it with [`DEFAULT_FILE_MODE`].
pub fn write_file(path: impl AsRef<Path>, bytes: impl AsRef<[u8]>) -> io::Result<()> {
    write_file_with_mode(path, bytes, DEFAULT_FILE_MODE)
}

/// Write `bytes` to `path`, creating or truncating it.
///
/// `mode` applies only when the file is created and is masked by the process
/// umask. It is ignored on non-unix targets.
pub fn write_file_with_mode(
    path: impl AsRef<Path>,
    bytes: impl AsRef<[u8]>,
    mode: u32,
) -> io::Result<()> {
    let path = path.as_ref();
    let bytes = bytes.as_ref();

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    trace!(
        path = %path.display(),
        len = bytes.len(),
        mode = format_args!("{mode:o}"),
        "wrote file"
    );
    Ok(())
}

/// Classify `path`, following symlinks.
pub fn path_kind(path: impl AsRef<Path>) -> PathKind {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => PathKind::Directory,
        Ok(_) => PathKind::File,
        Err(e) if e.kind() == io::ErrorKind::NotFound => PathKind::Missing,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "could not stat path");
            PathKind::Unknown(e.kind())
        }
    }
}

/// Check if `path` exists and is not a directory.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path_kind(path).is_file()
}

/// Check if `path` exists and is a directory.
pub fn directory_exists(path: impl AsRef<Path>) -> bool {
    path_kind(path).is_dir()
}
