//! Atomic file writes via temp-file-and-rename.
//!
//! Content is staged in a temporary file created in the target's own
//! directory, then moved over the target with a single `rename()`. Readers of
//! the target observe either the old content or the complete new content.
//!
//! ## Execution Guarantees
//!
//! - **Atomicity**: The target is replaced by one rename on the same volume
//! - **No partial writes**: Content is never written to the target path directly
//! - **No littering**: The temp file is deleted on every failure path
//! - **Prior state on error**: Any returned error leaves the target untouched
//!
//! Cleanup is best-effort. If deleting the temp file fails after another
//! error, the deletion failure is logged and the original error is returned.
//!
//! ## Example
//!
//! ```no_run
//! # use atomic_fileutils::fs::atomic_write;
//! # use std::io::Write;
//! # fn example() -> atomic_fileutils::Result<()> {
//! atomic_write("config/settings.toml", |file| {
//!     file.write_all(b"verbose = true\n")
//! })?;
//! # Ok(())
//! # }
//! ```

use crate::error::{BoxError, FileUtilsError, Result};

use std::fs::{DirBuilder, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Mode applied to directories created for the target (before umask).
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Atomically replaces the file at `path` with content produced by `write_fn`.
///
/// Missing parent directories are created. `write_fn` receives the temp file
/// and may write any amount of data, including nothing. If it returns an
/// error, the target is left unchanged and the error is surfaced as
/// [`FileUtilsError::ContentWrite`].
pub fn atomic_write<P, F, E>(path: P, write_fn: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut File) -> std::result::Result<(), E>,
    E: Into<BoxError>,
{
    AtomicWriter::new(path).write(write_fn)
}

/// Atomically replaces the file at `path` with `contents`.
pub fn write_bytes<P: AsRef<Path>>(path: P, contents: impl AsRef<[u8]>) -> Result<()> {
    AtomicWriter::new(path).write_bytes(contents)
}

/// Configurable atomic write to a single target path.
///
/// Holds no state across calls; each `write` stages its own temp file.
#[derive(Debug, Clone)]
pub struct AtomicWriter {
    path: PathBuf,
    sync: bool,
    #[cfg_attr(not(unix), allow(dead_code))]
    dir_mode: u32,
}

impl AtomicWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sync: false,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }

    /// Calls `sync_all` on the temp file before it is renamed.
    ///
    /// Off by default. Durability beyond this is not attempted.
    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Mode for directories created on the way to the target. Unix only.
    pub fn dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_bytes(&self, contents: impl AsRef<[u8]>) -> Result<()> {
        self.write(|file| file.write_all(contents.as_ref()))
    }

    /// Stages content through `write_fn` and renames it onto the target.
    ///
    /// Order:
    /// 1. Create parent directories
    /// 2. Create temp file in the parent
    /// 3. Run `write_fn`
    /// 4. Flush (and optionally sync), then close
    /// 5. Rename over the target
    ///
    /// Steps 3-5 delete the temp file on failure.
    pub fn write<F, E>(&self, write_fn: F) -> Result<()>
    where
        F: FnOnce(&mut File) -> std::result::Result<(), E>,
        E: Into<BoxError>,
    {
        let (dir, name) = self.split_target()?;

        self.create_parent(&dir)?;

        let prefix = format!(".{}.", name.to_string_lossy());
        let mut temp = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(".tmp")
            .tempfile_in(&dir)
            .map_err(|source| FileUtilsError::TempFileCreation {
                dir: dir.clone(),
                source,
            })?;

        log::debug!(
            "Staging {} via {}",
            self.path.display(),
            temp.path().display()
        );

        if let Err(e) = write_fn(temp.as_file_mut()) {
            discard(temp);
            return Err(FileUtilsError::ContentWrite {
                path: self.path.clone(),
                source: e.into(),
            });
        }

        let (mut file, temp_path) = temp.into_parts();

        let finished = file
            .flush()
            .and_then(|()| if self.sync { file.sync_all() } else { Ok(()) });
        drop(file);

        if let Err(source) = finished {
            if let Err(e) = temp_path.close() {
                log::warn!("Failed to remove temporary file: {}", e);
            }
            return Err(FileUtilsError::Close {
                path: self.path.clone(),
                source,
            });
        }

        if let Err(e) = temp_path.persist(&self.path) {
            let stray = e.path.to_path_buf();
            if let Err(cleanup) = e.path.close() {
                log::warn!(
                    "Failed to remove temporary file {}: {}",
                    stray.display(),
                    cleanup
                );
            }
            return Err(FileUtilsError::Rename {
                path: self.path.clone(),
                source: e.error,
            });
        }

        log::debug!("Committed: {}", self.path.display());
        Ok(())
    }

    /// Splits the target into (parent directory, file name).
    ///
    /// A bare file name resolves to the current directory.
    fn split_target(&self) -> Result<(PathBuf, std::ffi::OsString)> {
        let name = self
            .path
            .file_name()
            .ok_or_else(|| FileUtilsError::InvalidPath(self.path.clone()))?
            .to_os_string();

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok((dir, name))
    }

    /// Creates `dir` and all missing ancestors. Succeeds if they exist.
    fn create_parent(&self, dir: &Path) -> Result<()> {
        let mut builder = DirBuilder::new();
        builder.recursive(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.dir_mode);
        }

        builder
            .create(dir)
            .map_err(|source| FileUtilsError::DirectoryCreation {
                path: dir.to_path_buf(),
                source,
            })?;

        log::debug!("Parent directory ready: {}", dir.display());
        Ok(())
    }
}

/// Deletes an unneeded temp file, logging instead of failing.
fn discard(temp: NamedTempFile) {
    let stray = temp.path().to_path_buf();
    if let Err(e) = temp.close() {
        log::warn!("Failed to remove temporary file {}: {}", stray.display(), e);
    }
}
