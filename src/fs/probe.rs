//! Existence probes over file system metadata.
//!
//! Each probe stats the path once (following symlinks) and classifies the
//! result. A missing path is `false`, not an error.

use crate::error::{FileUtilsError, Result};

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// What a path refers to after following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Exists, but is neither a regular file nor a directory (fifo, socket, device).
    Other,
    Missing,
}

impl EntryKind {
    pub fn exists(self) -> bool {
        self != EntryKind::Missing
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
            EntryKind::Other => "other",
            EntryKind::Missing => "missing",
        };
        f.write_str(s)
    }
}

/// Classifies `path` with a single stat call.
///
/// # Errors
///
/// Returns [`FileUtilsError::Metadata`] for any stat failure other than
/// `NotFound`.
pub fn kind<P: AsRef<Path>>(path: P) -> Result<EntryKind> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) => {
            let file_type = meta.file_type();
            Ok(if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(EntryKind::Missing),
        Err(source) => Err(FileUtilsError::Metadata {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Returns true if `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    Ok(kind(path)? == EntryKind::File)
}

/// Returns true if `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> Result<bool> {
    Ok(kind(path)? == EntryKind::Directory)
}

/// Returns true if anything exists at `path`.
pub fn exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    Ok(kind(path)?.exists())
}

/// Alias for [`is_file`].
pub fn file_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    is_file(path)
}

/// Alias for [`is_dir`].
pub fn dir_exists<P: AsRef<Path>>(path: P) -> Result<bool> {
    is_dir(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_path_is_false_everywhere() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        assert_eq!(kind(&missing).unwrap(), EntryKind::Missing);
        assert!(!is_file(&missing).unwrap());
        assert!(!is_dir(&missing).unwrap());
        assert!(!exists(&missing).unwrap());
    }

    #[test]
    fn test_regular_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.txt");
        fs::write(&file, "x").unwrap();

        assert!(is_file(&file).unwrap());
        assert!(file_exists(&file).unwrap());
        assert!(!is_dir(&file).unwrap());
        assert!(exists(&file).unwrap());
    }

    #[test]
    fn test_directory() {
        let temp = TempDir::new().unwrap();

        assert!(is_dir(temp.path()).unwrap());
        assert!(dir_exists(temp.path()).unwrap());
        assert!(!is_file(temp.path()).unwrap());
        assert!(exists(temp.path()).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_socket_is_other() {
        use std::os::unix::net::UnixListener;

        let temp = TempDir::new().unwrap();
        let sock = temp.path().join("probe.sock");
        let _listener = UnixListener::bind(&sock).unwrap();

        assert_eq!(kind(&sock).unwrap(), EntryKind::Other);
        assert!(!is_file(&sock).unwrap());
        assert!(!is_dir(&sock).unwrap());
        assert!(exists(&sock).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_as_path_component_is_metadata_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.txt");
        fs::write(&file, "x").unwrap();

        let result = exists(file.join("child"));

        assert!(matches!(
            result.unwrap_err(),
            FileUtilsError::Metadata { .. }
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(EntryKind::Directory.to_string(), "directory");
        assert_eq!(EntryKind::Missing.to_string(), "missing");
    }
}
