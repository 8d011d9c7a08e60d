//! Error types for atomic-fileutils.
//!
//! All operations return `Result<T>` which aliases `Result<T, FileUtilsError>`.
//!
//! Any error returned by the atomic writer means the target file was left in
//! its prior state.

use std::path::PathBuf;
use thiserror::Error;

/// Error produced by caller-supplied write logic.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from atomic writes and existence probes.
#[derive(Debug, Error)]
pub enum FileUtilsError {
    /// Target path has no file name component.
    #[error("Invalid target path '{}': no file name", .0.display())]
    InvalidPath(PathBuf),

    /// Parent directory chain could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Temporary file could not be created next to the target.
    #[error("Failed to create temporary file in {}: {source}", dir.display())]
    TempFileCreation {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Caller-supplied write logic reported failure.
    ///
    /// The original error is available through `source()`.
    #[error("Failed to write content for {}: {source}", path.display())]
    ContentWrite {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Flushing or syncing the temporary file failed.
    ///
    /// Only reachable with [`AtomicWriter::sync`](crate::fs::AtomicWriter::sync)
    /// enabled: flushing a `File` is a no-op and errors from the final
    /// `close(2)` are discarded when the handle is dropped.
    #[error("Failed to close temporary file for {}: {source}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Replacing the target with the temporary file failed.
    #[error("Failed to rename temporary file onto {}: {source}", path.display())]
    Rename {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stat failed for a reason other than non-existence.
    #[error("Failed to read metadata for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for atomic-fileutils operations.
pub type Result<T> = std::result::Result<T, FileUtilsError>;
