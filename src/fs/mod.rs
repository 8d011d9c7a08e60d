//! File system primitives.
//!
//! Provides crash-safe atomic writes and metadata-based existence probes.

pub mod atomic;
pub mod probe;

pub use atomic::{AtomicWriter, DEFAULT_DIR_MODE, atomic_write, write_bytes};
pub use probe::{EntryKind, dir_exists, exists, file_exists, is_dir, is_file, kind};
