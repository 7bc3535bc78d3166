//! Error types for projtree.
//!
//! Every fallible operation returns [`TreeResult<T>`], an alias for
//! `Result<T, TreeError>`.

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while walking a directory tree or writing its rendering.
///
/// Each variant names the path that failed so the CLI can print a single
/// self-contained message.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The path does not exist.
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The path exists but is not a directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The directory could not be listed.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Nesting went past the configured maximum depth.
    #[error("maximum depth {limit} exceeded at {}", path.display())]
    DepthExceeded { path: PathBuf, limit: usize },

    /// Any other I/O failure while reading the filesystem.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output sink rejected a write or flush.
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
}

impl TreeError {
    /// Classify an `io::Error` raised while reading `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => TreeError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => TreeError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::NotADirectory => TreeError::NotADirectory(path.to_path_buf()),
            _ => TreeError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// The path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            TreeError::NotFound(p) | TreeError::NotADirectory(p) | TreeError::PermissionDenied(p) => {
                Some(p.as_path())
            }
            TreeError::DepthExceeded { path, .. } | TreeError::Io { path, .. } => Some(path.as_path()),
            TreeError::Write(_) => None,
        }
    }
}

/// Convenience alias used throughout projtree.
pub type TreeResult<T> = Result<T, TreeError>;
