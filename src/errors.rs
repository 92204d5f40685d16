use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Navigation-level errors. Every variant is terminal: the first error
/// ends interactive browsing and is surfaced verbatim before exit.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("too many arguments, expected at most one starting directory")]
    Usage,

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("{}: no such file or directory", .0.display())]
    NotFound(PathBuf),

    #[error("{} is a file, expected directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl NavError {
    /// Wrap an I/O failure that occurred while reading `path`.
    pub fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type NavResult<T> = Result<T, NavError>;
